//! Demo catalog data.

use tinshop_core::{Catalog, Price, Product, ProductId};

/// The sample inventory the shop starts with.
///
/// Passed into [`Catalog::new`] explicitly so tests can seed whatever
/// fixture they need instead.
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::new([
        Product::new(
            ProductId::new("p1"),
            "T-shirt",
            Price::from_cents(1999),
            10,
            "Comfortable cotton tee",
        ),
        Product::new(
            ProductId::new("p2"),
            "Sneakers",
            Price::from_cents(5999),
            5,
            "Running shoes",
        ),
        Product::new(
            ProductId::new("p3"),
            "Coffee Mug",
            Price::from_cents(950),
            20,
            "Ceramic mug 300ml",
        ),
        Product::new(
            ProductId::new("p4"),
            "Notebook",
            Price::from_cents(425),
            50,
            "A5 ruled notebook",
        ),
        Product::new(
            ProductId::new("p5"),
            "Backpack",
            Price::from_cents(3900),
            7,
            "Water-resistant backpack",
        ),
    ])
}
