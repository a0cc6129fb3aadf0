//! The authoritative set of purchasable products and their stock levels.

use std::collections::BTreeMap;

use crate::types::{Product, ProductId};

/// The product catalog.
///
/// Seed data is an explicit construction argument rather than a module-level
/// constant, so test fixtures stay deterministic. Products are keyed by id;
/// listings come back in id order, which keeps output stable across runs.
///
/// Single-session, single-threaded use is assumed: stock is only mutated by
/// [`Catalog::decrement_stock`] during checkout.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: BTreeMap<ProductId, Product>,
}

impl Catalog {
    /// Build a catalog from seed products.
    ///
    /// If two products share an id, the later one wins.
    #[must_use]
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    /// All products, in id order.
    pub fn list(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Look up a product by id. No side effects.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    /// Case-insensitive substring search over product name and description.
    ///
    /// An empty term matches every product.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Product> {
        let needle = term.to_lowercase();
        self.products
            .values()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Decrement a product's stock by `qty`, flooring at zero.
    ///
    /// Returns `false` (a no-op) when the id is not in the catalog, so
    /// checkout can skip products that vanished after they were carted.
    pub fn decrement_stock(&mut self, id: &str, qty: u32) -> bool {
        match self.products.get_mut(id) {
            Some(product) => {
                product.stock = product.stock.saturating_sub(qty);
                true
            }
            None => false,
        }
    }

    /// Remove a product from the catalog, returning it if present.
    ///
    /// Cart entries referencing the removed id become unresolvable; what
    /// happens to them at checkout is governed by
    /// [`MissingItemPolicy`](crate::MissingItemPolicy).
    pub fn remove(&mut self, id: &str) -> Option<Product> {
        self.products.remove(id)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
