//! A transient per-session record of desired quantities.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::types::{Price, Product, ProductId};

/// Errors that can occur when mutating a [`Cart`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The requested quantity was zero.
    #[error("quantity must be positive")]
    ZeroQuantity,
    /// The product does not have enough stock for the requested quantity.
    #[error("not enough stock (available: {available})")]
    InsufficientStock {
        /// Units in stock at the time of the call.
        available: u32,
    },
    /// The product id is not in the cart.
    #[error("item is not in the cart")]
    NotInCart,
}

/// A cart line item resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// Product id.
    pub id: ProductId,
    /// Product name at resolution time.
    pub name: String,
    /// Unit price at resolution time.
    pub unit_price: Price,
    /// Requested quantity.
    pub quantity: u32,
    /// `unit_price * quantity`.
    pub subtotal: Decimal,
}

/// A customer's pending selections, keyed by product id.
///
/// The cart stores quantities only; names and prices are resolved against the
/// catalog when viewing or checking out. Stock is validated at add time and
/// may go stale afterwards (another add can consume it, or the product can
/// vanish from the catalog entirely). That staleness is tolerated by design:
/// [`Cart::view`] and [`Cart::total`] skip entries that no longer resolve,
/// and checkout applies the configured
/// [`MissingItemPolicy`](crate::MissingItemPolicy).
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: BTreeMap<ProductId, u32>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` units of `product`, creating the entry if absent.
    ///
    /// The stock check is against the product's stock at the time of this
    /// call; repeated adds are not bounded cumulatively.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ZeroQuantity`] for a zero quantity, or
    /// [`CartError::InsufficientStock`] when `qty` exceeds the product's
    /// current stock. The cart is unchanged on error.
    pub fn add(&mut self, product: &Product, qty: u32) -> Result<(), CartError> {
        if qty == 0 {
            return Err(CartError::ZeroQuantity);
        }
        if qty > product.stock {
            return Err(CartError::InsufficientStock {
                available: product.stock,
            });
        }
        *self.items.entry(product.id.clone()).or_insert(0) += qty;
        Ok(())
    }

    /// Remove `qty` units of the product with `id`.
    ///
    /// A removal quantity at or above the current quantity deletes the entry
    /// entirely; otherwise the quantity is decremented.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotInCart`] when the id has no entry. The cart is
    /// unchanged on error.
    pub fn remove(&mut self, id: &str, qty: u32) -> Result<(), CartError> {
        let Some(current) = self.items.get_mut(id) else {
            return Err(CartError::NotInCart);
        };
        if qty >= *current {
            self.items.remove(id);
        } else {
            *current -= qty;
        }
        Ok(())
    }

    /// Whether the cart holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The quantity carted for `id`, if any.
    #[must_use]
    pub fn quantity(&self, id: &str) -> Option<u32> {
        self.items.get(id).copied()
    }

    /// The raw `(id, quantity)` entries, in id order.
    pub fn items(&self) -> impl Iterator<Item = (&ProductId, u32)> {
        self.items.iter().map(|(id, qty)| (id, *qty))
    }

    /// Line items resolved against `catalog`, in id order.
    ///
    /// Entries whose id no longer resolves are silently omitted.
    #[must_use]
    pub fn view(&self, catalog: &Catalog) -> Vec<CartLine> {
        self.items
            .iter()
            .filter_map(|(id, &qty)| {
                catalog.get(id.as_str()).map(|product| CartLine {
                    id: id.clone(),
                    name: product.name.clone(),
                    unit_price: product.price,
                    quantity: qty,
                    subtotal: product.price.line_total(qty),
                })
            })
            .collect()
    }

    /// Sum of subtotals over entries that resolve in `catalog`.
    ///
    /// Unresolvable entries contribute zero.
    #[must_use]
    pub fn total(&self, catalog: &Catalog) -> Decimal {
        self.items
            .iter()
            .filter_map(|(id, &qty)| {
                catalog
                    .get(id.as_str())
                    .map(|product| product.price.line_total(qty))
            })
            .sum()
    }
}
