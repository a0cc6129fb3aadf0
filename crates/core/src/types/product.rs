//! Purchasable product.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A purchasable product with live stock.
///
/// Products are owned exclusively by the [`Catalog`](crate::Catalog); the
/// only mutation after construction is the stock decrement performed at
/// checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, the catalog key.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Units currently in stock.
    pub stock: u32,
    /// Free-text description.
    pub description: String,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        stock: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
            description: description.into(),
        }
    }
}
