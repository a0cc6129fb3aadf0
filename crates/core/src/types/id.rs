//! Newtype ids for type-safe entity references.
//!
//! Product ids are caller-supplied string handles (`"p1"`, `"mug-300"`);
//! order ids are generated UUIDs. Keeping them as distinct types prevents
//! accidentally mixing ids from different entity types.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A product's unique string identifier.
///
/// Product ids are the keys of the catalog and of cart entries. They compare
/// and order lexicographically, which is what gives listings their stable
/// order. `Borrow<str>` lets map lookups accept plain `&str` keys, so the CLI
/// never has to build a `ProductId` out of user input.
///
/// # Example
///
/// ```
/// use tinshop_core::ProductId;
///
/// let id = ProductId::new("p1");
/// assert_eq!(id.as_str(), "p1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product id from a string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A generated order identifier (UUID v4).
///
/// Assigned once when the order snapshot is constructed; persisted with the
/// order record so individual log lines stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Generate a fresh random order id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for OrderId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}
