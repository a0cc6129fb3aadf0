//! An immutable snapshot of a completed purchase.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::types::{CustomerName, OrderId, ProductId};

/// What to do at checkout with cart entries whose product is no longer in
/// the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingItemPolicy {
    /// Record the entry with an absent name and a zero contribution to the
    /// total. Matches the historical behavior of silently ignoring stale
    /// entries.
    #[default]
    DropSilently,
    /// Refuse to construct the order, listing the unresolvable ids.
    FailOnCheckout,
}

impl std::fmt::Display for MissingItemPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DropSilently => write!(f, "drop-silently"),
            Self::FailOnCheckout => write!(f, "fail-on-checkout"),
        }
    }
}

impl std::str::FromStr for MissingItemPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drop-silently" => Ok(Self::DropSilently),
            "fail-on-checkout" => Ok(Self::FailOnCheckout),
            _ => Err(format!(
                "invalid missing-item policy: {s} (expected drop-silently or fail-on-checkout)"
            )),
        }
    }
}

/// Errors that can occur when constructing an [`Order`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// The cart holds no entries.
    #[error("the cart is empty")]
    EmptyCart,
    /// Under [`MissingItemPolicy::FailOnCheckout`], one or more cart entries
    /// no longer resolve in the catalog.
    #[error("products no longer in the catalog: {}", format_ids(.0))]
    MissingProducts(Vec<ProductId>),
}

fn format_ids(ids: &[ProductId]) -> String {
    ids.iter()
        .map(ProductId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One purchased line in an order record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Product id as carted.
    pub id: ProductId,
    /// Purchased quantity.
    pub quantity: u32,
    /// Product name resolved at snapshot time; absent when the product had
    /// already vanished from the catalog.
    pub name: Option<String>,
}

/// An immutable, persistable snapshot of a checked-out cart.
///
/// Constructed once at checkout and never mutated afterwards. Names and
/// prices are resolved at construction time; later catalog changes do not
/// affect the record. Serializes directly to the on-disk order record: one
/// self-describing JSON object, with the creation timestamp in RFC 3339 UTC
/// carrying an explicit `Z` suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Generated order id.
    pub id: OrderId,
    /// Who the order was placed for.
    pub customer: CustomerName,
    /// Creation timestamp (UTC).
    #[serde(with = "rfc3339_z")]
    pub created_at: DateTime<Utc>,
    /// Purchased lines, in id order.
    pub items: Vec<OrderLine>,
    /// Sum of `price * quantity` over lines that resolved at snapshot time.
    pub total: Decimal,
}

impl Order {
    /// Snapshot `cart` into an order for `customer`.
    ///
    /// Each cart entry is resolved against `catalog` now; entries that do
    /// not resolve are handled per `policy`. Unresolvable lines that are
    /// kept carry `name: None` and contribute zero to the total.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] for an empty cart, or
    /// [`CheckoutError::MissingProducts`] under
    /// [`MissingItemPolicy::FailOnCheckout`] when any entry is unresolvable.
    pub fn from_cart(
        cart: &Cart,
        catalog: &Catalog,
        customer: CustomerName,
        policy: MissingItemPolicy,
    ) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let missing: Vec<ProductId> = cart
            .items()
            .filter(|(id, _)| catalog.get(id.as_str()).is_none())
            .map(|(id, _)| id.clone())
            .collect();
        if policy == MissingItemPolicy::FailOnCheckout && !missing.is_empty() {
            return Err(CheckoutError::MissingProducts(missing));
        }

        let mut items = Vec::with_capacity(cart.len());
        let mut total = Decimal::ZERO;
        for (id, quantity) in cart.items() {
            let product = catalog.get(id.as_str());
            if let Some(product) = product {
                total += product.price.line_total(quantity);
            }
            items.push(OrderLine {
                id: id.clone(),
                quantity,
                name: product.map(|p| p.name.clone()),
            });
        }

        Ok(Self {
            id: OrderId::generate(),
            customer,
            created_at: Utc::now(),
            items,
            total,
        })
    }
}

/// RFC 3339 timestamps with an explicit `Z` suffix.
///
/// `chrono`'s default serialization renders UTC as `+00:00`; the order log
/// format requires the `Z` form.
mod rfc3339_z {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(
        created_at: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&created_at.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}
