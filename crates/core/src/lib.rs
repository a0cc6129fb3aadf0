//! Tinshop Core - Domain types and shop logic.
//!
//! This crate provides the product catalog, the shopping cart, and the order
//! snapshot behind the `tinshop` terminal storefront.
//!
//! # Architecture
//!
//! The core crate contains types and pure logic - no terminal access, no file
//! I/O, no logging. This keeps it lightweight and allows it to be used
//! anywhere. Persisting orders and talking to the user is the CLI's job.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe ids, prices, and customer names
//! - [`catalog`] - The authoritative set of purchasable products and stock
//! - [`cart`] - A transient per-session record of desired quantities
//! - [`order`] - An immutable snapshot of a completed purchase

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod order;
pub mod types;

pub use cart::{Cart, CartError, CartLine};
pub use catalog::Catalog;
pub use order::{CheckoutError, MissingItemPolicy, Order, OrderLine};
pub use types::*;
