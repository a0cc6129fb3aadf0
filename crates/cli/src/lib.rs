//! Tinshop CLI - the interactive storefront around [`tinshop_core`].
//!
//! The binary wires a seeded [`Catalog`](tinshop_core::Catalog) and an empty
//! cart into a menu-driven session over stdin/stdout. Everything with a side
//! effect lives here: the order log writer, environment configuration, and
//! the session loop itself. The loop runs over generic `BufRead`/`Write`
//! handles so tests can drive it with in-memory buffers.
//!
//! # Modules
//!
//! - [`config`] - Environment/flag configuration
//! - [`error`] - Application-level error type
//! - [`orderlog`] - Append-only JSON Lines order persistence
//! - [`seed`] - Demo catalog data
//! - [`session`] - The menu loop and its command handlers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod orderlog;
pub mod seed;
pub mod session;
