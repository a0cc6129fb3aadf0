//! Application-level error type.
//!
//! Everything the user can recover from (unknown ids, bad quantities, an
//! empty cart) is reported inline by the session loop and never becomes an
//! `AppError`. This type covers the failures that end a run: configuration
//! problems and broken terminal I/O.

use thiserror::Error;

use crate::config::ConfigError;
use crate::orderlog::OrderLogError;

/// Application-level error type for the CLI.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Writing the order log failed.
    #[error("order log error: {0}")]
    OrderLog(#[from] OrderLogError),

    /// Terminal I/O failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
