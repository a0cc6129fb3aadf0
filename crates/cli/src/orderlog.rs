//! Append-only order persistence.
//!
//! Orders are written as JSON Lines: one self-describing record per line,
//! UTF-8, newline-delimited. Append is the only write mode - no
//! read-modify-write, no deduplication, no indexing of prior orders. The
//! file is opened, appended to, and closed once per checkout.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use tinshop_core::Order;

/// Errors that can occur when appending to the order log.
#[derive(Debug, Error)]
pub enum OrderLogError {
    /// Creating the file or writing the record failed.
    #[error("failed to write order log: {0}")]
    Io(#[from] std::io::Error),
    /// Serializing the order record failed.
    #[error("failed to encode order record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Append-only writer for the order log file.
#[derive(Debug, Clone)]
pub struct OrderLog {
    path: PathBuf,
}

impl OrderLog {
    /// Create a writer targeting `path`. Nothing is opened until
    /// [`OrderLog::append`] is called.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The target path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `order` to a single JSON line and append it.
    ///
    /// The file and any missing parent directories are created on first use.
    ///
    /// # Errors
    ///
    /// Returns `OrderLogError` if serialization or any filesystem operation
    /// fails. Nothing is written on serialization failure.
    pub fn append(&self, order: &Order) -> Result<(), OrderLogError> {
        let mut line = serde_json::to_string(order)?;
        line.push('\n');

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
                debug!(dir = %parent.display(), "created order log directory");
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}
