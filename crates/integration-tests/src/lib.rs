//! End-to-end tests for tinshop.
//!
//! Tests in `tests/` run scripted sessions against the real session loop and
//! a temporary order log, then assert on the printed transcript, the shop
//! state, and the persisted records.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tinshop_cli::orderlog::OrderLog;
use tinshop_cli::seed::sample_catalog;
use tinshop_cli::session::{self, Shop};
use tinshop_core::MissingItemPolicy;

/// A shop over the demo catalog, writing orders into `dir`.
#[must_use]
pub fn demo_shop(dir: &tempfile::TempDir, policy: MissingItemPolicy) -> Shop {
    Shop::new(
        sample_catalog(),
        OrderLog::new(order_log_path(dir)),
        policy,
    )
}

/// Where [`demo_shop`] writes its order log.
#[must_use]
pub fn order_log_path(dir: &tempfile::TempDir) -> std::path::PathBuf {
    dir.path().join("data").join("orders.jsonl")
}

/// Feed `script` to the session loop and return the printed transcript.
///
/// # Panics
///
/// Panics when the session itself fails; scripted sessions only exercise
/// recoverable paths.
pub fn run_script(shop: &mut Shop, script: &str) -> String {
    let mut output = Vec::new();
    session::run(shop, &mut script.as_bytes(), &mut output)
        .expect("scripted session should not fail");
    String::from_utf8(output).expect("session output should be UTF-8")
}
