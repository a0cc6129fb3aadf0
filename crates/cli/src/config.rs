//! Shop configuration from CLI flags and environment variables.
//!
//! # Environment Variables
//!
//! - `TINSHOP_ORDER_LOG` - Path of the append-only order log
//!   (default: `data/orders.jsonl`)
//! - `TINSHOP_MISSING_ITEM_POLICY` - What checkout does with cart entries
//!   whose product vanished from the catalog: `drop-silently` (default) or
//!   `fail-on-checkout`
//!
//! CLI flags take precedence over the environment; a `.env` file is loaded
//! when present.

use std::path::PathBuf;

use thiserror::Error;

use tinshop_core::MissingItemPolicy;

/// Default order log path, relative to the working directory.
pub const DEFAULT_ORDER_LOG: &str = "data/orders.jsonl";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid missing-item policy: {0}")]
    InvalidPolicy(String),
}

/// Shop application configuration.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Where order records are appended.
    pub order_log: PathBuf,
    /// Checkout behavior for unresolvable cart entries.
    pub missing_item_policy: MissingItemPolicy,
}

impl ShopConfig {
    /// Resolve configuration from CLI flags and the environment.
    ///
    /// Resolution order per setting: flag, then environment variable, then
    /// default. Calls `dotenvy::dotenv()` to load a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the policy value does not parse.
    pub fn load(
        order_log_flag: Option<PathBuf>,
        policy_flag: Option<String>,
    ) -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let order_log = order_log_flag
            .unwrap_or_else(|| PathBuf::from(get_env_or_default("TINSHOP_ORDER_LOG", DEFAULT_ORDER_LOG)));

        let policy_value = policy_flag.or_else(|| get_optional_env("TINSHOP_MISSING_ITEM_POLICY"));
        let missing_item_policy = match policy_value {
            Some(value) => value
                .parse::<MissingItemPolicy>()
                .map_err(ConfigError::InvalidPolicy)?,
            None => MissingItemPolicy::default(),
        };

        Ok(Self {
            order_log,
            missing_item_policy,
        })
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
