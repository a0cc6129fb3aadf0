//! Tinshop - a menu-driven terminal storefront.
//!
//! # Usage
//!
//! ```bash
//! # Start the shop with the demo catalog
//! tinshop
//!
//! # Write orders somewhere else
//! tinshop --order-log /tmp/orders.jsonl
//!
//! # Refuse checkout when a carted product vanished from the catalog
//! tinshop --missing-item-policy fail-on-checkout
//! ```
//!
//! Configuration can also come from the environment (`TINSHOP_ORDER_LOG`,
//! `TINSHOP_MISSING_ITEM_POLICY`); flags win.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::Parser;

use tinshop_cli::config::ShopConfig;
use tinshop_cli::error::Result;
use tinshop_cli::orderlog::OrderLog;
use tinshop_cli::seed;
use tinshop_cli::session::{self, Shop};

#[derive(Parser)]
#[command(name = "tinshop")]
#[command(author, version, about = "Menu-driven terminal storefront")]
struct Cli {
    /// Path of the append-only order log
    #[arg(long)]
    order_log: Option<PathBuf>,

    /// Checkout behavior for cart items whose product left the catalog
    /// (`drop-silently` or `fail-on-checkout`)
    #[arg(long)]
    missing_item_policy: Option<String>,
}

fn main() {
    // Initialize tracing; default to info level for our crates if RUST_LOG
    // is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tinshop_cli=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Session failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = ShopConfig::load(cli.order_log, cli.missing_item_policy)?;
    let catalog = seed::sample_catalog();
    tracing::info!(
        products = catalog.len(),
        order_log = %config.order_log.display(),
        policy = %config.missing_item_policy,
        "starting tinshop"
    );

    let mut shop = Shop::new(
        catalog,
        OrderLog::new(config.order_log),
        config.missing_item_policy,
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session::run(&mut shop, &mut stdin.lock(), &mut stdout.lock())
}
