//! The interactive menu loop.
//!
//! One actor, one command at a time: the loop prints the menu, reads a
//! choice, and dispatches to the catalog, the cart, or checkout. Every user
//! mistake (unknown id, bad quantity, empty cart) is reported and the menu
//! comes back; nothing here ends the process. The loop is generic over
//! `BufRead`/`Write` so tests can run scripted sessions against in-memory
//! buffers.

use std::io::{BufRead, Write};

use rust_decimal::Decimal;
use tracing::{debug, error, info};

use tinshop_core::{
    Cart, CartError, Catalog, CheckoutError, CustomerName, MissingItemPolicy, Order, Product,
};

use crate::error::Result;
use crate::orderlog::OrderLog;

/// The mutable state of one shopping session.
pub struct Shop {
    catalog: Catalog,
    cart: Cart,
    order_log: OrderLog,
    policy: MissingItemPolicy,
}

impl Shop {
    /// Assemble a shop from a seeded catalog, an order log target, and the
    /// missing-item policy.
    #[must_use]
    pub fn new(catalog: Catalog, order_log: OrderLog, policy: MissingItemPolicy) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            order_log,
            policy,
        }
    }

    /// The catalog, read-only.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The catalog, mutable. Stock changes and product removal go through
    /// here between sessions.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// The cart, read-only.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }
}

/// Run the menu loop until the user exits or input ends.
///
/// # Errors
///
/// Returns an error only for broken terminal I/O; user mistakes are
/// reported inline and the loop continues.
pub fn run<R: BufRead, W: Write>(shop: &mut Shop, input: &mut R, output: &mut W) -> Result<()> {
    loop {
        write_menu(output)?;
        let Some(choice) = prompt(input, output, "Choose an option: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => list_products(shop, output)?,
            "2" => search_products(shop, input, output)?,
            "3" => product_details(shop, input, output)?,
            "4" => add_to_cart(shop, input, output)?,
            "5" => view_cart(shop, output)?,
            "6" => remove_from_cart(shop, input, output)?,
            "7" => checkout(shop, input, output)?,
            "0" => {
                writeln!(output, "Goodbye!")?;
                break;
            }
            _ => writeln!(output, "Unknown option, try again.")?,
        }
    }
    Ok(())
}

fn write_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "--- tinshop ---")?;
    writeln!(output, "1. List products")?;
    writeln!(output, "2. Search products")?;
    writeln!(output, "3. View product details")?;
    writeln!(output, "4. Add to cart")?;
    writeln!(output, "5. View cart")?;
    writeln!(output, "6. Remove from cart")?;
    writeln!(output, "7. Checkout")?;
    writeln!(output, "0. Exit")?;
    Ok(())
}

/// Write `question`, read one line, and return it trimmed.
///
/// Returns `Ok(None)` on end of input, which callers treat as "cancel".
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<Option<String>> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Parse a positive quantity, reporting rejects inline.
fn parse_quantity<W: Write>(raw: &str, output: &mut W) -> Result<Option<u32>> {
    match raw.parse::<u32>() {
        Ok(qty) if qty > 0 => Ok(Some(qty)),
        _ => {
            writeln!(output, "Invalid quantity")?;
            Ok(None)
        }
    }
}

fn write_product_row<W: Write>(output: &mut W, product: &Product) -> Result<()> {
    writeln!(
        output,
        "{}: {} - {} - stock: {}",
        product.id, product.name, product.price, product.stock
    )?;
    Ok(())
}

fn list_products<W: Write>(shop: &Shop, output: &mut W) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "Available products:")?;
    for product in shop.catalog.list() {
        write_product_row(output, product)?;
    }
    Ok(())
}

fn search_products<R: BufRead, W: Write>(
    shop: &Shop,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let Some(term) = prompt(input, output, "Search term: ")? else {
        return Ok(());
    };
    let results = shop.catalog.search(&term);
    if results.is_empty() {
        writeln!(output, "No products found.")?;
        return Ok(());
    }
    for product in results {
        write_product_row(output, product)?;
    }
    Ok(())
}

fn product_details<R: BufRead, W: Write>(
    shop: &Shop,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let Some(id) = prompt(input, output, "Product id: ")? else {
        return Ok(());
    };
    match shop.catalog.get(&id) {
        None => writeln!(output, "Product not found.")?,
        Some(product) => {
            writeln!(output, "{}: {}", product.id, product.name)?;
            writeln!(output, "Price: {}", product.price)?;
            writeln!(output, "Stock: {}", product.stock)?;
            writeln!(output, "Desc: {}", product.description)?;
        }
    }
    Ok(())
}

fn add_to_cart<R: BufRead, W: Write>(
    shop: &mut Shop,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let Some(id) = prompt(input, output, "Product id to add: ")? else {
        return Ok(());
    };
    let Some(raw_qty) = prompt(input, output, "Quantity: ")? else {
        return Ok(());
    };
    let Some(qty) = parse_quantity(&raw_qty, output)? else {
        return Ok(());
    };

    let Some(product) = shop.catalog.get(&id) else {
        writeln!(output, "Product not found.")?;
        return Ok(());
    };
    match shop.cart.add(product, qty) {
        Ok(()) => writeln!(output, "Added {qty} x {} to cart.", product.name)?,
        Err(CartError::InsufficientStock { available }) => {
            writeln!(output, "Not enough stock. Available: {available}")?;
        }
        Err(err) => writeln!(output, "{err}")?,
    }
    Ok(())
}

fn view_cart<W: Write>(shop: &Shop, output: &mut W) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "Your cart:")?;
    let lines = shop.cart.view(&shop.catalog);
    if lines.is_empty() {
        writeln!(output, " (empty)")?;
        return Ok(());
    }
    for line in lines {
        writeln!(
            output,
            "{}: {} x{} - ${:.2}",
            line.id, line.name, line.quantity, line.subtotal
        )?;
    }
    writeln!(output, "Total: {}", format_amount(shop.cart.total(&shop.catalog)))?;
    Ok(())
}

fn remove_from_cart<R: BufRead, W: Write>(
    shop: &mut Shop,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let Some(id) = prompt(input, output, "Product id to remove: ")? else {
        return Ok(());
    };
    let Some(raw_qty) = prompt(input, output, "Quantity to remove (default 1): ")? else {
        return Ok(());
    };
    let qty = if raw_qty.is_empty() {
        1
    } else {
        match parse_quantity(&raw_qty, output)? {
            Some(qty) => qty,
            None => return Ok(()),
        }
    };

    match shop.cart.remove(&id, qty) {
        Ok(()) => writeln!(output, "Removed from cart.")?,
        Err(CartError::NotInCart) => writeln!(output, "That item is not in your cart.")?,
        Err(err) => writeln!(output, "{err}")?,
    }
    Ok(())
}

/// Checkout: snapshot the cart into an order, persist it, decrement stock,
/// clear the cart.
///
/// The order is appended to the log before any stock changes, so a failed
/// write leaves the whole shop untouched and the user can simply retry.
fn checkout<R: BufRead, W: Write>(shop: &mut Shop, input: &mut R, output: &mut W) -> Result<()> {
    if shop.cart.is_empty() {
        writeln!(output, "Cart is empty, nothing to check out.")?;
        return Ok(());
    }

    let customer = loop {
        let Some(raw) = prompt(input, output, "Customer name (press Enter for 'guest'): ")? else {
            return Ok(());
        };
        if raw.is_empty() {
            break CustomerName::guest();
        }
        match CustomerName::parse(&raw) {
            Ok(name) => break name,
            Err(err) => writeln!(output, "{err}")?,
        }
    };

    let order = match Order::from_cart(&shop.cart, &shop.catalog, customer, shop.policy) {
        Ok(order) => order,
        Err(err @ CheckoutError::MissingProducts(_)) => {
            writeln!(output, "Checkout refused: {err}")?;
            return Ok(());
        }
        Err(CheckoutError::EmptyCart) => {
            writeln!(output, "Cart is empty, nothing to check out.")?;
            return Ok(());
        }
    };

    if let Err(err) = shop.order_log.append(&order) {
        error!(error = %err, "failed to persist order");
        writeln!(output, "Could not save the order: {err}")?;
        return Ok(());
    }

    for (id, qty) in shop.cart.items() {
        if !shop.catalog.decrement_stock(id.as_str(), qty) {
            debug!(product = %id, "skipping stock decrement, product left the catalog");
        }
    }
    shop.cart.clear();

    info!(order = %order.id, total = %order.total, "order placed");
    writeln!(
        output,
        "Order {} saved for {}. Total: {}",
        order.id,
        order.customer,
        format_amount(order.total)
    )?;
    Ok(())
}

fn format_amount(amount: Decimal) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::seed::sample_catalog;

    fn shop(dir: &tempfile::TempDir) -> Shop {
        Shop::new(
            sample_catalog(),
            OrderLog::new(dir.path().join("orders.jsonl")),
            MissingItemPolicy::default(),
        )
    }

    /// Run one scripted session and return everything it printed.
    fn run_script(shop: &mut Shop, script: &str) -> String {
        let mut output = Vec::new();
        run(shop, &mut script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_script(&mut shop(&dir), "0\n");
        assert!(out.contains("--- tinshop ---"));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_eof_ends_session() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_script(&mut shop(&dir), "");
        assert!(out.contains("Choose an option: "));
    }

    #[test]
    fn test_unknown_option_redisplays_menu() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_script(&mut shop(&dir), "9\n0\n");
        assert!(out.contains("Unknown option, try again."));
        assert_eq!(out.matches("--- tinshop ---").count(), 2);
    }

    #[test]
    fn test_list_products() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_script(&mut shop(&dir), "1\n0\n");
        assert!(out.contains("p1: T-shirt - $19.99 - stock: 10"));
        assert!(out.contains("p5: Backpack - $39.00 - stock: 7"));
    }

    #[test]
    fn test_search_no_results() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_script(&mut shop(&dir), "2\nsubmarine\n0\n");
        assert!(out.contains("No products found."));
    }

    #[test]
    fn test_search_matches_description_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_script(&mut shop(&dir), "2\nCERAMIC\n0\n");
        assert!(out.contains("p3: Coffee Mug"));
    }

    #[test]
    fn test_product_details() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_script(&mut shop(&dir), "3\np4\n0\n");
        assert!(out.contains("p4: Notebook"));
        assert!(out.contains("Price: $4.25"));
        assert!(out.contains("Stock: 50"));
        assert!(out.contains("Desc: A5 ruled notebook"));
    }

    #[test]
    fn test_product_details_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_script(&mut shop(&dir), "3\nnope\n0\n");
        assert!(out.contains("Product not found."));
    }

    #[test]
    fn test_add_to_cart() {
        let dir = tempfile::tempdir().unwrap();
        let mut shop = shop(&dir);
        let out = run_script(&mut shop, "4\np1\n3\n0\n");
        assert!(out.contains("Added 3 x T-shirt to cart."));
        assert_eq!(shop.cart().quantity("p1"), Some(3));
    }

    #[test]
    fn test_add_rejects_invalid_quantity() {
        let dir = tempfile::tempdir().unwrap();
        let mut shop = shop(&dir);
        for script in ["4\np1\nabc\n0\n", "4\np1\n0\n0\n", "4\np1\n-2\n0\n"] {
            let out = run_script(&mut shop, script);
            assert!(out.contains("Invalid quantity"), "script {script:?}");
        }
        assert!(shop.cart().is_empty());
    }

    #[test]
    fn test_add_reports_available_stock() {
        let dir = tempfile::tempdir().unwrap();
        let mut shop = shop(&dir);
        let out = run_script(&mut shop, "4\np2\n6\n0\n");
        assert!(out.contains("Not enough stock. Available: 5"));
        assert!(shop.cart().is_empty());
    }

    #[test]
    fn test_add_unknown_product() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_script(&mut shop(&dir), "4\nnope\n1\n0\n");
        assert!(out.contains("Product not found."));
    }

    #[test]
    fn test_view_cart_empty_and_filled() {
        let dir = tempfile::tempdir().unwrap();
        let mut shop = shop(&dir);
        let out = run_script(&mut shop, "5\n4\np1\n3\n5\n0\n");
        assert!(out.contains(" (empty)"));
        assert!(out.contains("p1: T-shirt x3 - $59.97"));
        assert!(out.contains("Total: $59.97"));
    }

    #[test]
    fn test_remove_defaults_to_one() {
        let dir = tempfile::tempdir().unwrap();
        let mut shop = shop(&dir);
        let out = run_script(&mut shop, "4\np1\n3\n6\np1\n\n0\n");
        assert!(out.contains("Removed from cart."));
        assert_eq!(shop.cart().quantity("p1"), Some(2));
    }

    #[test]
    fn test_remove_not_in_cart() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_script(&mut shop(&dir), "6\np1\n1\n0\n");
        assert!(out.contains("That item is not in your cart."));
    }

    #[test]
    fn test_checkout_empty_cart_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut shop = shop(&dir);
        let out = run_script(&mut shop, "7\n0\n");
        assert!(out.contains("Cart is empty, nothing to check out."));
        assert!(!dir.path().join("orders.jsonl").exists());
        assert_eq!(shop.catalog().get("p1").unwrap().stock, 10);
    }

    #[test]
    fn test_checkout_happy_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut shop = shop(&dir);
        let out = run_script(&mut shop, "4\np1\n3\n7\nAlice\n0\n");

        assert!(out.contains("saved for Alice. Total: $59.97"));
        assert!(shop.cart().is_empty());
        assert_eq!(shop.catalog().get("p1").unwrap().stock, 7);

        let contents = std::fs::read_to_string(dir.path().join("orders.jsonl")).unwrap();
        assert_eq!(contents.lines().count(), 1);
    }

    #[test]
    fn test_checkout_defaults_customer_to_guest() {
        let dir = tempfile::tempdir().unwrap();
        let mut shop = shop(&dir);
        let out = run_script(&mut shop, "4\np3\n1\n7\n\n0\n");
        assert!(out.contains("saved for guest. Total: $9.50"));
    }

    #[test]
    fn test_checkout_skips_stock_decrement_for_vanished_product() {
        let dir = tempfile::tempdir().unwrap();
        let mut shop = shop(&dir);
        run_script(&mut shop, "4\np1\n2\n4\np3\n1\n");
        shop.catalog_mut().remove("p3");

        let out = run_script(&mut shop, "7\nAlice\n0\n");
        // Total covers the surviving line only; the order still went through.
        assert!(out.contains("saved for Alice. Total: $39.98"));
        assert!(shop.cart().is_empty());
        assert_eq!(shop.catalog().get("p1").unwrap().stock, 8);
    }

    #[test]
    fn test_checkout_fail_on_checkout_policy_keeps_everything() {
        let dir = tempfile::tempdir().unwrap();
        let mut shop = Shop::new(
            sample_catalog(),
            OrderLog::new(dir.path().join("orders.jsonl")),
            MissingItemPolicy::FailOnCheckout,
        );
        run_script(&mut shop, "4\np1\n2\n4\np3\n1\n");
        shop.catalog_mut().remove("p3");

        let out = run_script(&mut shop, "7\nAlice\n0\n");
        assert!(out.contains("Checkout refused:"));
        assert!(out.contains("p3"));
        assert_eq!(shop.cart().len(), 2);
        assert_eq!(shop.catalog().get("p1").unwrap().stock, 10);
        assert!(!dir.path().join("orders.jsonl").exists());
    }
}
