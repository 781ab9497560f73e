//! # Commands
//!
//! One function per subcommand. Each returns the text to print so that
//! `main` owns stdout and tests can inspect the output directly.

use std::path::Path;

use ebook_core::{Catalog, Customer, EbookItem, Money};
use tracing::info;

use crate::basket::Basket;
use crate::config::StoreConfig;
use crate::error::{AppError, AppResult};

/// Output format for a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Invoice,
    Json,
}

/// Runs the two-book sample checkout.
///
/// Two copies of one book and one of another: $160.00 + $12.80 tax.
pub fn demo(config: &StoreConfig) -> AppResult<String> {
    let mut catalog = Catalog::new();
    let castle = catalog.add(EbookItem::new(
        "Howl's Moving Castle",
        "Diana Wynne Jones",
        "1986-04-01",
        "Fantasy Fiction",
        Money::from_cents(5000),
    )?);
    let air = catalog.add(EbookItem::new(
        "Castle in the Air",
        "Diana Wynne Jones",
        "1990-05-15",
        "Fantasy Fiction",
        Money::from_cents(6000),
    )?);

    let mut customer =
        Customer::with_policy("Maryam", "maryam@example.com", true, config.checkout)?;
    customer.account_mut().add_to_cart(castle, 2)?;
    customer.account_mut().add_to_cart(air, 1)?;
    customer.account_mut().checkout(&catalog)?;

    render(config, &customer, OutputFormat::Invoice)
}

/// Checks out the basket described in a JSON file.
pub fn checkout(config: &StoreConfig, basket_path: &Path, format: OutputFormat) -> AppResult<String> {
    info!(path = ?basket_path, "Checking out basket");
    let basket = Basket::from_path(basket_path)?;
    let customer = basket.checkout(config.checkout)?;
    render(config, &customer, format)
}

/// Prints the effective configuration.
pub fn show_config(config: &StoreConfig) -> AppResult<String> {
    config.to_toml()
}

/// Renders the customer's most recent order.
fn render(config: &StoreConfig, customer: &Customer, format: OutputFormat) -> AppResult<String> {
    let order = customer
        .account()
        .last_order()
        .ok_or_else(|| AppError::Render("checkout recorded no order".to_string()))?;

    match format {
        OutputFormat::Invoice => Ok(format!(
            "{}\nCustomer: {} <{}>\nOrder: {}\n{}",
            config.store.name,
            customer.name(),
            customer.contact(),
            order.id(),
            order.generate_invoice()
        )),
        OutputFormat::Json => serde_json::to_string_pretty(order)
            .map(|json| json + "\n")
            .map_err(|e| AppError::Render(e.to_string())),
    }
}
