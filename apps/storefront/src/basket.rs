//! # Basket Files
//!
//! A basket file is a JSON description of one customer's shopping trip:
//!
//! ```json
//! {
//!   "customer": { "name": "Maryam", "contact": "maryam@example.com" },
//!   "lines": [
//!     {
//!       "title": "Howl's Moving Castle",
//!       "author": "Diana Wynne Jones",
//!       "date_published": "1986-04-01",
//!       "genre": "Fantasy Fiction",
//!       "price_cents": 5000,
//!       "quantity": 2,
//!       "discount_bps": 1000
//!     }
//!   ]
//! }
//! ```
//!
//! Every line is listed as its own catalog item, so two lines describing the
//! same book stay two separate cart entries.

use std::path::Path;

use ebook_core::{Catalog, Customer, DiscountRate, EbookItem, Money, StorePolicy};
use serde::Deserialize;
use tracing::debug;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize)]
pub struct BasketCustomer {
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub loyalty_member: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BasketLine {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub date_published: String,
    #[serde(default)]
    pub genre: String,
    pub price_cents: i64,
    pub quantity: i64,
    /// Item discount applied before the book goes into the cart.
    #[serde(default)]
    pub discount_bps: Option<DiscountRate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Basket {
    pub customer: BasketCustomer,
    #[serde(default)]
    pub lines: Vec<BasketLine>,
}

impl Basket {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| AppError::BasketRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Lists every line, fills the customer's cart, and checks out.
    ///
    /// The placed order is the customer's [`ebook_core::Account::last_order`].
    pub fn checkout(&self, policy: StorePolicy) -> AppResult<Customer> {
        let mut customer = Customer::with_policy(
            self.customer.name.as_str(),
            self.customer.contact.as_str(),
            self.customer.loyalty_member,
            policy,
        )?;
        let mut catalog = Catalog::new();

        for line in &self.lines {
            let mut item = EbookItem::new(
                line.title.as_str(),
                line.author.as_str(),
                line.date_published.as_str(),
                line.genre.as_str(),
                Money::from_cents(line.price_cents),
            )?;
            if let Some(rate) = line.discount_bps {
                item.apply_discount(rate);
            }
            let id = catalog.add(item);
            customer.account_mut().add_to_cart(id, line.quantity)?;
        }

        debug!(
            customer = %customer.name(),
            lines = customer.account().cart().item_count(),
            "Basket loaded into cart"
        );

        customer.account_mut().checkout(&catalog)?;
        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ebook_core::{CoreError, Order};
    use std::io::Write;

    const TWO_BOOKS: &str = r#"{
        "customer": { "name": "Maryam", "contact": "maryam@example.com", "loyalty_member": true },
        "lines": [
            { "title": "Howl's Moving Castle", "author": "Diana Wynne Jones",
              "date_published": "1986-04-01", "genre": "Fantasy Fiction",
              "price_cents": 5000, "quantity": 2 },
            { "title": "Castle in the Air", "author": "Diana Wynne Jones",
              "price_cents": 6000, "quantity": 1 }
        ]
    }"#;

    fn placed(customer: &Customer) -> &Order {
        customer.account().last_order().unwrap()
    }

    #[test]
    fn test_parse_and_checkout() {
        let basket = Basket::from_json(TWO_BOOKS).unwrap();
        let customer = basket.checkout(StorePolicy::default()).unwrap();
        let order = placed(&customer);

        assert!(customer.is_loyalty_member());
        assert!(customer.account().cart().is_empty());
        assert_eq!(customer.account().orders().len(), 1);
        assert_eq!(order.subtotal(), Money::from_cents(16000));
        assert_eq!(order.tax(), Money::from_cents(1280));
        assert_eq!(order.total(), Money::from_cents(17280));
    }

    #[test]
    fn test_line_discount_applied() {
        let basket = Basket::from_json(
            r#"{ "customer": { "name": "Maryam" },
                 "lines": [ { "title": "T", "author": "A", "price_cents": 5000,
                              "quantity": 1, "discount_bps": 2000 } ] }"#,
        )
        .unwrap();

        let customer = basket.checkout(StorePolicy::default()).unwrap();
        assert_eq!(placed(&customer).subtotal(), Money::from_cents(4000));
    }

    #[test]
    fn test_line_discount_keeps_fractional_cents() {
        let basket = Basket::from_json(
            r#"{ "customer": { "name": "Maryam" },
                 "lines": [ { "title": "T", "author": "A", "price_cents": 999,
                              "quantity": 999, "discount_bps": 5000 } ] }"#,
        )
        .unwrap();

        let customer = basket.checkout(StorePolicy::default()).unwrap();
        assert_eq!(placed(&customer).subtotal().to_string(), "$4990.005");
    }

    #[test]
    fn test_huge_price_checks_out_without_panic() {
        let basket = Basket::from_json(&format!(
            r#"{{ "customer": {{ "name": "Maryam" }},
                 "lines": [ {{ "title": "T", "author": "A", "price_cents": {},
                              "quantity": 20 }} ] }}"#,
            i64::MAX / 10
        ))
        .unwrap();

        let customer = basket.checkout(StorePolicy::default()).unwrap();
        assert!(placed(&customer).total() > placed(&customer).subtotal());
    }

    #[test]
    fn test_overflowing_basket_is_an_error() {
        let basket = Basket::from_json(&format!(
            r#"{{ "customer": {{ "name": "Maryam" }},
                 "lines": [ {{ "title": "T", "author": "A", "price_cents": {max},
                              "quantity": {max} }} ] }}"#,
            max = i64::MAX
        ))
        .unwrap();
        let unlimited = StorePolicy {
            max_item_quantity: i64::MAX,
            ..StorePolicy::default()
        };

        let result = basket.checkout(unlimited);
        assert!(matches!(
            result,
            Err(AppError::Core(CoreError::AmountOverflow { .. }))
        ));
    }

    #[test]
    fn test_out_of_range_discount_rejected_at_parse() {
        let result = Basket::from_json(
            r#"{ "customer": { "name": "Maryam" },
                 "lines": [ { "title": "T", "author": "A", "price_cents": 5000,
                              "quantity": 1, "discount_bps": 12000 } ] }"#,
        );
        assert!(matches!(result, Err(AppError::BasketParse(_))));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let basket = Basket::from_json(
            r#"{ "customer": { "name": "Maryam" },
                 "lines": [ { "title": "T", "author": "A", "price_cents": 100, "quantity": 0 } ] }"#,
        )
        .unwrap();

        let result = basket.checkout(StorePolicy::default());
        assert!(matches!(
            result,
            Err(AppError::Core(CoreError::Validation(_)))
        ));
    }

    #[test]
    fn test_empty_basket_respects_policy() {
        let basket = Basket::from_json(r#"{ "customer": { "name": "Maryam" } }"#).unwrap();

        let customer = basket.checkout(StorePolicy::default()).unwrap();
        assert!(placed(&customer).total().is_zero());

        let strict = StorePolicy {
            allow_empty_checkout: false,
            ..StorePolicy::default()
        };
        assert!(matches!(
            basket.checkout(strict),
            Err(AppError::Core(CoreError::EmptyCart))
        ));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", TWO_BOOKS).unwrap();

        let basket = Basket::from_path(file.path()).unwrap();
        assert_eq!(basket.lines.len(), 2);
        assert_eq!(basket.lines[1].genre, "");
    }

    #[test]
    fn test_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = Basket::from_path(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(AppError::BasketRead { .. })));
    }
}
