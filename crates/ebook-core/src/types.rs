//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │   EbookItem     │   │    ItemId       │   │    OrderId      │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  title          │   │  UUID v4 handle │   │  UUID v4        │        │
//! │  │  author         │   │  issued by the  │   │  issued at      │        │
//! │  │  date_published │   │  Catalog        │   │  checkout       │        │
//! │  │  genre          │   └─────────────────┘   └─────────────────┘        │
//! │  │  price (Money)  │                                                    │
//! │  └─────────────────┘   ┌─────────────────┐   ┌─────────────────┐        │
//! │                        │    TaxRate      │   │  DiscountRate   │        │
//! │                        │  800 bps = 8%   │   │  0..=10000 bps  │        │
//! │                        └─────────────────┘   └─────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Items are identified by the [`ItemId`] handle the catalog hands out, never
//! by their field values. Two books with identical metadata registered twice
//! are two different cart keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{
    validate_author, validate_discount_bps, validate_price, validate_title, ValidationResult,
};
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 800 bps = 8%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// A validated discount rate between 0% and 100%.
///
/// Stored in basis points like [`TaxRate`]. Fractions finer than one basis
/// point (0.01%) are rounded to the nearest basis point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points (0..=10000).
    pub fn from_bps(bps: u32) -> ValidationResult<Self> {
        validate_discount_bps(bps)?;
        Ok(DiscountRate(bps))
    }

    /// Creates a discount rate from a fraction in `[0, 1]` (0.1 = 10% off).
    ///
    /// ## Example
    /// ```rust
    /// use ebook_core::types::DiscountRate;
    ///
    /// assert_eq!(DiscountRate::from_fraction(0.2).unwrap().bps(), 2000);
    /// assert!(DiscountRate::from_fraction(1.5).is_err());
    /// assert!(DiscountRate::from_fraction(-0.1).is_err());
    /// ```
    pub fn from_fraction(fraction: f64) -> ValidationResult<Self> {
        if !(0.0..=1.0).contains(&fraction) {
            // NaN lands here too: it is not contained in any range.
            return Err(ValidationError::OutOfRange {
                field: "discount rate".to_string(),
                min: 0,
                max: 1,
            });
        }
        Ok(DiscountRate((fraction * 10_000.0).round() as u32))
    }

    /// No discount.
    #[inline]
    pub const fn none() -> Self {
        DiscountRate(0)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a fraction (for display only).
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 as f64 / 10_000.0
    }
}

impl TryFrom<u32> for DiscountRate {
    type Error = ValidationError;

    fn try_from(bps: u32) -> Result<Self, Self::Error> {
        DiscountRate::from_bps(bps)
    }
}

impl From<DiscountRate> for u32 {
    fn from(rate: DiscountRate) -> Self {
        rate.0
    }
}

// =============================================================================
// Identity Handles
// =============================================================================

/// Opaque identity of a catalog item.
///
/// Issued by [`crate::Catalog::add`]; equality is handle equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generates a fresh, never-before-seen handle.
    pub(crate) fn new() -> Self {
        ItemId(Uuid::new_v4())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Identity of a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(Uuid);

impl OrderId {
    pub(crate) fn new() -> Self {
        OrderId(Uuid::new_v4())
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Ebook Item
// =============================================================================

/// An e-book available for sale.
///
/// Everything but the price is fixed at construction. The price only moves
/// through [`EbookItem::apply_discount`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EbookItem {
    title: String,
    author: String,
    /// Free-form publication date, kept exactly as given.
    date_published: String,
    genre: String,
    price: Money,
}

impl EbookItem {
    /// Creates a new e-book.
    ///
    /// ## Rules
    /// - Title and author must not be blank
    /// - Price must not be negative (zero is a free book)
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        date_published: impl Into<String>,
        genre: impl Into<String>,
        price: Money,
    ) -> ValidationResult<Self> {
        let title = title.into();
        let author = author.into();
        validate_title(&title)?;
        validate_author(&author)?;
        validate_price(price)?;

        Ok(EbookItem {
            title,
            author,
            date_published: date_published.into(),
            genre: genre.into(),
            price,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn date_published(&self) -> &str {
        &self.date_published
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Returns the current price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Reduces the price by `rate`: `price = price × (1 − rate)`, exactly.
    ///
    /// Applying twice compounds: 10% then 10% leaves 81% of the price.
    pub fn apply_discount(&mut self, rate: DiscountRate) {
        self.price = self.price.apply_discount(rate);
    }
}

// =============================================================================
// Store Policy
// =============================================================================

/// Limits and switches an account enforces on its cart and checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorePolicy {
    /// Maximum quantity of one item in a cart.
    #[serde(default = "default_max_item_quantity")]
    pub max_item_quantity: i64,

    /// Maximum number of distinct items in a cart.
    #[serde(default = "default_max_cart_items")]
    pub max_cart_items: usize,

    /// Whether checking out an empty cart yields a zero-value order
    /// (`true`) or fails with [`crate::CoreError::EmptyCart`].
    #[serde(default = "default_allow_empty_checkout")]
    pub allow_empty_checkout: bool,
}

fn default_max_item_quantity() -> i64 {
    MAX_ITEM_QUANTITY
}

fn default_max_cart_items() -> usize {
    MAX_CART_ITEMS
}

fn default_allow_empty_checkout() -> bool {
    true
}

impl Default for StorePolicy {
    fn default() -> Self {
        StorePolicy {
            max_item_quantity: default_max_item_quantity(),
            max_cart_items: default_max_cart_items(),
            allow_empty_checkout: default_allow_empty_checkout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn castle() -> EbookItem {
        EbookItem::new(
            "Howl's Moving Castle",
            "Diana Wynne Jones",
            "1986-04-01",
            "Fantasy Fiction",
            Money::from_cents(5000),
        )
        .unwrap()
    }

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(800);
        assert_eq!(rate.bps(), 800);
        assert!((rate.percentage() - 8.0).abs() < 0.001);
    }

    #[test]
    fn test_discount_rate_from_fraction() {
        assert_eq!(DiscountRate::from_fraction(0.0).unwrap().bps(), 0);
        assert_eq!(DiscountRate::from_fraction(0.1).unwrap().bps(), 1000);
        assert_eq!(DiscountRate::from_fraction(1.0).unwrap().bps(), 10_000);
        assert!(DiscountRate::from_fraction(1.01).is_err());
        assert!(DiscountRate::from_fraction(-0.5).is_err());
        assert!(DiscountRate::from_fraction(f64::NAN).is_err());
    }

    #[test]
    fn test_discount_rate_from_bps() {
        assert!(DiscountRate::from_bps(10_000).is_ok());
        assert!(DiscountRate::from_bps(10_001).is_err());
    }

    #[test]
    fn test_discount_rate_deserialize_validates() {
        let ok: DiscountRate = serde_json::from_str("2500").unwrap();
        assert_eq!(ok.bps(), 2500);
        assert!(serde_json::from_str::<DiscountRate>("20000").is_err());
    }

    #[test]
    fn test_ebook_apply_discount() {
        let mut book = castle();
        book.apply_discount(DiscountRate::from_fraction(0.1).unwrap());
        assert_eq!(book.price(), Money::from_cents(4500));
    }

    #[test]
    fn test_ebook_twenty_percent_discount() {
        let mut book = castle();
        book.apply_discount(DiscountRate::from_fraction(0.2).unwrap());
        assert_eq!(book.price(), Money::from_cents(4000));
    }

    #[test]
    fn test_ebook_discount_compounds() {
        let mut book = castle();
        let ten_off = DiscountRate::from_fraction(0.1).unwrap();
        book.apply_discount(ten_off);
        book.apply_discount(ten_off);
        assert_eq!(book.price(), Money::from_cents(4050));
    }

    #[test]
    fn test_ebook_discount_keeps_fractional_cents() {
        let mut book = EbookItem::new("Odd", "Anon", "", "", Money::from_cents(999)).unwrap();
        book.apply_discount(DiscountRate::from_fraction(0.5).unwrap());

        assert_eq!(book.price().to_string(), "$4.995");
    }

    #[test]
    fn test_ebook_validation() {
        let free = EbookItem::new("Free", "Anon", "", "", Money::zero());
        assert!(free.is_ok());

        assert!(EbookItem::new("", "Anon", "", "", Money::zero()).is_err());
        assert!(EbookItem::new("Title", "  ", "", "", Money::zero()).is_err());
        assert!(EbookItem::new("Title", "Anon", "", "", Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_ebook_keeps_free_form_date() {
        let book = castle();
        assert_eq!(book.date_published(), "1986-04-01");
        assert_eq!(book.genre(), "Fantasy Fiction");
    }

    #[test]
    fn test_item_ids_are_unique() {
        assert_ne!(ItemId::new(), ItemId::new());
    }

    #[test]
    fn test_store_policy_defaults() {
        let policy = StorePolicy::default();
        assert_eq!(policy.max_item_quantity, 999);
        assert_eq!(policy.max_cart_items, 100);
        assert!(policy.allow_empty_checkout);

        let partial: StorePolicy =
            serde_json::from_str(r#"{"allow_empty_checkout": false}"#).unwrap();
        assert_eq!(partial.max_item_quantity, 999);
        assert!(!partial.allow_empty_checkout);
    }
}
