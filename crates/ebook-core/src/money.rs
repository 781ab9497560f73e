//! # Money Module
//!
//! Provides the `Money` type for prices and order totals.
//!
//! ## Why Decimal?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Floating point:  50.0 * 0.9 * 0.9       = 40.50000000000001            │
//! │  Whole cents:     $9.99 × 50% = $5.00    (999 copies: $4995.00)         │
//! │  Decimal:         $9.99 × 50% = $4.995   (999 copies: $4990.005)        │
//! │                                                                         │
//! │  Amounts stay exact through discounts, quantities and tax. Rounding to  │
//! │  the cent happens only when a total is printed (`{:.2}`).               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Arithmetic that can grow an amount (`checked_add`, `multiply_quantity`,
//! `calculate_tax`) returns `None` on overflow instead of panicking.
//!
//! ## Usage
//! ```rust
//! use ebook_core::money::Money;
//!
//! let price = Money::from_cents(5000);                // $50.00
//! let line_total = price.multiply_quantity(2).unwrap(); // $100.00
//! assert_eq!(line_total.to_string(), "$100.00");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;

use crate::types::{DiscountRate, TaxRate};

/// Decimal places shown for whole-cent amounts.
const CENT_PLACES: u32 = 2;

/// Scale of a basis-point count expressed as a fraction (1 bps = 0.0001).
const BPS_PLACES: u32 = 4;

/// Represents an exact monetary value in dollars.
///
/// Signed so that intermediate results (total minus an order discount) can
/// be checked for going negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use ebook_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.to_string(), "$10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, CENT_PLACES))
    }

    /// Creates a Money value from an exact decimal amount in dollars.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the exact amount in dollars.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns this amount rounded half up to whole cents.
    ///
    /// ## Example
    /// ```rust
    /// use ebook_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let exact = Money::from_decimal(Decimal::new(4990005, 3)); // $4990.005
    /// assert_eq!(exact.round_to_cents(), Money::from_cents(499001));
    /// ```
    pub fn round_to_cents(&self) -> Money {
        Money(round_half_up(self.0, CENT_PLACES))
    }

    /// Calculates tax on this amount, exactly.
    ///
    /// ## Example
    /// ```rust
    /// use ebook_core::money::Money;
    /// use ebook_core::SALES_TAX;
    ///
    /// // $160.00 at 8% = $12.80
    /// let tax = Money::from_cents(16000).calculate_tax(SALES_TAX).unwrap();
    /// assert_eq!(tax, Money::from_cents(1280));
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Option<Money> {
        self.0.checked_mul(bps_fraction(rate.bps())).map(Money)
    }

    /// Multiplies money by a quantity. `None` on overflow.
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Option<Money> {
        self.0.checked_mul(Decimal::from(qty)).map(Money)
    }

    /// Adds two amounts. `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Subtracts `other` from this amount. `None` on overflow.
    #[inline]
    pub fn checked_sub(&self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Sums amounts, stopping at the first overflow.
    pub fn checked_sum<I>(amounts: I) -> Option<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |acc, amount| acc.checked_add(amount))
    }

    /// Returns this amount reduced by a discount rate: `self × (1 − rate)`.
    ///
    /// The result is exact; nothing is rounded.
    ///
    /// ## Example
    /// ```rust
    /// use ebook_core::money::Money;
    /// use ebook_core::types::DiscountRate;
    /// use rust_decimal::Decimal;
    ///
    /// let price = Money::from_cents(999);
    /// let half_off = DiscountRate::from_bps(5000).unwrap();
    /// assert_eq!(price.apply_discount(half_off).amount(), Decimal::new(4995, 3));
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        let keep = Decimal::ONE - bps_fraction(rate.bps());
        // keep is within [0, 1], so the product never outgrows self.
        Money(self.0 * keep)
    }

    /// Exact amount without trailing zeros, padded to at least two places.
    fn display_amount(&self) -> Decimal {
        let mut amount = self.0.normalize();
        if amount.scale() < CENT_PLACES {
            amount.rescale(CENT_PLACES);
        }
        amount
    }
}

/// Basis points as an exact fraction: 800 → 0.08.
fn bps_fraction(bps: u32) -> Decimal {
    Decimal::new(i64::from(bps), BPS_PLACES)
}

fn round_half_up(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `$D.CC`.
///
/// Without a precision the exact amount is shown with at least two decimals
/// (`$4.995`, `$50.00`). With one, the amount is rounded half up to that many
/// places: `format!("{:.2}", m)` is the invoice format for totals.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = match f.precision() {
            Some(places) => {
                let places = places as u32;
                let mut rounded = round_half_up(self.0, places);
                rounded.rescale(places);
                rounded
            }
            None => self.display_amount(),
        };

        let sign = if amount.is_sign_negative() && !amount.is_zero() {
            "-"
        } else {
            ""
        };
        write!(f, "{}${}", sign, amount.abs())
    }
}

/// Serializes as an exact decimal string, e.g. `"4990.005"` or `"108.00"`.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display_amount().to_string())
    }
}
