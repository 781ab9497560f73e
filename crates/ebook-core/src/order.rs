//! # Order
//!
//! The immutable half of the checkout pipeline: a snapshot of cart contents
//! with computed totals.
//!
//! ## Totals
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal = Σ line.price × line.quantity        (exact)                 │
//! │  tax      = subtotal × 8%                       (exact, SALES_TAX)      │
//! │  total    = subtotal + tax − discount           (exact)                 │
//! │                                                                         │
//! │  Example: 2 × $50.00 + 1 × $60.00                                       │
//! │    subtotal $160.00   tax $12.80   total $172.80                        │
//! │                                                                         │
//! │  The invoice rounds each total half up to the cent when printing.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lines hold their own copies of each [`EbookItem`], taken by the caller at
//! checkout. Nothing outside this struct can change them.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{EbookItem, ItemId, OrderId};
use crate::SALES_TAX;

/// A purchased item, frozen at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    /// Catalog handle the line was bought under.
    pub item_id: ItemId,
    /// Item as it was at checkout (frozen).
    pub item: EbookItem,
    pub quantity: i64,
}

impl OrderLine {
    /// Unit price × quantity. `None` on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.item.price().multiply_quantity(self.quantity)
    }
}

/// A placed order.
///
/// The only mutation after construction is recalculation of the derived
/// money fields (and the explicit order discount that feeds them).
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    id: OrderId,
    placed_at: DateTime<Utc>,
    lines: Vec<OrderLine>,
    subtotal: Money,
    discount: Money,
    tax: Money,
    total: Money,
}

impl Order {
    /// Creates an order from already-snapshotted lines and computes totals.
    ///
    /// ## Errors
    /// `AmountOverflow` if the totals do not fit.
    pub fn new(lines: Vec<OrderLine>) -> CoreResult<Self> {
        let mut order = Order {
            id: OrderId::new(),
            placed_at: Utc::now(),
            lines,
            subtotal: Money::zero(),
            discount: Money::zero(),
            tax: Money::zero(),
            total: Money::zero(),
        };
        order.calculate_total()?;
        Ok(order)
    }

    /// Recomputes subtotal, tax and total from the stored lines.
    ///
    /// Idempotent: it never accumulates onto previous results. On error the
    /// previous totals are kept.
    pub fn calculate_total(&mut self) -> CoreResult<()> {
        let overflow = |context| CoreError::AmountOverflow { context };

        let line_totals = self
            .lines
            .iter()
            .map(|line| line.line_total().ok_or(overflow("line total")))
            .collect::<CoreResult<Vec<Money>>>()?;
        let subtotal = Money::checked_sum(line_totals).ok_or(overflow("subtotal"))?;
        let tax = subtotal
            .calculate_tax(SALES_TAX)
            .ok_or(overflow("tax"))?;
        let total = subtotal
            .checked_add(tax)
            .and_then(|gross| gross.checked_sub(self.discount))
            .ok_or(overflow("total"))?;

        self.subtotal = subtotal;
        self.tax = tax;
        self.total = total;
        Ok(())
    }

    /// Sets an order-level discount and recalculates.
    ///
    /// Checkout never calls this; the discount stays zero unless a caller
    /// sets one explicitly.
    ///
    /// ## Errors
    /// `InvalidDiscount` if the amount is negative or larger than
    /// subtotal + tax. The order is unchanged on error.
    pub fn set_discount(&mut self, amount: Money) -> CoreResult<()> {
        if amount.is_negative() {
            return Err(CoreError::InvalidDiscount {
                reason: "discount cannot be negative".to_string(),
            });
        }

        let gross = self
            .subtotal
            .checked_add(self.tax)
            .ok_or(CoreError::AmountOverflow { context: "total" })?;
        if amount > gross {
            return Err(CoreError::InvalidDiscount {
                reason: format!("{} exceeds order value {}", amount, gross),
            });
        }

        let previous = std::mem::replace(&mut self.discount, amount);
        if let Err(err) = self.calculate_total() {
            self.discount = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Renders the human-readable invoice.
    ///
    /// Unit prices are printed exactly; subtotal, discount, tax and total are
    /// rounded half up to the cent.
    ///
    /// ## Format
    /// ```text
    /// Invoice:
    /// Title: Howl's Moving Castle, Author: Diana Wynne Jones - Quantity: 2, Price per item: $50.00
    /// Subtotal: $100.00
    /// Tax: $8.00
    /// Total Price: $108.00
    /// ```
    /// A `Discount:` line appears before `Tax:` only when a discount is set.
    pub fn generate_invoice(&self) -> String {
        self.to_string()
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    pub fn discount(&self) -> Money {
        self.discount
    }

    pub fn tax(&self) -> Money {
        self.tax
    }

    pub fn total(&self) -> Money {
        self.total
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Invoice:")?;
        for line in &self.lines {
            writeln!(
                f,
                "Title: {}, Author: {} - Quantity: {}, Price per item: {}",
                line.item.title(),
                line.item.author(),
                line.quantity,
                line.item.price()
            )?;
        }
        writeln!(f, "Subtotal: {:.2}", self.subtotal)?;
        if !self.discount.is_zero() {
            writeln!(f, "Discount: {:.2}", self.discount)?;
        }
        writeln!(f, "Tax: {:.2}", self.tax)?;
        writeln!(f, "Total Price: {:.2}", self.total)
    }
}
