//! # Cart
//!
//! The mutable half of the checkout pipeline.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  add_item(id, q)    ──► line for id exists? ── yes ──► quantity += q    │
//! │                                     │                                   │
//! │                                     └────── no ───► push (id, q)        │
//! │                                                                         │
//! │  remove_item(id)    ──► drop the whole line (not a decrement)           │
//! │                                                                         │
//! │  clear()            ──► drop every line (after checkout)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart holds [`ItemId`] handles, not items. Prices are read from the
//! catalog only at checkout, so a discount applied while a book sits in the
//! cart is the price the customer pays.

use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::types::ItemId;
use crate::validation::{validate_cart_size, validate_quantity};
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// One entry in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    pub item_id: ItemId,
    /// Always at least 1.
    pub quantity: i64,
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `item_id` (adding the same handle increases quantity)
/// - Every quantity is in `1..=max_item_quantity`
/// - At most `max_cart_items` lines
/// - Lines keep the order in which items were first added
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
    max_item_quantity: i64,
    max_cart_items: usize,
}

impl Cart {
    /// Creates an empty cart with the crate-default limits.
    pub fn new() -> Self {
        Cart::with_limits(MAX_ITEM_QUANTITY, MAX_CART_ITEMS)
    }

    /// Creates an empty cart with explicit limits.
    pub fn with_limits(max_item_quantity: i64, max_cart_items: usize) -> Self {
        Cart {
            lines: Vec::new(),
            max_item_quantity,
            max_cart_items,
        }
    }

    /// Adds `quantity` of an item, or increases its quantity if already present.
    ///
    /// ## Errors
    /// - `Validation` if `quantity` is zero, negative, or above the maximum
    /// - `QuantityTooLarge` if the accumulated quantity would exceed the maximum
    /// - `CartTooLarge` if a new line would exceed the distinct-item limit
    ///
    /// On error the cart is unchanged.
    pub fn add_item(&mut self, item_id: ItemId, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity, self.max_item_quantity)?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item_id) {
            let new_qty = match line.quantity.checked_add(quantity) {
                Some(q) if q <= self.max_item_quantity => q,
                _ => {
                    let requested = line.quantity.saturating_add(quantity);
                    warn!(item_id = %item_id, requested, "Cart quantity limit reached");
                    return Err(CoreError::QuantityTooLarge {
                        requested,
                        max: self.max_item_quantity,
                    });
                }
            };
            line.quantity = new_qty;
            debug!(item_id = %item_id, quantity = new_qty, "Increased cart quantity");
            return Ok(());
        }

        if validate_cart_size(self.lines.len(), self.max_cart_items).is_err() {
            warn!(item_id = %item_id, "Cart item limit reached");
            return Err(CoreError::CartTooLarge {
                max: self.max_cart_items,
            });
        }

        self.lines.push(CartLine { item_id, quantity });
        debug!(item_id = %item_id, quantity, "Added item to cart");
        Ok(())
    }

    /// Removes an item entirely, whatever its quantity.
    ///
    /// Returns the removed quantity, or `None` (a no-op) if the item was
    /// not in the cart.
    pub fn remove_item(&mut self, item_id: ItemId) -> Option<i64> {
        let index = self.lines.iter().position(|l| l.item_id == item_id)?;
        let removed = self.lines.remove(index);
        debug!(item_id = %item_id, quantity = removed.quantity, "Removed item from cart");
        Some(removed.quantity)
    }

    /// Clears all lines. Idempotent.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Quantity of an item, if present.
    pub fn quantity_of(&self, item_id: ItemId) -> Option<i64> {
        self.lines
            .iter()
            .find(|l| l.item_id == item_id)
            .map(|l| l.quantity)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the number of distinct items in the cart.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity of all items, saturating at `i64::MAX`.
    pub fn total_quantity(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |total, l| total.saturating_add(l.quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
