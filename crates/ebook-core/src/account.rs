//! # Account
//!
//! Owns one cart and the order history, and runs checkout.
//!
//! ## Checkout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         checkout(&catalog)                              │
//! │                                                                         │
//! │  1. Empty cart and policy forbids it?  ──► Err(EmptyCart)               │
//! │  2. Copy every line's item out of the catalog                           │
//! │        handle no longer listed?        ──► Err(ItemNotFound)            │
//! │  3. Order::new(lines)  (totals computed)                                │
//! │        amounts too large?              ──► Err(AmountOverflow)          │
//! │  4. Append to history                                                   │
//! │  5. Clear cart                                                          │
//! │  6. Return &mut to the order now in the history                         │
//! │                                                                         │
//! │  Steps 1-3 can fail; nothing has changed yet when they do.              │
//! │  Steps 4-6 cannot fail.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{info, warn};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::order::{Order, OrderLine};
use crate::types::{ItemId, OrderId, StorePolicy};

/// A customer's account: one cart for its whole lifetime, plus every order
/// ever placed, oldest first.
#[derive(Debug, Clone)]
pub struct Account {
    cart: Cart,
    orders: Vec<Order>,
    policy: StorePolicy,
}

impl Account {
    /// Creates an account with the default store policy.
    pub fn new() -> Self {
        Account::with_policy(StorePolicy::default())
    }

    pub fn with_policy(policy: StorePolicy) -> Self {
        Account {
            cart: Cart::with_limits(policy.max_item_quantity, policy.max_cart_items),
            orders: Vec::new(),
            policy,
        }
    }

    /// Adds an item to the cart. See [`Cart::add_item`].
    pub fn add_to_cart(&mut self, item_id: ItemId, quantity: i64) -> CoreResult<()> {
        self.cart.add_item(item_id, quantity)
    }

    /// Removes an item from the cart. See [`Cart::remove_item`].
    pub fn remove_from_cart(&mut self, item_id: ItemId) -> Option<i64> {
        self.cart.remove_item(item_id)
    }

    /// Turns the cart into a new order, records it, and empties the cart.
    ///
    /// Items are copied by value out of `catalog`, so later discounts or
    /// delistings never reach the order. The returned reference is the
    /// recorded order itself: a discount set through it shows up in
    /// [`Account::orders`].
    ///
    /// ## Errors
    /// - `EmptyCart` if the cart is empty and the policy forbids it
    /// - `ItemNotFound` if a cart line's item has been delisted
    /// - `AmountOverflow` if the order totals do not fit
    ///
    /// On error the cart and history are unchanged.
    pub fn checkout(&mut self, catalog: &Catalog) -> CoreResult<&mut Order> {
        if self.cart.is_empty() && !self.policy.allow_empty_checkout {
            warn!("Rejected checkout of empty cart");
            return Err(CoreError::EmptyCart);
        }

        let lines = self
            .cart
            .lines()
            .iter()
            .map(|line| -> CoreResult<OrderLine> {
                let item = catalog.get(line.item_id).ok_or_else(|| {
                    warn!(item_id = %line.item_id, "Cart item missing from catalog");
                    CoreError::ItemNotFound(line.item_id.to_string())
                })?;
                Ok(OrderLine {
                    item_id: line.item_id,
                    item: item.clone(),
                    quantity: line.quantity,
                })
            })
            .collect::<CoreResult<Vec<_>>>()?;

        let order = Order::new(lines)?;
        info!(
            order_id = %order.id(),
            lines = order.item_count(),
            subtotal = %order.subtotal(),
            tax = %order.tax(),
            total = %order.total(),
            "Checked out cart"
        );

        let index = self.orders.len();
        self.orders.push(order);
        self.cart.clear();
        Ok(&mut self.orders[index])
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Placed orders, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// The most recently placed order.
    pub fn last_order(&self) -> Option<&Order> {
        self.orders.last()
    }

    /// A placed order, for later adjustments such as an order discount.
    pub fn order_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        self.orders.iter_mut().find(|order| order.id() == id)
    }

    pub fn policy(&self) -> &StorePolicy {
        &self.policy
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}
