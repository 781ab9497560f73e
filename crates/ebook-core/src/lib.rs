//! # ebook-core: Pure Storefront Logic
//!
//! Catalog items, the shopping cart, checkout and invoices, as pure
//! functions over owned data. Nothing here touches the file system or the
//! network.
//!
//! ## Component Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ebook-core                                       │
//! │                                                                         │
//! │  Customer ──owns──► Account ──owns──► Cart (ItemId → quantity)          │
//! │                        │                 │                              │
//! │                        │      checkout(&Catalog)                        │
//! │                        │                 │ snapshot + clear             │
//! │                        │                 ▼                              │
//! │                        └──history──► Order (EbookItem copies, totals)   │
//! │                                          │                              │
//! │                                          ▼                              │
//! │                                   generate_invoice()                    │
//! │                                                                         │
//! │  Catalog ──owns──► EbookItem (price mutable via apply_discount)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - EbookItem, identity handles, tax and discount rates, policy
//! - [`money`] - Exact decimal Money type (no floating point!)
//! - [`catalog`] - Owner of listed items, issues [`ItemId`] handles
//! - [`cart`] - Mutable accumulation of handles and quantities
//! - [`order`] - Immutable snapshot with totals and invoice rendering
//! - [`account`] - Cart + order history, runs checkout
//! - [`customer`] - Identity wrapper owning one account
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use ebook_core::{Catalog, Customer, EbookItem, Money};
//!
//! let mut catalog = Catalog::new();
//! let castle = catalog.add(
//!     EbookItem::new(
//!         "Howl's Moving Castle",
//!         "Diana Wynne Jones",
//!         "1986-04-01",
//!         "Fantasy Fiction",
//!         Money::from_cents(5000),
//!     )
//!     .unwrap(),
//! );
//!
//! let mut customer = Customer::new("Maryam", "maryam@example.com").unwrap();
//! customer.account_mut().add_to_cart(castle, 2).unwrap();
//!
//! let order = customer.account_mut().checkout(&catalog).unwrap();
//! assert_eq!(order.subtotal(), Money::from_cents(10000));
//! assert_eq!(order.tax(), Money::from_cents(800));
//! assert_eq!(order.total(), Money::from_cents(10800));
//! assert!(order.generate_invoice().ends_with("Total Price: $108.00\n"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod account;
pub mod cart;
pub mod catalog;
pub mod customer;
pub mod error;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use account::Account;
pub use cart::{Cart, CartLine};
pub use catalog::Catalog;
pub use customer::Customer;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{Order, OrderLine};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sales tax applied to every order: 8%.
///
/// Not configurable; every order in the store pays the same rate.
pub const SALES_TAX: TaxRate = TaxRate::from_bps(800);

/// Default maximum of distinct items in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Default maximum quantity of a single item in a cart.
///
/// Catches typos like 1000 instead of 10 before they reach an order.
pub const MAX_ITEM_QUANTITY: i64 = 999;
