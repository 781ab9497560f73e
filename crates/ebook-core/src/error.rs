//! # Error Types
//!
//! Domain-specific error types for ebook-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ebook-core errors (this file)                                          │
//! │  ├── CoreError        - Cart, checkout and order rule violations        │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  storefront errors (app crate)                                          │
//! │  └── AppError         - Config, basket file, and wrapped CoreError      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → exit code               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A cart line refers to an item that is no longer in the catalog.
    ///
    /// ## When This Occurs
    /// - The item was delisted after being added to a cart
    /// - A handle from a different catalog was used
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Checkout of an empty cart while the store policy forbids it.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Cart has exceeded maximum allowed distinct items.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Accumulated item quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// An order amount no longer fits the money representation.
    ///
    /// ## When This Occurs
    /// - Huge prices multiplied by huge quantities at checkout
    #[error("Order amount out of range while computing {context}")]
    AmountOverflow { context: &'static str },

    /// Order-level discount cannot be applied.
    #[error("Invalid discount: {reason}")]
    InvalidDiscount { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any state changes, so a rejected call leaves the cart,
/// catalog, or order exactly as it was.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::QuantityTooLarge {
            requested: 1000,
            max: 999,
        };
        assert_eq!(
            err.to_string(),
            "Quantity 1000 exceeds maximum allowed (999)"
        );
        assert_eq!(
            CoreError::EmptyCart.to_string(),
            "Cannot check out an empty cart"
        );
        assert_eq!(
            CoreError::AmountOverflow { context: "subtotal" }.to_string(),
            "Order amount out of range while computing subtotal"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "title".to_string(),
        };
        assert_eq!(err.to_string(), "title is required");

        let err = ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 10000,
        };
        assert_eq!(err.to_string(), "discount must be between 0 and 10000");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
