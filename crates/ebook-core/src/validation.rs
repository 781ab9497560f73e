//! # Validation Module
//!
//! Input validation for catalog entries, customers and cart operations.
//!
//! Every check runs before any state is touched, so a rejected call leaves
//! the catalog, cart or order exactly as it was.
//!
//! ## Usage
//! ```rust
//! use ebook_core::validation::{validate_title, validate_quantity};
//!
//! assert!(validate_title("Castle in the Air").is_ok());
//! assert!(validate_quantity(5, 999).is_ok());
//! assert!(validate_quantity(0, 999).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest title, author or customer name accepted.
const MAX_TEXT_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

fn validate_text(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_TEXT_LEN,
        });
    }

    Ok(())
}

/// Validates a book title: not blank, at most 200 characters.
pub fn validate_title(title: &str) -> ValidationResult<()> {
    validate_text("title", title)
}

/// Validates an author name: not blank, at most 200 characters.
pub fn validate_author(author: &str) -> ValidationResult<()> {
    validate_text("author", author)
}

/// Validates a customer name: not blank, at most 200 characters.
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    validate_text("name", name)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity for a cart operation.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed `max`
pub fn validate_quantity(qty: i64, max: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > max {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max,
        });
    }

    Ok(())
}

/// Validates an item price. Zero is allowed (free books).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a discount in basis points: 0 to 10000 (0% to 100%).
pub fn validate_discount_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10_000 {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 10_000,
        });
    }

    Ok(())
}

/// Validates that one more distinct item still fits in the cart.
pub fn validate_cart_size(current_items: usize, max: usize) -> ValidationResult<()> {
    if current_items >= max {
        return Err(ValidationError::OutOfRange {
            field: "cart items".to_string(),
            min: 0,
            max: max as i64,
        });
    }

    Ok(())
}
