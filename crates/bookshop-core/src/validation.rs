//! # Validation Module
//!
//! Checkout input validation for the Bookshop storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront UI                                                │
//! │  ├── Basic format checks (empty name field)                            │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (checkout handoff boundary)                      │
//! │  ├── Non-empty customer name, length cap                               │
//! │  └── Non-empty item list (never call the Order Service for nothing)    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Order Service                                                │
//! │  └── Authoritative stock and order validation                          │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::OrderItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum accepted customer name length.
pub const MAX_CUSTOMER_NAME_LEN: usize = 100;

/// Validates the display name supplied at checkout.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most [`MAX_CUSTOMER_NAME_LEN`] characters
///
/// Returns the trimmed name on success.
///
/// ## Example
/// ```rust
/// use bookshop_core::validation::validate_customer_name;
///
/// assert_eq!(validate_customer_name("  Layla  ").unwrap(), "Layla");
/// assert!(validate_customer_name("   ").is_err());
/// ```
pub fn validate_customer_name(name: &str) -> ValidationResult<&str> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "customer name".to_string(),
        });
    }

    if name.chars().count() > MAX_CUSTOMER_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "customer name".to_string(),
            max: MAX_CUSTOMER_NAME_LEN,
        });
    }

    Ok(name)
}

/// Validates the item list of an order submission.
///
/// An empty cart is rejected here, before the Order Service is ever called.
pub fn validate_order_items(items: &[OrderItem]) -> ValidationResult<()> {
    if items.is_empty() {
        return Err(ValidationError::EmptyOrder);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_name_trimmed() {
        assert_eq!(validate_customer_name("Layla").unwrap(), "Layla");
        assert_eq!(validate_customer_name("  Layla  ").unwrap(), "Layla");
    }

    #[test]
    fn test_customer_name_required() {
        assert!(matches!(
            validate_customer_name(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_customer_name("   "),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_customer_name_length_cap() {
        let long = "x".repeat(MAX_CUSTOMER_NAME_LEN + 1);
        assert!(matches!(
            validate_customer_name(&long),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_order_items_must_not_be_empty() {
        assert_eq!(validate_order_items(&[]), Err(ValidationError::EmptyOrder));

        let items = [OrderItem {
            book_id: "b1".to_string(),
            quantity: 1,
        }];
        assert!(validate_order_items(&items).is_ok());
    }
}
