//! # Error Types
//!
//! Domain-specific error types for bookshop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bookshop-core errors (this file)                                      │
//! │  ├── CartError        - Rejected cart mutations                        │
//! │  └── ValidationError  - Checkout input validation failures             │
//! │                                                                         │
//! │  bookshop-client errors (separate crate)                               │
//! │  ├── ClientError      - Catalog/Order Service call failures            │
//! │  └── CheckoutError    - Checkout handoff failures                      │
//! │                                                                         │
//! │  Flow: ValidationError → CheckoutError → caller / notification surface │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (title, counts)
//! 3. Errors are enum variants, never String
//! 4. Every failure is a rejected operation with prior state preserved;
//!    nothing in this crate is fatal to the process

use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Rejected cart mutations.
///
/// A `CartError` always means the cart was left exactly as it was before the
/// call; the caller surfaces the message and may retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Requested quantity exceeds the book snapshot's available stock.
    ///
    /// ## When This Occurs
    /// - New add with quantity above stock
    /// - Increment pushing the running line total above stock
    /// - Direct quantity set above stock
    ///
    /// `available` carries the actual purchasable count so the caller can
    /// retry with a corrected value. The check is against the snapshot only;
    /// the live catalog may already disagree.
    #[error("only {available} copies of \"{title}\" are available (requested {requested})")]
    InsufficientStock {
        title: String,
        available: i64,
        requested: i64,
    },

    /// Add was called with a non-positive quantity.
    #[error("quantity must be positive (requested {requested})")]
    InvalidQuantity { requested: i64 },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Checkout input validation errors.
///
/// Raised before an order submission ever reaches the Order Service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// An order must carry at least one item.
    #[error("order has no items")]
    EmptyOrder,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CartError::InsufficientStock {
            title: "The Muqaddimah".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "only 3 copies of \"The Muqaddimah\" are available (requested 5)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "customer name".to_string(),
        };
        assert_eq!(err.to_string(), "customer name is required");

        assert_eq!(ValidationError::EmptyOrder.to_string(), "order has no items");
    }
}
