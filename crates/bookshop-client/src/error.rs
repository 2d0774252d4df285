//! Error types for the bookstore API client and the checkout handoff.

use bookshop_core::ValidationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur when calling the bookstore REST API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Client configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The HTTP request never completed (connection, DNS, timeout).
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The response body did not decode as the expected shape.
    #[error("response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// The server answered with a non-success HTTP status.
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error body from the API
        message: String,
    },

    /// The API envelope reported `success: false` with a human-readable
    /// message (e.g. an order the service refused).
    #[error("{0}")]
    Rejected(String),
}

/// Errors surfaced by the checkout handoff.
///
/// Any failure here leaves the cart untouched; the shopper can correct the
/// input or retry without re-adding items.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout input rejected before the Order Service was called.
    #[error("invalid order: {0}")]
    Validation(#[from] ValidationError),

    /// The Order Service call failed.
    #[error("order submission failed: {0}")]
    Submission(#[from] ClientError),
}
