//! # Checkout Handoff
//!
//! The one-shot operation that converts current cart lines into an order
//! submission to the Order Service.
//!
//! ## Handoff Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Checkout Handoff                                    │
//! │                                                                         │
//! │  Cart snapshot ──► validate name ──► validate items ──► POST /orders   │
//! │       │                 │                  │                 │          │
//! │       │            empty name?        empty cart?       rejected?      │
//! │       │                 │                  │                 │          │
//! │       │                 ▼                  ▼                 ▼          │
//! │       │           CheckoutError (cart untouched, shopper retries)      │
//! │       │                                                                 │
//! │       └── success ──► order id returned ──► caller clears the cart     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## At-Most-Once Side Effect
//! The handoff reads the cart through a shared reference and never mutates
//! it. A failed submission therefore cannot partially change cart state;
//! clearing after success is explicitly the caller's move. Stock is not
//! re-validated here — the Order Service holds the authoritative count.

use tracing::{debug, info};

use bookshop_core::validation::{validate_customer_name, validate_order_items};
use bookshop_core::Cart;

use crate::client::ApiClient;
use crate::error::CheckoutError;

/// Submits the current cart as an order under the given display name.
///
/// Returns the order id assigned by the Order Service. An empty cart is
/// rejected client-side, before any network call.
pub async fn submit_cart(
    client: &ApiClient,
    cart: &Cart,
    customer_name: &str,
) -> Result<String, CheckoutError> {
    let customer_name = validate_customer_name(customer_name)?;

    let items = cart.order_items();
    validate_order_items(&items)?;

    debug!(
        customer_name,
        item_count = items.len(),
        total = %cart.total_price(),
        "submitting order"
    );

    let order_id = client.create_order(customer_name, &items).await?;
    info!(%order_id, "order placed");
    Ok(order_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshop_core::ValidationError;
    use crate::config::ClientConfig;

    fn offline_client() -> ApiClient {
        // Points at a closed port; validation failures must reject before
        // any request is attempted.
        ApiClient::new(ClientConfig::new("http://127.0.0.1:1/api")).unwrap()
    }

    #[tokio::test]
    async fn test_empty_cart_rejected_before_any_call() {
        let cart = Cart::new();
        let err = submit_cart(&offline_client(), &cart, "Layla")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::Validation(ValidationError::EmptyOrder)
        ));
    }

    #[tokio::test]
    async fn test_blank_name_rejected_before_any_call() {
        let cart = Cart::new();
        let err = submit_cart(&offline_client(), &cart, "   ")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::Validation(ValidationError::Required { .. })
        ));
    }
}
