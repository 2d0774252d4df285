//! # bookshop-client: REST Consumption for the Bookshop Storefront
//!
//! Thin API consumption around [`bookshop_core`]: the catalog/order REST
//! client, the checkout handoff, and the rule-based chat assistant.
//!
//! ## Modules
//!
//! - [`client`] - `ApiClient` for the catalog and order endpoints
//! - [`checkout`] - one-shot cart → order submission handoff
//! - [`assistant`] - keyword-driven shopping assistant
//! - [`config`] - environment-driven client configuration
//! - [`error`] - client and checkout error types
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bookshop_client::{ApiClient, checkout};
//! use bookshop_core::{BookFilters, Cart, Notification};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::from_env()?;
//! let books = client.get_books(&BookFilters::search("history")).await?;
//!
//! let mut cart = Cart::new();
//! match cart.add(&books[0], 1) {
//!     Ok(outcome) => println!("{}", Notification::from(&outcome).message),
//!     Err(rejection) => println!("{}", Notification::from(&rejection).message),
//! }
//!
//! let order_id = checkout::submit_cart(&client, &cart, "Layla").await?;
//! cart.clear(); // the handoff never clears; that is the caller's move
//! println!("order {order_id} placed");
//! # Ok(())
//! # }
//! ```

pub mod assistant;
pub mod checkout;
pub mod client;
pub mod config;
pub mod error;

pub use assistant::{Assistant, Intent};
pub use client::ApiClient;
pub use config::{ClientConfig, ConfigError};
pub use error::{CheckoutError, ClientError};
