//! # bookshop-core: Pure Business Logic for the Bookshop Storefront
//!
//! This crate is the **heart** of the storefront. It contains the shopping
//! cart domain model and every pure rule around it, with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Bookshop Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Storefront UI (external)                       │   │
//! │  │    Browse ──► Book details ──► Cart drawer ──► Checkout        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              bookshop-client (REST consumption)                 │   │
//! │  │    catalog queries, order submission, chat assistant            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bookshop-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  notify   │  │   │
//! │  │   │   Book    │  │   Money   │  │   Cart    │  │ Outcome → │  │   │
//! │  │   │   Order   │  │  halalas  │  │ CartLine  │  │  toast    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog and order types (Book, Author, Order, filters)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart store: lines, stock reconciliation, totals
//! - [`notify`] - Outcome-to-notification mapping for the host UI
//! - [`error`] - Domain error types
//! - [`validation`] - Checkout input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and rendering access is FORBIDDEN here
//! 3. **Integer Money**: Monetary values are integer halalas (i64), never floats
//! 4. **Explicit Outcomes**: Every mutation returns a typed outcome or error,
//!    never a silent state change and never a panic
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use bookshop_core::{Cart, Notification};
//!
//! let mut cart = Cart::new();
//! match cart.add(&book, 2) {
//!     Ok(outcome) => show(Notification::from(&outcome)),
//!     Err(rejection) => show(Notification::from(&rejection)),
//! }
//! assert_eq!(cart.total_items(), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod notify;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bookshop_core::Cart` instead of
// `use bookshop_core::cart::Cart`

pub use cart::{Cart, CartLine, CartOutcome};
pub use error::{CartError, CartResult, ValidationError};
pub use money::Money;
pub use notify::{Notification, NotificationKind, Severity};
pub use types::*;
