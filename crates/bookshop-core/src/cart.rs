//! # Cart Store
//!
//! The in-memory shopping cart: line items, stock reconciliation, totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Storefront Action          Operation              State Change         │
//! │  ─────────────────          ─────────              ────────────         │
//! │                                                                         │
//! │  Click "Add to cart" ─────► add(book, qty) ──────► lines.push / merge  │
//! │                                                                         │
//! │  Change quantity ─────────► set_quantity(id, n) ─► lines[i].qty = n    │
//! │                                                                         │
//! │  Click remove ────────────► remove(id) ──────────► lines.remove(i)     │
//! │                                                                         │
//! │  Click clear / order OK ──► clear() ─────────────► lines.clear()       │
//! │                                                                         │
//! │  Cart badge / drawer ─────► total_items(),         (read only)          │
//! │                             total_price()                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by `book.id` and keep insertion order
//! - Every line quantity is >= 1 (dropping to 0 removes the line)
//! - `quantity <= book.available_quantity` is enforced against the stock
//!   value captured in the line's `Book` snapshot (soft check; the snapshot
//!   may be stale and the Order Service holds the authoritative count)
//! - A rejected mutation leaves the cart byte-for-byte unchanged
//!
//! ## Outcome Signals
//! Every mutation reports what it did as a [`CartOutcome`] (or a
//! [`CartError`] for rejections). The store only decides *that* and *what*
//! to notify; rendering is the host UI's concern — see [`crate::notify`].
//!
//! ## Sharing
//! The cart is a plain value owned by one shopping session. It is handed to
//! whoever needs it by explicit reference, never through a process-wide
//! singleton, and all mutations are synchronous with no suspension points.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CartError, CartResult};
use crate::money::Money;
use crate::types::{Book, OrderItem};

// =============================================================================
// Cart Line
// =============================================================================

/// One cart line: a frozen `Book` snapshot paired with a requested quantity.
///
/// ## Snapshot Freezing
/// The book data (price, stock, title) is captured at add time. If the
/// catalog record changes afterwards, this line keeps displaying and
/// validating against what the shopper actually saw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    /// Frozen catalog snapshot.
    pub book: Book,

    /// Requested quantity, always >= 1.
    pub quantity: i64,
}

impl CartLine {
    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.book.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Outcome Signals
// =============================================================================

/// What a successful cart mutation did, for user-facing display.
///
/// Rejections travel separately as [`CartError`]; both convert into a
/// [`crate::notify::Notification`] for the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum CartOutcome {
    /// A new line was appended.
    Added { title: String },

    /// An existing line's quantity was increased by a repeated add.
    Updated { title: String, quantity: i64 },

    /// A line was deleted; carries the title for display.
    Removed { title: String },

    /// All lines were dropped.
    Cleared,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an insertion-ordered sequence of [`CartLine`]s,
/// unique by book id.
///
/// ## Lifecycle
/// Created empty when a shopping session starts, mutated only through the
/// operations below, cleared explicitly or after a successful order
/// submission, and discarded with the session. Nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds a book to the cart, or increases the quantity of its line.
    ///
    /// ## Behavior
    /// - No line for `book.id` and `quantity <= book.available_quantity`:
    ///   a new line is appended at the end, signalling [`CartOutcome::Added`].
    /// - Line exists and `existing + quantity` still fits the stock reported
    ///   by the *passed* snapshot: the line's quantity is replaced in place,
    ///   signalling [`CartOutcome::Updated`].
    /// - Either check fails: nothing changes and
    ///   [`CartError::InsufficientStock`] carries the actual available count.
    ///
    /// Exactly one outcome or error per call, never silent. A rejected
    /// increment is rejected in isolation — no partial application.
    pub fn add(&mut self, book: &Book, quantity: i64) -> CartResult<CartOutcome> {
        if quantity < 1 {
            return Err(CartError::InvalidQuantity {
                requested: quantity,
            });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.book.id == book.id) {
            let new_quantity = line.quantity + quantity;
            if new_quantity > book.available_quantity {
                return Err(CartError::InsufficientStock {
                    title: book.title.clone(),
                    available: book.available_quantity,
                    requested: new_quantity,
                });
            }
            line.quantity = new_quantity;
            return Ok(CartOutcome::Updated {
                title: book.title.clone(),
                quantity: new_quantity,
            });
        }

        if quantity > book.available_quantity {
            return Err(CartError::InsufficientStock {
                title: book.title.clone(),
                available: book.available_quantity,
                requested: quantity,
            });
        }

        self.lines.push(CartLine {
            book: book.clone(),
            quantity,
        });
        Ok(CartOutcome::Added {
            title: book.title.clone(),
        })
    }

    /// Adds a single copy of a book (the storefront's one-click add).
    pub fn add_one(&mut self, book: &Book) -> CartResult<CartOutcome> {
        self.add(book, 1)
    }

    /// Removes the line for `book_id`, if present.
    ///
    /// Removal is idempotent: an absent id is a no-op and signals nothing.
    /// When a line is deleted, the outcome carries its title for display.
    pub fn remove(&mut self, book_id: &str) -> Option<CartOutcome> {
        let index = self.lines.iter().position(|l| l.book.id == book_id)?;
        let line = self.lines.remove(index);
        Some(CartOutcome::Removed {
            title: line.book.title,
        })
    }

    /// Sets the quantity of an existing line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: behaves exactly as [`Cart::remove`].
    /// - Line absent: no-op (`Ok(None)`) — this operation never creates one.
    /// - `quantity` above the *stored snapshot's* available stock: the line
    ///   is left untouched and [`CartError::InsufficientStock`] is returned.
    /// - Otherwise the quantity is replaced in place. In-place edits succeed
    ///   quietly (`Ok(None)`): the storefront already shows the new value.
    pub fn set_quantity(
        &mut self,
        book_id: &str,
        quantity: i64,
    ) -> CartResult<Option<CartOutcome>> {
        if quantity <= 0 {
            return Ok(self.remove(book_id));
        }

        let Some(line) = self.lines.iter_mut().find(|l| l.book.id == book_id) else {
            return Ok(None);
        };

        if quantity > line.book.available_quantity {
            return Err(CartError::InsufficientStock {
                title: line.book.title.clone(),
                available: line.book.available_quantity,
                requested: quantity,
            });
        }

        line.quantity = quantity;
        Ok(None)
    }

    /// Removes all lines unconditionally.
    ///
    /// Signals [`CartOutcome::Cleared`] exactly once, even on an already
    /// empty cart.
    pub fn clear(&mut self) -> CartOutcome {
        self.lines.clear();
        CartOutcome::Cleared
    }

    /// Sum of `price × quantity` across all lines, in exact integer halalas.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Maps the current lines to `(book_id, quantity)` pairs for an order
    /// submission. Pure; the cart is not consumed and not modified, so a
    /// failed submission leaves it intact for retry.
    pub fn order_items(&self) -> Vec<OrderItem> {
        self.lines
            .iter()
            .map(|l| OrderItem {
                book_id: l.book.id.clone(),
                quantity: l.quantity,
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::types::{AuthorRef, CategoryRef};

    fn test_book(id: &str, title: &str, price_halalas: i64, available: i64) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: AuthorRef {
                id: format!("author-{id}"),
                name: "Test Author".to_string(),
            },
            price: Money::from_halalas(price_halalas),
            image: String::new(),
            image_details: None,
            available_quantity: available,
            category: CategoryRef {
                id: "cat-1".to_string(),
                name: "History".to_string(),
            },
            subcategory: CategoryRef {
                id: "sub-1".to_string(),
                name: "Classical".to_string(),
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_add_new_line() {
        let mut cart = Cart::new();
        let book = test_book("b1", "Book One", 4500, 5);

        let outcome = cart.add(&book, 2).unwrap();

        assert_eq!(
            outcome,
            CartOutcome::Added {
                title: "Book One".to_string()
            }
        );
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_add_merges_existing_line() {
        let mut cart = Cart::new();
        let book = test_book("b1", "Book One", 4500, 10);

        cart.add(&book, 2).unwrap();
        let outcome = cart.add(&book, 3).unwrap();

        assert_eq!(
            outcome,
            CartOutcome::Updated {
                title: "Book One".to_string(),
                quantity: 5
            }
        );
        assert_eq!(cart.line_count(), 1); // still one line
        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn test_add_preserves_insertion_order_on_merge() {
        let mut cart = Cart::new();
        let first = test_book("b1", "First", 1000, 10);
        let second = test_book("b2", "Second", 2000, 10);

        cart.add(&first, 1).unwrap();
        cart.add(&second, 1).unwrap();
        cart.add(&first, 1).unwrap(); // merge must not move the line

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.book.id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "b2"]);
    }

    #[test]
    fn test_add_out_of_stock_book_rejected() {
        let mut cart = Cart::new();
        let book = test_book("b1", "Sold Out", 4500, 0);

        let err = cart.add(&book, 1).unwrap_err();

        assert_eq!(
            err,
            CartError::InsufficientStock {
                title: "Sold Out".to_string(),
                available: 0,
                requested: 1,
            }
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejected_increment_is_not_partially_applied() {
        let mut cart = Cart::new();
        let book = test_book("b1", "Book One", 4500, 5);

        cart.add(&book, 3).unwrap();
        let err = cart.add(&book, 4).unwrap_err(); // 3 + 4 = 7 > 5

        assert_eq!(
            err,
            CartError::InsufficientStock {
                title: "Book One".to_string(),
                available: 5,
                requested: 7,
            }
        );
        // Rejected in isolation: quantity stays 3, not clamped to 5
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        let book = test_book("b1", "Book One", 4500, 5);

        let err = cart.add(&book, 0).unwrap_err();
        assert_eq!(err, CartError::InvalidQuantity { requested: 0 });
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_reports_title_and_is_idempotent() {
        let mut cart = Cart::new();
        let book = test_book("b1", "Book One", 4500, 5);
        cart.add(&book, 1).unwrap();

        let outcome = cart.remove("b1");
        assert_eq!(
            outcome,
            Some(CartOutcome::Removed {
                title: "Book One".to_string()
            })
        );
        assert!(cart.is_empty());

        // Second remove: no-op, no signal, no error
        assert_eq!(cart.remove("b1"), None);
    }

    #[test]
    fn test_set_quantity_zero_is_remove() {
        let mut cart = Cart::new();
        let book = test_book("b1", "Book One", 4500, 5);
        cart.add(&book, 2).unwrap();

        let outcome = cart.set_quantity("b1", 0).unwrap();
        assert_eq!(
            outcome,
            Some(CartOutcome::Removed {
                title: "Book One".to_string()
            })
        );
        assert!(cart.is_empty());

        // Negative quantity behaves identically, and stays idempotent
        assert_eq!(cart.set_quantity("b1", -3).unwrap(), None);
    }

    #[test]
    fn test_set_quantity_absent_line_is_noop() {
        let mut cart = Cart::new();

        // Never creates a line
        assert_eq!(cart.set_quantity("ghost", 3).unwrap(), None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_over_stock_rejected() {
        let mut cart = Cart::new();
        let book = test_book("b1", "Book One", 4500, 5);
        cart.add(&book, 2).unwrap();

        let err = cart.set_quantity("b1", 6).unwrap_err();
        assert_eq!(
            err,
            CartError::InsufficientStock {
                title: "Book One".to_string(),
                available: 5,
                requested: 6,
            }
        );
        // Untouched on rejection
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_set_quantity_in_range_is_quiet() {
        let mut cart = Cart::new();
        let book = test_book("b1", "Book One", 4500, 5);
        cart.add(&book, 2).unwrap();

        assert_eq!(cart.set_quantity("b1", 5).unwrap(), None);
        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn test_clear_signals_once_even_when_empty() {
        let mut cart = Cart::new();

        assert_eq!(cart.clear(), CartOutcome::Cleared);
        assert!(cart.is_empty());

        let book = test_book("b1", "Book One", 4500, 5);
        cart.add(&book, 2).unwrap();
        assert_eq!(cart.clear(), CartOutcome::Cleared);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals_are_exact() {
        let mut cart = Cart::new();
        cart.add(&test_book("b1", "First", 4500, 10), 2).unwrap(); // 45.00 × 2
        cart.add(&test_book("b2", "Second", 3050, 10), 1).unwrap(); // 30.50 × 1

        assert_eq!(cart.total_price(), Money::from_halalas(12050)); // 120.50 SAR
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_totals_on_empty_cart() {
        let cart = Cart::new();
        assert_eq!(cart.total_price(), Money::zero());
        assert_eq!(cart.total_items(), 0);
    }

    /// Full reconciliation scenario: add, rejected increment, direct set,
    /// remove.
    #[test]
    fn test_stock_reconciliation_scenario() {
        let mut cart = Cart::new();
        let book = test_book("a", "Book A", 4500, 5);

        // add qty 3 → line quantity 3, "added"
        assert_eq!(
            cart.add(&book, 3).unwrap(),
            CartOutcome::Added {
                title: "Book A".to_string()
            }
        );

        // add qty 4 → requested total 7 > 5 → rejected carrying available=5
        let err = cart.add(&book, 4).unwrap_err();
        assert!(matches!(
            err,
            CartError::InsufficientStock { available: 5, .. }
        ));
        assert_eq!(cart.total_items(), 3);

        // set to exactly the stock → accepted, quiet
        assert_eq!(cart.set_quantity("a", 5).unwrap(), None);
        assert_eq!(cart.total_items(), 5);

        // remove → empty, "removed" with title
        assert_eq!(
            cart.remove("a"),
            Some(CartOutcome::Removed {
                title: "Book A".to_string()
            })
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_stock_check_uses_frozen_snapshot() {
        let mut cart = Cart::new();
        let mut book = test_book("b1", "Book One", 4500, 5);
        cart.add(&book, 2).unwrap();

        // Catalog later reports more stock, but set_quantity validates
        // against the snapshot captured at add time (known staleness gap).
        book.available_quantity = 50;
        let err = cart.set_quantity("b1", 10).unwrap_err();
        assert!(matches!(
            err,
            CartError::InsufficientStock { available: 5, .. }
        ));

        // A fresh add, however, sees the snapshot it is handed.
        cart.add(&book, 8).unwrap();
        assert_eq!(cart.total_items(), 10);
    }

    #[test]
    fn test_order_items_mapping() {
        let mut cart = Cart::new();
        cart.add(&test_book("b1", "First", 4500, 10), 2).unwrap();
        cart.add(&test_book("b2", "Second", 3050, 10), 1).unwrap();

        let items = cart.order_items();
        assert_eq!(
            items,
            vec![
                OrderItem {
                    book_id: "b1".to_string(),
                    quantity: 2
                },
                OrderItem {
                    book_id: "b2".to_string(),
                    quantity: 1
                },
            ]
        );
        // Mapping is pure: the cart is untouched
        assert_eq!(cart.total_items(), 3);
    }
}
