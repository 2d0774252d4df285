//! # Chat Assistant
//!
//! The storefront's rule-based shopping assistant.
//!
//! ## How It Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Assistant Pipeline                                  │
//! │                                                                         │
//! │  "any books about history?"                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  detect_intent() ──► Intent::FindBooks { term: "history" }             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ApiClient::get_books(search: "history")                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  "Here's what I found for \"history\":                                 │
//! │   - The Muqaddimah by Ibn Khaldun — 45.50 SAR ..."                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Intent detection and reply formatting are pure functions, testable
//! without a network; only [`Assistant::reply`] touches the catalog. The
//! assistant never fails outward: a catalog error becomes an apologetic
//! reply, not a crashed chat widget.

use tracing::warn;

use bookshop_core::{Author, Book, BookFilters, Category};

use crate::client::ApiClient;

/// Cap on book results quoted in one reply.
const MAX_BOOK_RESULTS: usize = 5;

/// Cap on author names quoted in one reply.
const MAX_AUTHOR_RESULTS: usize = 10;

/// Words stripped from a book query before it is sent to the catalog search.
const STOPWORDS: &[&str] = &[
    "a", "about", "any", "books", "book", "can", "do", "find", "for", "have", "i", "in", "is",
    "looking", "me", "of", "on", "please", "search", "show", "some", "the", "to", "want", "you",
];

// =============================================================================
// Intent Detection
// =============================================================================

/// What the shopper is asking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Search the catalog for books matching a term.
    FindBooks { term: String },

    /// List the store's authors.
    ListAuthors,

    /// List the store's categories.
    ListCategories,

    /// Anything else: greet and explain what the assistant can do.
    Help,
}

/// Classifies a chat message by keyword matching.
///
/// Book queries win over author/category listings when both could match
/// ("books by famous authors" is a search, not a roster request).
pub fn detect_intent(message: &str) -> Intent {
    let lower = message.to_lowercase();
    let words: Vec<&str> = lower
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .collect();

    let mentions = |keywords: &[&str]| words.iter().any(|w| keywords.contains(w));

    if mentions(&["book", "books", "find", "search", "read", "reading"]) {
        let term = words
            .iter()
            .filter(|w| !STOPWORDS.contains(*w))
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        return Intent::FindBooks { term };
    }

    if mentions(&["author", "authors", "writer", "writers", "wrote"]) {
        return Intent::ListAuthors;
    }

    if mentions(&["category", "categories", "genre", "genres", "section", "sections"]) {
        return Intent::ListCategories;
    }

    Intent::Help
}

// =============================================================================
// Reply Formatting
// =============================================================================

/// Renders a book search result as a chat reply.
pub fn format_books_reply(term: &str, books: &[Book]) -> String {
    if books.is_empty() {
        return format!("I couldn't find any books matching \"{term}\". Try a different search?");
    }

    let mut reply = format!("Here's what I found for \"{term}\":\n");
    for book in books.iter().take(MAX_BOOK_RESULTS) {
        reply.push_str(&format!(
            "- {} by {} — {}\n",
            book.title, book.author.name, book.price
        ));
    }
    if books.len() > MAX_BOOK_RESULTS {
        reply.push_str(&format!("...and {} more.\n", books.len() - MAX_BOOK_RESULTS));
    }
    reply
}

/// Renders the author roster as a chat reply.
pub fn format_authors_reply(authors: &[Author]) -> String {
    if authors.is_empty() {
        return "We don't have any authors listed yet.".to_string();
    }

    let mut reply = "Our authors include:\n".to_string();
    for author in authors.iter().take(MAX_AUTHOR_RESULTS) {
        reply.push_str(&format!("- {}\n", author.name));
    }
    reply
}

/// Renders the category list as a chat reply.
pub fn format_categories_reply(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "We don't have any categories listed yet.".to_string();
    }

    let mut reply = "You can browse these categories:\n".to_string();
    for category in categories {
        reply.push_str(&format!("- {}\n", category.name));
    }
    reply
}

fn help_reply() -> String {
    "Hi! I'm the bookshop assistant. I can search for books (\"find books about history\"), \
     list our authors, or show the store's categories. What can I help you with?"
        .to_string()
}

fn unavailable_reply() -> String {
    "Sorry, I couldn't reach the catalog just now. Please try again in a moment.".to_string()
}

// =============================================================================
// Assistant
// =============================================================================

/// The chat assistant: detects the intent, resolves it against the catalog,
/// and renders a reply.
#[derive(Debug, Clone)]
pub struct Assistant {
    client: ApiClient,
}

impl Assistant {
    /// Creates an assistant backed by the given catalog client.
    pub fn new(client: ApiClient) -> Self {
        Assistant { client }
    }

    /// Answers one chat message.
    ///
    /// Infallible by design: catalog failures are logged and turned into an
    /// apologetic reply.
    pub async fn reply(&self, message: &str) -> String {
        match detect_intent(message) {
            Intent::FindBooks { term } if term.is_empty() => help_reply(),
            Intent::FindBooks { term } => {
                match self.client.get_books(&BookFilters::search(&term)).await {
                    Ok(books) => format_books_reply(&term, &books),
                    Err(error) => {
                        warn!(%error, "assistant book search failed");
                        unavailable_reply()
                    }
                }
            }
            Intent::ListAuthors => match self.client.get_authors().await {
                Ok(authors) => format_authors_reply(&authors),
                Err(error) => {
                    warn!(%error, "assistant author listing failed");
                    unavailable_reply()
                }
            },
            Intent::ListCategories => match self.client.get_categories().await {
                Ok(categories) => format_categories_reply(&categories),
                Err(error) => {
                    warn!(%error, "assistant category listing failed");
                    unavailable_reply()
                }
            },
            Intent::Help => help_reply(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bookshop_core::{AuthorRef, CategoryRef, Money};
    use chrono::Utc;

    fn test_book(title: &str, author: &str, price_halalas: i64) -> Book {
        Book {
            id: "b1".to_string(),
            title: title.to_string(),
            author: AuthorRef {
                id: "a1".to_string(),
                name: author.to_string(),
            },
            price: Money::from_halalas(price_halalas),
            image: String::new(),
            image_details: None,
            available_quantity: 3,
            category: CategoryRef {
                id: "c1".to_string(),
                name: "History".to_string(),
            },
            subcategory: CategoryRef {
                id: "s1".to_string(),
                name: "Classical".to_string(),
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_detect_book_search_with_term() {
        assert_eq!(
            detect_intent("any books about history?"),
            Intent::FindBooks {
                term: "history".to_string()
            }
        );
        assert_eq!(
            detect_intent("Find me a book on Ibn Khaldun please"),
            Intent::FindBooks {
                term: "ibn khaldun".to_string()
            }
        );
    }

    #[test]
    fn test_book_search_wins_over_author_listing() {
        assert_eq!(
            detect_intent("books by famous authors"),
            Intent::FindBooks {
                term: "by famous authors".to_string()
            }
        );
    }

    #[test]
    fn test_detect_listings_and_fallback() {
        assert_eq!(detect_intent("who are your authors?"), Intent::ListAuthors);
        assert_eq!(detect_intent("what genres do you have"), Intent::ListCategories);
        assert_eq!(detect_intent("hello there"), Intent::Help);
    }

    #[test]
    fn test_format_books_reply_lists_and_caps() {
        let books: Vec<Book> = (0..7)
            .map(|i| test_book(&format!("Title {i}"), "Author", 4550))
            .collect();

        let reply = format_books_reply("history", &books);
        assert!(reply.contains("Here's what I found for \"history\""));
        assert!(reply.contains("- Title 0 by Author — 45.50 SAR"));
        assert!(reply.contains("- Title 4"));
        assert!(!reply.contains("- Title 5")); // capped at 5
        assert!(reply.contains("...and 2 more."));
    }

    #[test]
    fn test_format_books_reply_empty() {
        let reply = format_books_reply("xyzzy", &[]);
        assert!(reply.contains("couldn't find any books matching \"xyzzy\""));
    }

    #[test]
    fn test_format_categories_reply() {
        let categories = vec![Category {
            id: "c1".to_string(),
            name: "History".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }];
        let reply = format_categories_reply(&categories);
        assert!(reply.contains("- History"));
    }
}
