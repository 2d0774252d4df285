//! # Domain Types
//!
//! Catalog and order types mirroring the bookstore REST API wire format.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Book       │   │     Order       │   │   OrderItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  book_id        │       │
//! │  │  title / author │   │  customer_name  │   │  quantity       │       │
//! │  │  price (Money)  │   │  status         │   └─────────────────┘       │
//! │  │  available_qty  │   │  total (Money)  │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  Author / Category / Subcategory: browse taxonomy records              │
//! │  BookFilters: catalog query parameters                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Semantics
//! A `Book` is a point-in-time snapshot from the Catalog Service. The cart
//! treats it as read-only and trusts `available_quantity` as of fetch time;
//! nothing here re-validates against the live catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{self, Money};

// =============================================================================
// Catalog Records
// =============================================================================

/// Embedded author reference carried on a book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AuthorRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Embedded category reference carried on a book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Cover image metadata as stored by the catalog's media host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ImageDetails {
    pub public_id: String,
    pub width: u32,
    pub height: u32,
    pub format: String,
}

/// A book as reported by the Catalog Service.
///
/// Read-only to the cart: only `price` and `available_quantity` are consulted
/// by cart logic, and `available_quantity` may be stale relative to the live
/// catalog (the Order Service performs the authoritative check).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Book {
    /// Unique identifier assigned by the catalog.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display title.
    pub title: String,

    /// Author reference (id + name).
    pub author: AuthorRef,

    /// Unit price; the API speaks decimal riyals, stored as integer halalas.
    #[serde(with = "money::as_decimal")]
    #[ts(type = "number")]
    pub price: Money,

    /// Cover image URL.
    pub image: String,

    /// Cover image metadata.
    #[serde(default)]
    pub image_details: Option<ImageDetails>,

    /// Copies purchasable per the Catalog Service, as of fetch time.
    #[serde(rename = "quantity")]
    pub available_quantity: i64,

    /// Category reference.
    pub category: CategoryRef,

    /// Subcategory reference.
    pub subcategory: CategoryRef,

    /// When the catalog record was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the catalog record was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

/// An author record from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Author {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

/// A top-level category record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

/// A subcategory record, keyed to its parent category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Subcategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Parent category id.
    pub category: String,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Catalog Queries
// =============================================================================

/// Filter parameters for a catalog book listing.
///
/// Unset fields are omitted from the request entirely (the API treats a
/// missing parameter and an empty one differently).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BookFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
}

impl BookFilters {
    /// Filter that matches books by a free-text search term.
    pub fn search(term: impl Into<String>) -> Self {
        BookFilters {
            search: Some(term.into()),
            ..Default::default()
        }
    }

    /// Renders the filters as query-string pairs in the API's parameter names.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(v) = &self.category {
            pairs.push(("category", v.clone()));
        }
        if let Some(v) = &self.subcategory {
            pairs.push(("subcategory", v.clone()));
        }
        if let Some(v) = &self.author {
            pairs.push(("author", v.clone()));
        }
        if let Some(v) = &self.search {
            pairs.push(("search", v.clone()));
        }
        if let Some(v) = self.min_price {
            pairs.push(("minPrice", v.to_string()));
        }
        if let Some(v) = self.max_price {
            pairs.push(("maxPrice", v.to_string()));
        }
        if let Some(v) = self.featured {
            pairs.push(("featured", v.to_string()));
        }
        if let Some(v) = self.is_new {
            pairs.push(("isNew", v.to_string()));
        }
        pairs
    }

    /// True when no filter is set (plain listing).
    pub fn is_empty(&self) -> bool {
        self.to_query_pairs().is_empty()
    }
}

// =============================================================================
// Orders
// =============================================================================

/// One line of an order submission: `(book_id, quantity)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItem {
    pub book_id: String,
    pub quantity: i64,
}

/// Order lifecycle status as reported by the Order Service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum OrderStatus {
    Pending,
    Approved,
    Rejected,
}

/// An order record as reported by the Order Service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name supplied at checkout.
    #[serde(rename = "user_name")]
    pub customer_name: String,

    /// Ids of the order's line records.
    pub items: Vec<String>,

    #[serde(with = "money::as_decimal")]
    #[ts(type = "number")]
    pub total: Money,

    pub status: OrderStatus,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

/// One stored line of a placed order, with the book it referenced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderLine {
    #[serde(rename = "_id")]
    pub id: String,
    /// Parent order id.
    pub order: String,
    pub book: Book,
    pub quantity: i64,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

/// An order together with its resolved lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderDetails {
    pub order: Order,
    pub items: Vec<OrderLine>,
}

// =============================================================================
// Unit Tests
// =============================================================================
