//! Bookstore REST API client.
//!
//! Every endpoint answers the same envelope:
//!
//! ```json
//! { "success": true, "data": ..., "message": "optional human text" }
//! ```
//!
//! The client unwraps it once, in one place: a non-2xx status becomes
//! [`ClientError::ApiError`], `success: false` becomes
//! [`ClientError::Rejected`] carrying the service's message, and everything
//! else hands back the typed `data`.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use bookshop_core::{Author, Book, BookFilters, Category, OrderDetails, OrderItem, Subcategory};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Response envelope wrapping every API payload.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct ApiEnvelope<T> {
    success: bool,
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    message: Option<String>,
}

/// Body of `POST /orders`.
#[derive(Debug, Serialize)]
struct CreateOrderBody<'a> {
    user_name: &'a str,
    items: &'a [OrderItem],
}

/// `data` payload answered by `POST /orders`.
#[derive(Debug, Deserialize)]
struct OrderCreated {
    order_id: String,
}

/// Bookstore API client for the catalog and order endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::RequestFailed` if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?;

        Ok(ApiClient {
            http,
            base_url: config.base_url,
        })
    }

    /// Creates a client from `BOOKSHOP_API_URL` / `BOOKSHOP_API_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::load()?)
    }

    /// The configured base URL (without a trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -------------------------------------------------------------------------
    // Books
    // -------------------------------------------------------------------------

    /// Lists catalog books, optionally filtered.
    pub async fn get_books(&self, filters: &BookFilters) -> Result<Vec<Book>, ClientError> {
        debug!(?filters, "get_books");
        self.get("/books", &filters.to_query_pairs()).await
    }

    /// Fetches a single book by id.
    pub async fn get_book(&self, id: &str) -> Result<Book, ClientError> {
        debug!(id, "get_book");
        self.get(&format!("/books/{id}"), &[]).await
    }

    // -------------------------------------------------------------------------
    // Authors
    // -------------------------------------------------------------------------

    /// Lists all authors.
    pub async fn get_authors(&self) -> Result<Vec<Author>, ClientError> {
        debug!("get_authors");
        self.get("/authors", &[]).await
    }

    /// Fetches a single author by id.
    pub async fn get_author(&self, id: &str) -> Result<Author, ClientError> {
        debug!(id, "get_author");
        self.get(&format!("/authors/{id}"), &[]).await
    }

    /// Lists the books of one author.
    pub async fn get_author_books(&self, id: &str) -> Result<Vec<Book>, ClientError> {
        debug!(id, "get_author_books");
        self.get(&format!("/authors/{id}/books"), &[]).await
    }

    // -------------------------------------------------------------------------
    // Categories
    // -------------------------------------------------------------------------

    /// Lists all categories.
    pub async fn get_categories(&self) -> Result<Vec<Category>, ClientError> {
        debug!("get_categories");
        self.get("/categories", &[]).await
    }

    /// Fetches a single category by id.
    pub async fn get_category(&self, id: &str) -> Result<Category, ClientError> {
        debug!(id, "get_category");
        self.get(&format!("/categories/{id}"), &[]).await
    }

    /// Lists the subcategories of one category.
    pub async fn get_subcategories(&self, category_id: &str) -> Result<Vec<Subcategory>, ClientError> {
        debug!(category_id, "get_subcategories");
        self.get(&format!("/categories/{category_id}/subcategories"), &[])
            .await
    }

    /// Fetches a single subcategory by id.
    pub async fn get_subcategory(
        &self,
        category_id: &str,
        subcategory_id: &str,
    ) -> Result<Subcategory, ClientError> {
        debug!(category_id, subcategory_id, "get_subcategory");
        self.get(
            &format!("/categories/{category_id}/subcategories/{subcategory_id}"),
            &[],
        )
        .await
    }

    // -------------------------------------------------------------------------
    // Orders
    // -------------------------------------------------------------------------

    /// Submits an order and returns the order id assigned by the service.
    ///
    /// No stock re-validation happens here; the Order Service performs the
    /// authoritative check and may answer `success: false`, surfaced as
    /// [`ClientError::Rejected`].
    pub async fn create_order(
        &self,
        customer_name: &str,
        items: &[OrderItem],
    ) -> Result<String, ClientError> {
        debug!(customer_name, item_count = items.len(), "create_order");

        let body = CreateOrderBody {
            user_name: customer_name,
            items,
        };

        let response = self
            .http
            .post(format!("{}/orders", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?;

        let created: OrderCreated = Self::unwrap_envelope(response).await?;
        Ok(created.order_id)
    }

    /// Fetches a placed order with its resolved lines.
    pub async fn get_order(&self, id: &str) -> Result<OrderDetails, ClientError> {
        debug!(id, "get_order");
        self.get(&format!("/orders/{id}"), &[]).await
    }

    // -------------------------------------------------------------------------
    // Plumbing
    // -------------------------------------------------------------------------

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ClientError> {
        let mut request = self.http.get(format!("{}{}", self.base_url, path));
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?;

        Self::unwrap_envelope(response).await
    }

    async fn unwrap_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|e| ClientError::ResponseParseFailed(e.to_string()))?;

        match envelope {
            ApiEnvelope {
                success: true,
                data: Some(data),
                ..
            } => Ok(data),
            ApiEnvelope { message, .. } => Err(ClientError::Rejected(
                message.unwrap_or_else(|| "the service reported a failure".to_string()),
            )),
        }
    }
}
