//! Client configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults pointing at the hosted bookstore API.

use std::env;
use thiserror::Error;

/// Default base URL of the bookstore REST API.
pub const DEFAULT_API_URL: &str = "https://lib-dashboard-lovat.vercel.app/api";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Bookstore API client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, without a trailing slash.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Builds a configuration for an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// - `BOOKSHOP_API_URL` (default: the hosted API)
    /// - `BOOKSHOP_API_TIMEOUT_SECS` (default: 30)
    pub fn load() -> Result<Self, ConfigError> {
        let base_url = env::var("BOOKSHOP_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let timeout_secs = env::var("BOOKSHOP_API_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("BOOKSHOP_API_TIMEOUT_SECS".to_string()))?;

        Ok(ClientConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::new(DEFAULT_API_URL)
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held an unparseable value.
    #[error("invalid value for {0}")]
    InvalidValue(String),
}
