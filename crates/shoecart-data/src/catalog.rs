//! Product and stock lookups against the storefront API.

use crate::{FetchClient, FetchError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Port the storefront API listens on.
pub const DEFAULT_API_PORT: u16 = 3333;

/// Connection settings for the storefront API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL, without a trailing path.
    pub base_url: String,
    /// Per-request timeout. `None` leaves it to the transport.
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    /// Use an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Derive the base URL from the host the front-end was served from.
    pub fn from_host(host: &str) -> Self {
        Self::new(format!("http://{}:{}", host, DEFAULT_API_PORT))
    }

    /// Set a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_host("localhost")
    }
}

/// A product as served by `GET /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub image: String,
}

/// Availability as served by `GET /stock/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    /// Maximum quantity available.
    pub amount: i64,
}

/// Client for the storefront's product and stock endpoints.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: FetchClient,
}

impl CatalogClient {
    /// Create a catalog client from connection settings.
    pub fn new(config: ApiConfig) -> Self {
        let mut client = FetchClient::new()
            .with_base_url(config.base_url)
            .with_default_header("Accept", "application/json");
        if let Some(timeout) = config.timeout {
            client = client.with_timeout(timeout);
        }
        Self { client }
    }

    /// Fetch a product's catalog data.
    pub async fn product(&self, id: u64) -> Result<ProductRecord, FetchError> {
        self.client
            .get(format!("/products/{}", id))
            .send()
            .await?
            .error_for_status()?
            .json()
    }

    /// Fetch a product's current stock level.
    pub async fn stock(&self, id: u64) -> Result<StockRecord, FetchError> {
        self.client
            .get(format!("/stock/{}", id))
            .send()
            .await?
            .error_for_status()?
            .json()
    }
}
