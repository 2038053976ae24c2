//! HTTP catalog client for ShoeCart.
//!
//! Provides a small builder API over `reqwest` with automatic JSON handling,
//! and a [`CatalogClient`] for the two read endpoints the cart depends on.
//!
//! # Example
//!
//! ```rust,ignore
//! use shoecart_data::{ApiConfig, CatalogClient};
//!
//! let catalog = CatalogClient::new(ApiConfig::from_host("localhost"));
//!
//! let product = catalog.product(1).await?;
//! let stock = catalog.stock(1).await?;
//! println!("{} ({} in stock)", product.title, stock.amount);
//! ```

mod catalog;
mod error;
mod request;
mod response;

pub use catalog::{ApiConfig, CatalogClient, ProductRecord, StockRecord, DEFAULT_API_PORT};
pub use error::FetchError;
pub use request::RequestBuilder;
pub use response::Response;

use std::collections::HashMap;
use std::time::Duration;

/// HTTP client for making outbound requests.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct FetchClient {
    inner: reqwest::Client,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
    timeout: Option<Duration>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
            base_url: None,
            default_headers: HashMap::new(),
            timeout: None,
        }
    }

    /// Create a client with a base URL that will be prepended to relative paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Apply a timeout to every request made by this client.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                format!("{}{}", base.trim_end_matches('/'), url)
            }
            _ => url,
        };

        let mut builder = RequestBuilder::new(full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        ClientRequestBuilder {
            client: self.inner.clone(),
            builder,
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    client: reqwest::Client,
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// The fully resolved request URL.
    pub fn url(&self) -> &str {
        self.builder.url()
    }

    /// Send the request and buffer the response.
    pub async fn send(self) -> Result<Response, FetchError> {
        let url = self.url().to_string();
        tracing::debug!(%url, "sending request");

        let response = self.builder.into_reqwest(&self.client).send().await?;
        let response = Response::read(response).await?;

        tracing::debug!(%url, status = response.status, "received response");
        Ok(response)
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{ApiConfig, CatalogClient, FetchClient, FetchError, Response};
}
