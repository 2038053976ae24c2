//! HTTP request builder.

use std::collections::HashMap;
use std::time::Duration;

/// A builder for GET requests against the storefront API.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) timeout: Option<Duration>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            timeout: None,
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Abort the request if it has not completed within `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The fully resolved request URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Translate into a `reqwest` request bound to `client`.
    pub(crate) fn into_reqwest(self, client: &reqwest::Client) -> reqwest::RequestBuilder {
        let mut request = client.get(&self.url);
        for (key, value) in &self.headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_overwrites_same_key() {
        let builder = RequestBuilder::new("http://localhost/stock/1")
            .header("Accept", "text/plain")
            .header("Accept", "application/json");
        assert_eq!(builder.headers.len(), 1);
        assert_eq!(builder.headers["Accept"], "application/json");
    }

    #[test]
    fn test_into_reqwest_is_get_with_headers() {
        let client = reqwest::Client::new();
        let request = RequestBuilder::new("http://localhost:3333/products/1")
            .header("Accept", "application/json")
            .timeout(Duration::from_secs(1))
            .into_reqwest(&client)
            .build()
            .unwrap();
        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(request.url().as_str(), "http://localhost:3333/products/1");
        assert_eq!(request.headers()["Accept"], "application/json");
        assert_eq!(request.timeout(), Some(&Duration::from_secs(1)));
    }
}
