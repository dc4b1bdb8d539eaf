//! HTTP client
//!
//! Wraps reqwest with the two things every request here needs: the bearer
//! `Authorization` header and JSON response decoding. Non-2xx statuses and
//! undecodable bodies surface as errors and terminate the pagination loop.

use crate::error::{Error, Result};
use reqwest::{Client, Response};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            default_headers: HashMap::new(),
            user_agent: format!("sysql-export/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// HTTP client with bearer authentication
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    bearer_token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Self {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to build HTTP client");

        Self {
            client,
            config,
            bearer_token: None,
        }
    }

    /// Create a client that sends `Authorization: Bearer <token>`
    pub fn with_bearer(config: HttpClientConfig, token: impl Into<String>) -> Self {
        let mut client = Self::with_config(config);
        client.bearer_token = Some(token.into());
        client
    }

    /// Set the bearer token
    pub fn set_bearer_token(&mut self, token: impl Into<String>) {
        self.bearer_token = Some(token.into());
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Make a GET request with URL-encoded query parameters
    pub async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Response> {
        let mut req = self.client.get(url);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(ref token) = self.bearer_token {
            req = req.bearer_auth(token);
        }

        if !query.is_empty() {
            req = req.query(query);
        }

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        debug!("GET {url} -> {status}");
        Ok(response)
    }

    /// Make a GET request and parse the body as JSON
    pub async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value> {
        let response = self.get(url, query).await?;
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| Error::decode(format!("response body is not valid JSON: {e}")))
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("has_bearer_token", &self.bearer_token.is_some())
            .finish_non_exhaustive()
    }
}
