//! Export configuration
//!
//! Everything the paginator needs to run lives in one explicit structure:
//! query template, endpoint, bearer token, page size, and an optional request
//! timeout. The bearer token comes from the `SYSDIG_AUTH_TOKEN` environment
//! variable and is resolved before any HTTP state is built.

use crate::error::{Error, Result};
use crate::query::QueryTemplate;
use std::time::Duration;

/// Environment variable holding the API bearer token
pub const AUTH_TOKEN_ENV: &str = "SYSDIG_AUTH_TOKEN";

/// Default SysQL query endpoint
pub const DEFAULT_BASE_URL: &str = "https://app.us4.sysdig.com/api/sysql/v2/query";

/// Default number of records requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

/// Configuration for one export run
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Query template with substitutable offset
    pub query: QueryTemplate,
    /// SysQL query endpoint URL
    pub base_url: String,
    /// API bearer token
    pub auth_token: String,
    /// Records per page; the offset advances by this amount
    pub page_size: u32,
    /// Request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl ExportConfig {
    /// Create a new config builder
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder::default()
    }

    /// Build a config with defaults and the token from the environment
    pub fn from_env() -> Result<Self> {
        let token = auth_token_from_env()?;
        Self::builder().auth_token(token).build()
    }
}

/// Read the bearer token from `SYSDIG_AUTH_TOKEN`.
///
/// An unset or empty variable is a fatal configuration error.
pub fn auth_token_from_env() -> Result<String> {
    auth_token_from(AUTH_TOKEN_ENV)
}

fn auth_token_from(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| Error::missing_env(name))
}

/// Builder for export config
#[derive(Debug, Default)]
pub struct ExportConfigBuilder {
    query: Option<QueryTemplate>,
    base_url: Option<String>,
    auth_token: Option<String>,
    page_size: Option<u32>,
    timeout: Option<Duration>,
}

impl ExportConfigBuilder {
    /// Set the query template
    pub fn query(mut self, query: QueryTemplate) -> Self {
        self.query = Some(query);
        self
    }

    /// Set the endpoint URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the bearer token
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Set the page size
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the config; the bearer token is the only required field
    pub fn build(self) -> Result<ExportConfig> {
        let auth_token = self
            .auth_token
            .ok_or_else(|| Error::missing_field("auth_token"))?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        url::Url::parse(&base_url)?;

        Ok(ExportConfig {
            query: self.query.unwrap_or_default(),
            base_url,
            auth_token,
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            timeout: self.timeout,
        })
    }
}
