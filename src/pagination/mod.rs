//! Offset pagination
//!
//! # Overview
//!
//! The paginator drives an offset-based loop against a single SysQL query
//! endpoint: render the query at the current offset, GET it, absorb the
//! page's `items`, advance the offset by the page size, repeat. A response
//! without a non-empty `items` array means the result set is exhausted; that
//! is the normal stop condition, never an error.
//!
//! Transport and decode failures propagate immediately. There is no retry
//! and no iteration cap.

mod types;

pub use types::{extract_items, FetchStats, OffsetState};

use crate::config::ExportConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info};

/// Drives the offset pagination loop until the result set is exhausted.
pub struct Paginator {
    client: HttpClient,
    config: ExportConfig,
    stats: FetchStats,
}

impl Paginator {
    /// Create a paginator from an export config
    pub fn new(config: ExportConfig) -> Self {
        let http_config = HttpClientConfig {
            timeout: config.timeout,
            ..HttpClientConfig::default()
        };
        let client = HttpClient::with_bearer(http_config, &config.auth_token);
        Self {
            client,
            config,
            stats: FetchStats::default(),
        }
    }

    /// Get statistics for the last fetch
    pub fn stats(&self) -> &FetchStats {
        &self.stats
    }

    /// Fetch every page, concatenating `items` in request order.
    ///
    /// Page N's records precede page N+1's. An empty first page yields an
    /// empty vector.
    pub async fn fetch_all(&mut self) -> Result<Vec<Value>> {
        let start = Instant::now();
        let mut state = OffsetState::new();
        let mut records = Vec::new();

        loop {
            let query = self.config.query.render(state.offset);
            let request_start = Instant::now();

            let body = self
                .client
                .get_json(&self.config.base_url, &[("q", query.as_str())])
                .await?;

            info!(
                offset = state.offset,
                elapsed_ms = request_start.elapsed().as_millis() as u64,
                "page fetched"
            );
            self.stats.add_page();

            let Some(items) = extract_items(&body) else {
                debug!(offset = state.offset, "no items in page, stopping");
                state.mark_done();
                break;
            };

            self.stats.add_records(items.len());
            records.extend(items);
            state.advance(u64::from(self.config.page_size));
        }

        self.stats.set_duration(start.elapsed());
        info!(
            pages = self.stats.pages,
            records = self.stats.records,
            elapsed_ms = self.stats.elapsed.as_millis() as u64,
            "fetch complete"
        );

        Ok(records)
    }
}

impl std::fmt::Debug for Paginator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("base_url", &self.config.base_url)
            .field("page_size", &self.config.page_size)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
