//! Pagination types
//!
//! Offset tracking, fetch statistics, and page-body interpretation.

use serde_json::Value;
use std::time::Duration;

/// Pull the records out of one page body.
///
/// Returns `None` when `items` is absent, not an array, or empty; all three
/// signal end-of-data. Any other body shape is also end-of-data, not an
/// error.
pub fn extract_items(body: &Value) -> Option<Vec<Value>> {
    let items = body.get("items")?.as_array()?;
    if items.is_empty() {
        return None;
    }
    Some(items.clone())
}

/// Tracks the offset across iterations of the pagination loop
#[derive(Debug, Clone, Default)]
pub struct OffsetState {
    /// Zero-based count of records to skip on the next request
    pub offset: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl OffsetState {
    /// Create a new state at offset zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the offset by one page
    pub fn advance(&mut self, page_size: u64) {
        self.offset += page_size;
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }
}

/// Statistics for one fetch run
#[derive(Debug, Clone, Default)]
pub struct FetchStats {
    /// Pages requested, including the final empty one
    pub pages: u32,
    /// Records accumulated across all pages
    pub records: u64,
    /// Total wall-clock time of the fetch
    pub elapsed: Duration,
}

impl FetchStats {
    /// Count one page
    pub fn add_page(&mut self) {
        self.pages += 1;
    }

    /// Count fetched records
    pub fn add_records(&mut self, count: usize) {
        self.records += count as u64;
    }

    /// Record the total elapsed time
    pub fn set_duration(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
    }
}
