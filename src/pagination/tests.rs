//! Tests for pagination types
//!
//! The loop itself is exercised against a mock server in the integration
//! tests; these cover page interpretation and state bookkeeping.

use super::*;
use serde_json::json;
use std::time::Duration;

// ============================================================================
// extract_items Tests
// ============================================================================

#[test]
fn test_extract_items_returns_records_in_order() {
    let body = json!({"items": [{"id": 1}, {"id": 2}, {"id": 3}]});
    let items = extract_items(&body).unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[2]["id"], 3);
}

#[test]
fn test_extract_items_missing_key_is_end_of_data() {
    let body = json!({"metadata": {"count": 0}});
    assert!(extract_items(&body).is_none());
}

#[test]
fn test_extract_items_empty_array_is_end_of_data() {
    let body = json!({"items": []});
    assert!(extract_items(&body).is_none());
}

#[test]
fn test_extract_items_null_is_end_of_data() {
    let body = json!({"items": null});
    assert!(extract_items(&body).is_none());
}

#[test]
fn test_extract_items_non_object_body_is_end_of_data() {
    assert!(extract_items(&json!([1, 2, 3])).is_none());
    assert!(extract_items(&json!("oops")).is_none());
    assert!(extract_items(&json!(null)).is_none());
}

// ============================================================================
// OffsetState Tests
// ============================================================================

#[test]
fn test_offset_state_default() {
    let state = OffsetState::new();
    assert_eq!(state.offset, 0);
    assert!(!state.done);
}

#[test]
fn test_offset_state_advance() {
    let mut state = OffsetState::new();
    state.advance(1000);
    state.advance(1000);
    assert_eq!(state.offset, 2000);

    state.mark_done();
    assert!(state.done);
}

// ============================================================================
// FetchStats Tests
// ============================================================================

#[test]
fn test_fetch_stats_accumulate() {
    let mut stats = FetchStats::default();
    stats.add_page();
    stats.add_page();
    stats.add_records(1000);
    stats.add_records(42);
    stats.set_duration(Duration::from_millis(250));

    assert_eq!(stats.pages, 2);
    assert_eq!(stats.records, 1042);
    assert_eq!(stats.elapsed, Duration::from_millis(250));
}
