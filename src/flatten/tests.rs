//! Tests for record flattening

use super::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

#[test_case(json!({"a": 1, "b": "x", "c": null}) ; "scalars only")]
#[test_case(json!({}) ; "empty object")]
fn test_scalar_records_flatten_to_themselves(record: Value) {
    let flat = flatten_record(&record).unwrap();
    assert_eq!(Value::Object(flat), record);
}

#[test]
fn test_nested_object() {
    let flat = flatten_record(&json!({"a": {"b": 1}})).unwrap();
    assert_eq!(Value::Object(flat), json!({"a_b": 1}));
}

#[test]
fn test_sequence_of_scalars() {
    let flat = flatten_record(&json!({"a": [1, 2]})).unwrap();
    assert_eq!(Value::Object(flat), json!({"a_0": 1, "a_1": 2}));
}

#[test]
fn test_sequence_of_objects() {
    let flat = flatten_record(&json!({"a": [{"b": 1}, {"b": 2}]})).unwrap();
    assert_eq!(Value::Object(flat), json!({"a_0_b": 1, "a_1_b": 2}));
}

#[test]
fn test_deep_mixed_nesting() {
    let record = json!({
        "workload": {
            "name": "api",
            "containers": [
                {"image": {"repo": "r1", "tags": ["a", "b"]}},
                {"image": {"repo": "r2"}}
            ]
        },
        "severity": "High"
    });
    let flat = flatten_record(&record).unwrap();
    assert_eq!(
        Value::Object(flat),
        json!({
            "workload_name": "api",
            "workload_containers_0_image_repo": "r1",
            "workload_containers_0_image_tags_0": "a",
            "workload_containers_0_image_tags_1": "b",
            "workload_containers_1_image_repo": "r2",
            "severity": "High"
        })
    );
}

#[test]
fn test_null_values_survive() {
    let flat = flatten_record(&json!({"a": {"b": null}})).unwrap();
    assert_eq!(Value::Object(flat), json!({"a_b": null}));
}

#[test]
fn test_key_order_follows_traversal() {
    let flat = flatten_record(&json!({"x": 1, "y": {"z": 2}})).unwrap();
    let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["x", "y_z"]);
}

#[test]
fn test_colliding_keys_last_write_wins() {
    // "a_b" collides with the flattening of {"a": {"b": ...}}; the later
    // field in traversal order overwrites.
    let flat = flatten_record(&json!({"a": {"b": 1}, "a_b": 2})).unwrap();
    assert_eq!(Value::Object(flat), json!({"a_b": 2}));
}

#[test]
fn test_empty_containers_contribute_no_keys() {
    let flat = flatten_record(&json!({"a": {}, "b": [], "c": 1})).unwrap();
    assert_eq!(Value::Object(flat), json!({"c": 1}));
}

#[test_case(json!([1, 2]) ; "array")]
#[test_case(json!("scalar") ; "string")]
#[test_case(json!(null) ; "null")]
fn test_non_object_records_are_record_errors(record: Value) {
    let err = flatten_record(&record).unwrap_err();
    assert!(err.is_record_error());
}
