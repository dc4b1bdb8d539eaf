//! Record flattening
//!
//! Converts one nested record into a single-level mapping whose keys encode
//! the path through the original nesting. Objects contribute their key name,
//! sequences contribute the element index, and segments join with `_`:
//!
//! ```text
//! {"a": {"b": 1}}          -> {"a_b": 1}
//! {"a": [1, 2]}            -> {"a_0": 1, "a_1": 2}
//! {"a": [{"b": 1}]}        -> {"a_0_b": 1}
//! ```
//!
//! Scalars, null included, land unchanged. Key collisions (a field name that
//! already contains the separator) silently overwrite, last write wins.

use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// Path segment separator in flattened keys
pub const SEPARATOR: char = '_';

/// Flatten one record into a single-level mapping.
///
/// The input must be a JSON object; anything else is a per-record error the
/// caller may skip. Key order follows depth-first traversal of the input, so
/// a CSV header derived from the first record tracks the upstream field
/// order.
pub fn flatten_record(record: &Value) -> Result<Map<String, Value>> {
    let Value::Object(fields) = record else {
        return Err(Error::record(format!(
            "expected an object, got {}",
            type_name(record)
        )));
    };

    let mut flat = Map::new();
    for (key, value) in fields {
        flatten_into(&mut flat, key.clone(), value);
    }
    Ok(flat)
}

fn flatten_into(out: &mut Map<String, Value>, key: String, value: &Value) {
    match value {
        Value::Object(fields) => {
            for (child_key, child) in fields {
                flatten_into(out, format!("{key}{SEPARATOR}{child_key}"), child);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_into(out, format!("{key}{SEPARATOR}{index}"), item);
            }
        }
        scalar => {
            out.insert(key, scalar.clone());
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests;
