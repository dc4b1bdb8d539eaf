//! Print output stage
//!
//! Dumps each record's top-level key/value pairs. Nested values render in
//! their native JSON form; strings render bare, without quotes.

use crate::error::Result;
use serde_json::Value;
use std::io::Write;
use tracing::warn;

/// Print every record to stdout. Returns the number printed.
pub fn print_records(records: &[Value]) -> Result<usize> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_records(&mut out, records)
}

/// Write every record's top-level fields to `out`. Returns the number
/// written; non-object records are logged and skipped.
pub fn write_records<W: Write>(out: &mut W, records: &[Value]) -> Result<usize> {
    let mut written = 0;

    for record in records {
        let Value::Object(fields) = record else {
            warn!("skipping non-object record");
            continue;
        };

        writeln!(out, "\nItem details:")?;
        for (key, value) in fields {
            writeln!(out, "{key}: {}", display_value(value))?;
        }
        written += 1;
    }

    Ok(written)
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
