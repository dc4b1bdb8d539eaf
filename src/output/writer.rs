//! CSV file writer
//!
//! Flattens every record and writes one CSV row per record. Column headers
//! come from the flattened first record; later records missing a column get
//! an empty cell, and keys absent from the header are dropped. That header
//! fixation is a documented limitation of the format, not something the
//! writer tries to reconcile.

use crate::error::{Error, Result};
use crate::flatten::flatten_record;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Statistics for one CSV export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportStats {
    /// Rows written, header excluded
    pub written: usize,
    /// Records skipped because they could not be flattened or written
    pub skipped: usize,
}

/// Writes a result set to a CSV file
#[derive(Debug, Clone)]
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    /// Create an exporter targeting the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the output path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flatten and write every record.
    ///
    /// Fails up front on an empty result set, since there is no record to
    /// derive the header from. A record that cannot be flattened or written
    /// is logged and skipped; the export continues.
    pub fn export(&self, records: &[Value]) -> Result<ExportStats> {
        let first = records.first().ok_or_else(|| {
            Error::output("result set is empty, cannot derive a CSV header")
        })?;

        let columns: Vec<String> = flatten_record(first)?.keys().cloned().collect();

        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(&columns)?;

        let mut stats = ExportStats::default();
        for record in records {
            match self.write_row(&mut writer, &columns, record) {
                Ok(()) => stats.written += 1,
                Err(e) => {
                    warn!(error = %e, "skipping record");
                    stats.skipped += 1;
                }
            }
        }

        writer.flush()?;
        Ok(stats)
    }

    fn write_row<W: std::io::Write>(
        &self,
        writer: &mut csv::Writer<W>,
        columns: &[String],
        record: &Value,
    ) -> Result<()> {
        let flat = flatten_record(record)?;
        let row: Vec<String> = columns
            .iter()
            .map(|column| flat.get(column).map(cell_text).unwrap_or_default())
            .collect();
        writer.write_record(&row)?;
        Ok(())
    }
}

/// Render one flattened value as a CSV cell. Null becomes an empty cell;
/// strings render bare.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
