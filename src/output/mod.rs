//! Output stages
//!
//! Two consumers for a fetched result set, used one at a time:
//!
//! - [`print_records`] dumps each record's top-level fields to stdout
//! - [`CsvExporter`] flattens every record and writes a CSV file whose
//!   columns come from the first record
//!
//! Both treat a malformed individual record as reportable and skippable;
//! only whole-file failures abort.

mod print;
mod writer;

pub use print::{print_records, write_records};
pub use writer::{CsvExporter, ExportStats};
