// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # sysql-export
//!
//! Export Sysdig SysQL vulnerability-graph query results to CSV or stdout.
//!
//! ## Features
//!
//! - **Offset pagination**: walks the query endpoint page by page until the
//!   result set is exhausted
//! - **Structured query templates**: the `OFFSET` clause is substituted
//!   explicitly, never by blind text replacement
//! - **Record flattening**: nested JSON records become single-level rows
//!   suitable for CSV
//! - **Two output modes**: dump records to stdout or write a CSV file
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sysql_export::{ExportConfig, Paginator, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Reads SYSDIG_AUTH_TOKEN from the environment
//!     let config = ExportConfig::from_env()?;
//!
//!     let mut paginator = Paginator::new(config);
//!     let records = paginator.fetch_all().await?;
//!
//!     let stats = sysql_export::output::CsvExporter::new("output.csv").export(&records)?;
//!     println!("Wrote {} records", stats.written);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // enum variant fields are self-describing

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the exporter
pub mod error;

/// Export configuration
pub mod config;

/// SysQL query templates with explicit offset substitution
pub mod query;

/// HTTP client
pub mod http;

/// Offset pagination loop
pub mod pagination;

/// Nested-record flattening
pub mod flatten;

/// Output stages (stdout dump, CSV)
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ExportConfig;
pub use error::{Error, Result};
pub use pagination::Paginator;
pub use query::QueryTemplate;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
