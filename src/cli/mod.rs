//! CLI module
//!
//! Command-line interface for running exports.
//!
//! # Commands
//!
//! - `print` - Fetch all records and dump them to stdout
//! - `export` - Fetch all records and write them to a CSV file

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
