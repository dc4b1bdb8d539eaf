//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Export Sysdig SysQL query results
#[derive(Parser, Debug)]
#[command(name = "sysql-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// SysQL query endpoint URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Records per page
    #[arg(long, global = true)]
    pub page_size: Option<u32>,

    /// Inline SysQL query (must end with an OFFSET clause)
    #[arg(short, long, global = true)]
    pub query: Option<String>,

    /// File containing the SysQL query
    #[arg(long, global = true, conflicts_with = "query")]
    pub query_file: Option<PathBuf>,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch all records and print them to stdout
    Print,

    /// Fetch all records and write them to a CSV file
    Export {
        /// Output CSV path
        #[arg(short, long, default_value = "output.csv")]
        output: PathBuf,
    },
}
