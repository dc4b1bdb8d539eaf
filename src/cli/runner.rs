//! CLI runner - executes commands
//!
//! Resolves the auth token from the environment before building any HTTP
//! state, runs the pagination loop to completion, then hands the buffered
//! result set to the requested output stage.

use crate::cli::commands::{Cli, Commands};
use crate::config::{auth_token_from_env, ExportConfig};
use crate::error::Result;
use crate::output::{print_records, CsvExporter};
use crate::pagination::Paginator;
use crate::query::QueryTemplate;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.build_config()?;

        match &self.cli.command {
            Commands::Print => self.print(config).await,
            Commands::Export { output } => self.export(config, output).await,
        }
    }

    /// Build the export config from flags and the environment
    fn build_config(&self) -> Result<ExportConfig> {
        // Token first: a missing credential must fail before any request
        let auth_token = auth_token_from_env()?;

        let mut builder = ExportConfig::builder().auth_token(auth_token);

        if let Some(query) = self.load_query()? {
            builder = builder.query(query);
        }
        if let Some(url) = &self.cli.base_url {
            builder = builder.base_url(url);
        }
        if let Some(size) = self.cli.page_size {
            builder = builder.page_size(size);
        }
        if let Some(secs) = self.cli.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Parse the query from the inline flag or a file, if given
    fn load_query(&self) -> Result<Option<QueryTemplate>> {
        if let Some(text) = &self.cli.query {
            return QueryTemplate::parse(text).map(Some);
        }
        if let Some(path) = &self.cli.query_file {
            let text = fs::read_to_string(path)?;
            return QueryTemplate::parse(&text).map(Some);
        }
        Ok(None)
    }

    async fn print(&self, config: ExportConfig) -> Result<()> {
        let records = self.fetch(config).await?;
        print_records(&records)?;
        Ok(())
    }

    async fn export(&self, config: ExportConfig, output: &Path) -> Result<()> {
        let records = self.fetch(config).await?;
        let stats = CsvExporter::new(output).export(&records)?;

        println!(
            "Wrote {} records to {} ({} skipped)",
            stats.written,
            output.display(),
            stats.skipped
        );
        Ok(())
    }

    async fn fetch(&self, config: ExportConfig) -> Result<Vec<Value>> {
        let mut paginator = Paginator::new(config);
        paginator.fetch_all().await
    }
}
