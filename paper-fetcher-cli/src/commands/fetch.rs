use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use paper_fetcher::export::write_csv_file;
use paper_fetcher::{DEFAULT_MAX_RESULTS, PubMedClient};
use tracing::{debug, warn};

use super::{create_pubmed_client, stage_spinner};
use crate::output::render_table;

#[derive(Args, Debug)]
pub struct Fetch {
    /// PubMed search query (free text)
    #[arg(value_name = "QUERY")]
    query: String,

    /// Save results to a CSV file instead of printing a table
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Echo the query and enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Maximum number of papers to fetch
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_RESULTS)]
    max_results: usize,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "10")]
    timeout: u64,
}

impl Fetch {
    pub async fn execute_with_config(&self, email: Option<&str>, tool: &str) -> Result<()> {
        let client = create_pubmed_client(email, tool, Duration::from_secs(self.timeout))?;
        self.run(&client).await
    }

    async fn run(&self, client: &PubMedClient) -> Result<()> {
        if self.debug {
            println!("Query: {}", self.query);
        }

        let spinner = stage_spinner("Searching PubMed...")?;
        let search = client.fetch_ids(&self.query, self.max_results).await;
        spinner.finish_and_clear();

        let search = search?;
        if search.is_degraded() {
            warn!("Search failed, continuing with no papers");
        }
        let ids = search.into_inner();
        println!("Found {} papers.", ids.len());

        let spinner = stage_spinner(format!("Fetching details for {} papers...", ids.len()))?;
        let details = client.fetch_details(&ids).await;
        spinner.finish_and_clear();

        let records = details?.into_inner();
        debug!(records = records.len(), "Extracted records");

        match &self.file {
            Some(path) => {
                write_csv_file(&records, path)
                    .with_context(|| format!("Failed to write results to {}", path.display()))?;
                println!("Results saved to {}", path.display());
            }
            None => println!("{}", render_table(&records)),
        }

        Ok(())
    }
}
