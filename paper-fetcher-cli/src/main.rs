use anyhow::Result;
use clap::Parser;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;
mod output;

#[derive(Parser, Debug)]
#[command(
    name = "fetch-papers",
    version,
    about = "Fetch research papers from PubMed with industry-affiliated authors",
    long_about = "Search PubMed for a query, fetch the matching articles and list \
                  company affiliations and corresponding-author emails as a table or CSV file"
)]
struct Cli {
    #[command(flatten)]
    fetch: commands::fetch::Fetch,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Email for NCBI requests (recommended)
    #[arg(long, env = "NCBI_EMAIL")]
    email: Option<String>,

    /// Tool name for NCBI requests
    #[arg(long, env = "NCBI_TOOL", default_value = "paper-fetcher")]
    tool: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with indicatif layer for progress spinners
    let filter = if cli.verbose || cli.fetch.debug {
        "debug"
    } else {
        "info"
    };

    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(indicatif_layer.get_stderr_writer()),
        )
        .with(indicatif_layer)
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let email = cli.email.as_deref();
    let tool = &cli.tool;
    cli.fetch.execute_with_config(email, tool).await
}
