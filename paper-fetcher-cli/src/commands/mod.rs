pub mod fetch;

use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use paper_fetcher::{ClientConfig, PubMedClient};

pub fn create_pubmed_client(
    email: Option<&str>,
    tool: &str,
    timeout: Duration,
) -> Result<PubMedClient> {
    let mut config = ClientConfig::new().with_tool(tool).with_timeout(timeout);

    if let Some(email) = email {
        config = config.with_email(email);
    }

    let client = PubMedClient::with_config(config);
    Ok(client)
}

/// Spinner on stderr for one network stage
pub fn stage_spinner(message: impl Into<String>) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .map_err(|e| anyhow::anyhow!(e))?,
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(message.into());
    Ok(spinner)
}
