mod details;
mod search;

pub use search::DEFAULT_MAX_RESULTS;

use crate::config::ClientConfig;
use crate::error::{PubMedError, Result};
use reqwest::{Client, Response};
use tracing::{debug, warn};

/// Client for the PubMed ESearch and EFetch endpoints
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    search_url: String,
    fetch_url: String,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a new PubMed client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use paper_fetcher::PubMedClient;
    ///
    /// let client = PubMedClient::new();
    /// ```
    pub fn new() -> Self {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new PubMed client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use paper_fetcher::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_base_url("http://127.0.0.1:8080")
    ///     .with_email("researcher@university.edu");
    ///
    /// let client = PubMedClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            search_url: config.effective_search_url(),
            fetch_url: config.effective_fetch_url(),
            config,
        }
    }

    /// Get a reference to the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Append request parameters and identification parameters to `endpoint`
    pub(crate) fn build_url(&self, endpoint: &str, params: &[(&str, String)]) -> String {
        let query: Vec<String> = params
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .chain(self.config.build_api_params())
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect();

        format!("{}?{}", endpoint, query.join("&"))
    }

    /// Issue a single GET and reject any non-success status
    pub(crate) async fn make_request(&self, url: &str) -> Result<Response> {
        debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(PubMedError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }
}

impl Default for PubMedClient {
    fn default() -> Self {
        Self::new()
    }
}
