//! Client configuration
//!
//! [`ClientConfig`] carries the endpoint URLs, request timeout and the
//! identification parameters NCBI asks every E-utilities caller to send.
//! Endpoints are plain configuration so tests can point the client at a
//! local mock server.

use std::time::Duration;

/// Default NCBI E-utilities base URL
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Default request timeout for both search and fetch calls
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default tool name reported to NCBI
pub const DEFAULT_TOOL: &str = "paper-fetcher";

const SEARCH_ENDPOINT: &str = "esearch.fcgi";
const FETCH_ENDPOINT: &str = "efetch.fcgi";

/// Configuration for [`PubMedClient`](crate::PubMedClient)
///
/// # Example
///
/// ```
/// use paper_fetcher::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_email("researcher@university.edu")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.timeout, Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL both endpoints hang off
    pub base_url: Option<String>,
    /// Full ESearch URL, overriding the one derived from `base_url`
    pub search_url: Option<String>,
    /// Full EFetch URL, overriding the one derived from `base_url`
    pub fetch_url: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
    /// Contact email sent with each request
    pub email: Option<String>,
    /// Tool name sent with each request
    pub tool: Option<String>,
    /// Custom User-Agent header
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a configuration with NCBI defaults
    pub fn new() -> Self {
        Self {
            base_url: None,
            search_url: None,
            fetch_url: None,
            timeout: DEFAULT_TIMEOUT,
            email: None,
            tool: None,
            user_agent: None,
        }
    }

    /// Point both endpoints at a different host, e.g. a mock server
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the full ESearch endpoint URL
    pub fn with_search_url<S: Into<String>>(mut self, search_url: S) -> Self {
        self.search_url = Some(search_url.into());
        self
    }

    /// Override the full EFetch endpoint URL
    pub fn with_fetch_url<S: Into<String>>(mut self, fetch_url: S) -> Self {
        self.fetch_url = Some(fetch_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the contact email NCBI can use to reach the operator
    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the tool name reported to NCBI
    pub fn with_tool<S: Into<String>>(mut self, tool: S) -> Self {
        self.tool = Some(tool.into());
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// ESearch URL after applying overrides
    pub fn effective_search_url(&self) -> String {
        match &self.search_url {
            Some(url) => url.clone(),
            None => self.endpoint(SEARCH_ENDPOINT),
        }
    }

    /// EFetch URL after applying overrides
    pub fn effective_fetch_url(&self) -> String {
        match &self.fetch_url {
            Some(url) => url.clone(),
            None => self.endpoint(FETCH_ENDPOINT),
        }
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("paper-fetcher/{}", env!("CARGO_PKG_VERSION")))
    }

    pub fn effective_tool(&self) -> &str {
        self.tool.as_deref().unwrap_or(DEFAULT_TOOL)
    }

    /// Identification parameters appended to every request
    pub fn build_api_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(email) = &self.email {
            params.push(("email".to_string(), email.clone()));
        }
        params.push(("tool".to_string(), self.effective_tool().to_string()));

        params
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.effective_base_url().trim_end_matches('/'), name)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
