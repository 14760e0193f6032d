use tracing::{error, info, instrument, warn};

use super::PubMedClient;
use crate::error::{PubMedError, Result};
use crate::pubmed::responses::ESearchResult;
use crate::retrieval::Retrieval;

/// Number of ids requested when the caller does not say otherwise
pub const DEFAULT_MAX_RESULTS: usize = 10;

impl PubMedClient {
    /// Search PubMed and return the matching article ids
    ///
    /// Issues exactly one ESearch request. Transport failures, error statuses
    /// and undecodable bodies are logged and returned as
    /// [`Retrieval::Degraded`], which reads as an empty id list.
    ///
    /// # Arguments
    ///
    /// * `query` - Free-text search term
    /// * `max_results` - Maximum number of ids to return
    ///
    /// # Errors
    ///
    /// * `PubMedError::Validation` - If `query` is empty or whitespace; no request is made
    ///
    /// # Example
    ///
    /// ```no_run
    /// use paper_fetcher::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     let ids = client.fetch_ids("cancer research", 10).await?.into_inner();
    ///     println!("Found {} papers.", ids.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(query = %query, max_results = max_results))]
    pub async fn fetch_ids(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Retrieval<Vec<String>>> {
        if query.trim().is_empty() {
            warn!("Empty query provided");
            return Err(PubMedError::Validation("Query cannot be empty.".to_string()));
        }

        let url = self.build_url(
            &self.search_url,
            &[
                ("db", "pubmed".to_string()),
                ("term", query.to_string()),
                ("retmax", max_results.to_string()),
                ("retmode", "json".to_string()),
            ],
        );

        match self.request_ids(&url).await {
            Ok(ids) => {
                info!(results_found = ids.len(), "Search completed successfully");
                Ok(Retrieval::Complete(ids))
            }
            Err(e) => {
                error!(error = %e, reason = e.reason(), "Error fetching papers");
                Ok(Retrieval::Degraded(e))
            }
        }
    }

    /// [`fetch_ids`](Self::fetch_ids) with [`DEFAULT_MAX_RESULTS`]
    pub async fn fetch_ids_default(&self, query: &str) -> Result<Retrieval<Vec<String>>> {
        self.fetch_ids(query, DEFAULT_MAX_RESULTS).await
    }

    async fn request_ids(&self, url: &str) -> Result<Vec<String>> {
        let response = self.make_request(url).await?;
        let body = response.text().await?;
        let search_result: ESearchResult = serde_json::from_str(&body)?;

        // NCBI sometimes answers 200 OK with an ERROR field and no ids
        if let Some(message) = &search_result.esearchresult.error {
            warn!(error = %message, "ESearch reported an error");
        }

        Ok(search_result.esearchresult.idlist)
    }
}
