use tracing::{error, info, instrument};

use super::PubMedClient;
use crate::error::{PubMedError, Result};
use crate::pubmed::models::ArticleRecord;
use crate::pubmed::parser::parse_records_from_xml;
use crate::retrieval::Retrieval;

impl PubMedClient {
    /// Fetch article metadata for a batch of ids and extract one record per article
    ///
    /// All ids go out in a single comma-separated EFetch request. Records come
    /// back in the order the service returned the articles; articles that fail
    /// to parse are skipped. Transport failures, error statuses and malformed
    /// documents are logged and returned as [`Retrieval::Degraded`].
    ///
    /// # Errors
    ///
    /// * `PubMedError::Validation` - If `ids` is empty; no request is made
    ///
    /// # Example
    ///
    /// ```no_run
    /// use paper_fetcher::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     let records = client
    ///         .fetch_details(&["31978945", "33515491"])
    ///         .await?
    ///         .into_inner();
    ///     for record in &records {
    ///         println!("{}: {}", record.pubmed_id, record.company_affiliations);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self, ids), fields(ids_count = ids.len()))]
    pub async fn fetch_details<S: AsRef<str>>(
        &self,
        ids: &[S],
    ) -> Result<Retrieval<Vec<ArticleRecord>>> {
        if ids.is_empty() {
            return Err(PubMedError::Validation(
                "No paper IDs provided to fetch details.".to_string(),
            ));
        }

        let id_list = ids
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(",");

        let url = self.build_url(
            &self.fetch_url,
            &[
                ("db", "pubmed".to_string()),
                ("id", id_list),
                ("retmode", "xml".to_string()),
            ],
        );

        match self.request_records(&url).await {
            Ok(records) => {
                info!(
                    requested = ids.len(),
                    parsed = records.len(),
                    "Fetch completed"
                );
                Ok(Retrieval::Complete(records))
            }
            Err(e) => {
                error!(error = %e, reason = e.reason(), "Error fetching paper details");
                Ok(Retrieval::Degraded(e))
            }
        }
    }

    async fn request_records(&self, url: &str) -> Result<Vec<ArticleRecord>> {
        let response = self.make_request(url).await?;
        let xml_text = response.text().await?;

        parse_records_from_xml(&xml_text)
    }
}
