//! Real PubMed API tests
//!
//! Only run with the `integration-tests` feature and `PUBMED_REAL_API_TESTS`
//! set, e.g. `PUBMED_REAL_API_TESTS=1 cargo test --features integration-tests`.

#[path = "../common/mod.rs"]
mod common;

#[cfg(feature = "integration-tests")]
mod integration_tests {
    use std::time::Duration;

    use tracing::info;
    use tracing_test::traced_test;

    use super::common::{create_real_api_client, should_run_real_api_tests};

    #[tokio::test]
    #[traced_test]
    async fn test_real_search_and_fetch() {
        if !should_run_real_api_tests() {
            info!("Skipping real API test (set PUBMED_REAL_API_TESTS=1 to enable)");
            return;
        }

        let client = create_real_api_client();

        let search = client.fetch_ids("cancer immunotherapy", 5).await.unwrap();
        assert!(search.is_complete(), "search degraded: {:?}", search.error());
        let ids = search.into_inner();
        assert!(!ids.is_empty());
        assert!(ids.len() <= 5);
        assert!(ids.iter().all(|id| id.chars().all(|c| c.is_ascii_digit())));

        // NCBI allows 3 requests per second without an API key
        tokio::time::sleep(Duration::from_millis(400)).await;

        let details = client.fetch_details(&ids).await.unwrap();
        assert!(details.is_complete(), "fetch degraded: {:?}", details.error());
        let records = details.into_inner();
        assert!(!records.is_empty());

        for record in &records {
            assert!(ids.contains(&record.pubmed_id));
            assert!(
                record.corresponding_email.contains('@')
                    || record.corresponding_email == "Not Available"
            );
            info!(
                pmid = %record.pubmed_id,
                date = %record.publication_date,
                companies = %record.company_affiliations,
                "Fetched record"
            );
        }
    }

    #[tokio::test]
    #[traced_test]
    async fn test_real_known_article() {
        if !should_run_real_api_tests() {
            return;
        }

        let client = create_real_api_client();
        let records = client
            .fetch_details(&["31978945"])
            .await
            .unwrap()
            .into_inner();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pubmed_id, "31978945");
        assert!(records[0].title.is_some());
        assert!(records[0].publication_date.starts_with("2020-"));
    }
}
