//! # Paper Fetcher
//!
//! Search PubMed for a term, fetch the matching articles and pull out the
//! details that point at industry involvement: company affiliations, a
//! placeholder per non-academic author, and a corresponding-author email.
//!
//! ## Features
//!
//! - **Identifier Search**: one ESearch request per query
//! - **Detail Extraction**: one batched EFetch request, parsed article by article
//! - **Graceful Degradation**: network and parse failures become empty results
//!   plus a logged diagnostic; only caller mistakes surface as errors
//! - **CSV Export**: write and read back the extracted table
//!
//! ## Quick Start
//!
//! ```no_run
//! use paper_fetcher::PubMedClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PubMedClient::new();
//!
//!     let ids = client.fetch_ids("cancer immunotherapy", 10).await?.into_inner();
//!     let records = client.fetch_details(&ids).await?.into_inner();
//!
//!     for record in records.iter().filter(|r| r.has_company_affiliation()) {
//!         println!("{}: {}", record.pubmed_id, record.company_affiliations);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod pubmed;
pub mod retrieval;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use error::{PubMedError, Result};
pub use pubmed::{ArticleRecord, DEFAULT_MAX_RESULTS, PubMedClient};
pub use retrieval::Retrieval;
