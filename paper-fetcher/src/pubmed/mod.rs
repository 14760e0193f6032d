//! PubMed search and detail extraction
//!
//! This module talks to the E-utilities ESearch and EFetch endpoints and turns
//! their responses into [`ArticleRecord`]s.

pub mod client;
pub mod models;
pub mod parser;
pub(crate) mod responses;

// Re-export public types
pub use client::{DEFAULT_MAX_RESULTS, PubMedClient};
pub use models::{ArticleRecord, NOT_AVAILABLE, UNKNOWN, UNKNOWN_AUTHOR};
pub use parser::{COMPANY_KEYWORDS, is_company_affiliation, parse_records_from_xml};
