//! PubMed EFetch XML parser
//!
//! Turns an EFetch `PubmedArticleSet` document into [`ArticleRecord`]s.
//!
//! # Module Organization
//!
//! - `preprocessing` - XML cleaning before parsing
//! - `element` - reader-driven element tree for one article
//! - `extractors` - date, affiliation and email extraction
//!
//! Articles are read one at a time. An article whose text cannot be decoded
//! is logged and skipped; the rest of the document is still parsed. A document
//! that is not well-formed fails as a whole.

mod element;
mod extractors;
mod preprocessing;

pub use extractors::{COMPANY_KEYWORDS, is_company_affiliation};

use quick_xml::events::Event;
use tracing::{debug, instrument, warn};

use crate::error::{PubMedError, Result};
use crate::pubmed::models::ArticleRecord;
use element::{ReadError, make_reader, read_element};
use extractors::extract_record;
use preprocessing::strip_inline_html_tags;

const ARTICLE_TAG: &[u8] = b"PubmedArticle";

/// Parse every `PubmedArticle` in an EFetch XML response
///
/// # Returns
///
/// Records in document order. Articles that fail to parse are skipped.
///
/// # Errors
///
/// Returns [`PubMedError::XmlError`] if the document is not well-formed.
///
/// # Example
///
/// ```
/// use paper_fetcher::pubmed::parse_records_from_xml;
///
/// let xml = r#"<?xml version="1.0"?>
/// <PubmedArticleSet>
///   <PubmedArticle>
///     <MedlineCitation>
///       <PMID>12345678</PMID>
///       <Article>
///         <ArticleTitle>Example Article</ArticleTitle>
///       </Article>
///     </MedlineCitation>
///   </PubmedArticle>
/// </PubmedArticleSet>"#;
///
/// let records = parse_records_from_xml(xml)?;
/// assert_eq!(records[0].pubmed_id, "12345678");
/// assert_eq!(records[0].title.as_deref(), Some("Example Article"));
/// # Ok::<(), paper_fetcher::PubMedError>(())
/// ```
#[instrument(skip(xml), fields(xml_size = xml.len()))]
pub fn parse_records_from_xml(xml: &str) -> Result<Vec<ArticleRecord>> {
    let cleaned_xml = strip_inline_html_tags(xml);
    let mut reader = make_reader(&cleaned_xml);

    let mut records = Vec::new();
    let mut position = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == ARTICLE_TAG => {
                position += 1;
                match read_element(&mut reader, &e) {
                    Ok(article) => records.push(extract_record(&article)),
                    Err(ReadError::Content(message)) => {
                        warn!(position, error = %message, "Failed to parse article, skipping");
                    }
                    Err(ReadError::Syntax(message)) => {
                        return Err(PubMedError::XmlError(message));
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(PubMedError::XmlError(e.to_string())),
            _ => {}
        }
    }

    debug!(
        articles = position,
        parsed = records.len(),
        "Parsed EFetch document"
    );

    Ok(records)
}
