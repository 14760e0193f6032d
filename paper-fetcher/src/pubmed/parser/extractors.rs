//! Field extraction from a parsed `PubmedArticle` subtree
//!
//! Every extractor is total: a missing element yields the documented default
//! rather than an error.

use crate::pubmed::models::{ArticleRecord, NOT_AVAILABLE, UNKNOWN, UNKNOWN_AUTHOR};

use super::element::XmlElement;

/// Lowercase markers that classify an affiliation as a company
pub const COMPANY_KEYWORDS: [&str; 5] = ["pharma", "biotech", "inc.", "ltd.", "gmbh"];

const LIST_SEPARATOR: &str = ", ";

/// Build the output record for one article
pub(crate) fn extract_record(article: &XmlElement) -> ArticleRecord {
    let (non_academic_authors, company_affiliations) = extract_affiliations(article);

    ArticleRecord {
        pubmed_id: article.find_text("PMID").unwrap_or_default().to_string(),
        title: article.find_text("ArticleTitle").map(str::to_string),
        publication_date: extract_publication_date(article),
        non_academic_authors,
        company_affiliations,
        corresponding_email: extract_corresponding_email(article),
    }
}

/// `YEAR-MONTH-DAY` from the first `PubDate` in the article
///
/// A missing `Year`, `Month` or `Day` child becomes `Unknown`; one that is
/// present but empty contributes its empty text. Without any `PubDate` the
/// whole value is a single `Unknown`.
pub(crate) fn extract_publication_date(article: &XmlElement) -> String {
    match article.find("PubDate") {
        Some(pub_date) => {
            let part = |name: &str| pub_date.child_text(name).unwrap_or(UNKNOWN);
            format!("{}-{}-{}", part("Year"), part("Month"), part("Day"))
        }
        None => UNKNOWN.to_string(),
    }
}

/// Whether an affiliation text names a company
pub fn is_company_affiliation(text: &str) -> bool {
    let lower = text.to_lowercase();
    COMPANY_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}

/// Non-academic author placeholders and company affiliations, each joined
///
/// Affiliation text cannot be tied back to a specific author in this data
/// shape, so each company affiliation contributes one [`UNKNOWN_AUTHOR`].
pub(crate) fn extract_affiliations(article: &XmlElement) -> (String, String) {
    let mut authors: Vec<&str> = Vec::new();
    let mut companies: Vec<&str> = Vec::new();

    for info in article.find_all("AffiliationInfo") {
        let text = info.child_text("Affiliation").unwrap_or_default();
        if is_company_affiliation(text) {
            companies.push(text);
            authors.push(UNKNOWN_AUTHOR);
        }
    }

    (authors.join(LIST_SEPARATOR), companies.join(LIST_SEPARATOR))
}

/// First affiliation text containing `@`, or `Not Available`
pub(crate) fn extract_corresponding_email(article: &XmlElement) -> String {
    article
        .find_all("AffiliationInfo")
        .flat_map(|info| info.children_named("Affiliation"))
        .filter_map(|affiliation| affiliation.text.as_deref())
        .find(|text| text.contains('@'))
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}
