//! XML preprocessing utilities for the EFetch parser
//!
//! This module handles cleaning of XML content before parsing.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// Strip inline HTML-like formatting tags from XML content
///
/// Tags like `<i>`, `<sup>`, `<sub>` and `<b>` show up inside `ArticleTitle`
/// and `Affiliation`. Removing them keeps the text of those elements in one
/// contiguous run.
///
/// # Example
///
/// ```ignore
/// let xml = "<ArticleTitle>CO<sup>2</sup> levels</ArticleTitle>";
/// let cleaned = strip_inline_html_tags(xml);
/// assert_eq!(cleaned, "<ArticleTitle>CO2 levels</ArticleTitle>");
/// ```
pub(crate) fn strip_inline_html_tags(xml: &str) -> String {
    static INLINE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = INLINE_TAG_REGEX.get_or_init(|| {
        Regex::new(r"</?(?:i|b|u|sup|sub|em|strong|italic|bold)>")
            .expect("Failed to compile inline tag regex")
    });

    let cleaned = re.replace_all(xml, "");

    if cleaned.len() != xml.len() {
        debug!(
            original_bytes = xml.len(),
            cleaned_bytes = cleaned.len(),
            "Stripped inline HTML tags"
        );
    }

    cleaned.into_owned()
}
