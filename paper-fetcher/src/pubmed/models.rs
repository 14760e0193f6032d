use serde::{Deserialize, Serialize};

/// Placeholder emitted once per company affiliation in place of an author name
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Value used for any date part (or the whole date) that is missing
pub const UNKNOWN: &str = "Unknown";

/// Value used when no affiliation carries an email address
pub const NOT_AVAILABLE: &str = "Not Available";

/// One row of output: the fields extracted from a single `PubmedArticle`
///
/// Serialized column names match the table headers used on output.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    /// PubMed ID, empty if the article carried none
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,
    /// Article title
    #[serde(rename = "Title")]
    pub title: Option<String>,
    /// `YEAR-MONTH-DAY`, with `Unknown` standing in for missing parts
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    /// One placeholder per company affiliation, joined with `", "`
    #[serde(rename = "Non-academic Authors")]
    pub non_academic_authors: String,
    /// Raw company affiliation texts, joined with `", "`
    #[serde(rename = "Company Affiliations")]
    pub company_affiliations: String,
    /// First affiliation text containing `@`, or `Not Available`
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_email: String,
}

impl ArticleRecord {
    /// Column titles in output order
    pub const COLUMNS: [&'static str; 6] = [
        "PubmedID",
        "Title",
        "Publication Date",
        "Non-academic Authors",
        "Company Affiliations",
        "Corresponding Author Email",
    ];

    /// Cell values in the same order as [`ArticleRecord::COLUMNS`]
    pub fn to_row(&self) -> [String; 6] {
        [
            self.pubmed_id.clone(),
            self.title.clone().unwrap_or_default(),
            self.publication_date.clone(),
            self.non_academic_authors.clone(),
            self.company_affiliations.clone(),
            self.corresponding_email.clone(),
        ]
    }

    /// Whether any affiliation was classified as a company
    pub fn has_company_affiliation(&self) -> bool {
        !self.company_affiliations.is_empty()
    }
}
