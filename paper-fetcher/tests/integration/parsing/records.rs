//! Record extraction tests against a realistic EFetch document

use paper_fetcher::ArticleRecord;
use paper_fetcher::pubmed::parse_records_from_xml;
use rstest::{fixture, rstest};
use tracing_test::traced_test;

const MIXED_AFFILIATIONS_XML: &str = include_str!("../test_data/efetch_mixed_affiliations.xml");

#[fixture]
fn records() -> Vec<ArticleRecord> {
    parse_records_from_xml(MIXED_AFFILIATIONS_XML).expect("fixture should parse")
}

#[rstest]
fn test_one_record_per_article_in_document_order(records: Vec<ArticleRecord>) {
    let pmids: Vec<&str> = records.iter().map(|r| r.pubmed_id.as_str()).collect();
    assert_eq!(pmids, vec!["36912345", "31000001", "38000042"]);
}

#[rstest]
fn test_industry_article(records: Vec<ArticleRecord>) {
    let record = &records[0];

    assert_eq!(
        record.title.as_deref(),
        Some("Targeting KRAS G12C in non-small cell lung cancer & beyond.")
    );
    assert_eq!(record.publication_date, "2020-Unknown-15");
    assert_eq!(record.non_academic_authors, "Unknown Author, Unknown Author");
    assert_eq!(
        record.company_affiliations,
        "XYZ Biotech Inc., Boston, MA, USA., \
         Boehringer Ingelheim Pharma GmbH & Co. KG, Biberach, Germany. \
         anna.mueller@boehringer.example.com."
    );
    assert_eq!(
        record.corresponding_email,
        "Boehringer Ingelheim Pharma GmbH & Co. KG, Biberach, Germany. \
         anna.mueller@boehringer.example.com."
    );
    assert!(record.has_company_affiliation());
}

#[rstest]
fn test_academic_article(records: Vec<ArticleRecord>) {
    let record = &records[1];

    assert_eq!(
        record.title.as_deref(),
        Some("Outcomes of a university-led screening program.")
    );
    // MedlineDate only: PubDate exists but has none of the parts
    assert_eq!(record.publication_date, "Unknown-Unknown-Unknown");
    assert_eq!(record.non_academic_authors, "");
    assert_eq!(record.company_affiliations, "");
    assert_eq!(
        record.corresponding_email,
        "School of Public Health, Peking University, Beijing, China. wei.chen@pku.example.edu."
    );
    assert!(!record.has_company_affiliation());
}

#[rstest]
fn test_article_without_title(records: Vec<ArticleRecord>) {
    let record = &records[2];

    assert_eq!(record.title, None);
    assert_eq!(record.publication_date, "2024-Nov-02");
    assert_eq!(record.non_academic_authors, "Unknown Author");
    assert_eq!(record.company_affiliations, "Genomics Ltd., Cambridge, UK.");
    assert_eq!(record.corresponding_email, "Not Available");
}

#[rstest]
fn test_placeholders_only_with_company_affiliations(records: Vec<ArticleRecord>) {
    for record in &records {
        assert_eq!(
            record.non_academic_authors.is_empty(),
            record.company_affiliations.is_empty(),
            "pmid {}",
            record.pubmed_id
        );
    }
}

#[rstest]
fn test_email_value_contains_at_or_is_not_available(records: Vec<ArticleRecord>) {
    for record in &records {
        assert!(
            record.corresponding_email.contains('@')
                || record.corresponding_email == "Not Available",
            "pmid {}",
            record.pubmed_id
        );
    }
}

#[test]
#[traced_test]
fn test_affiliation_without_text_is_ignored() {
    let xml = r#"<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation>
      <PMID>7</PMID>
      <Article>
        <ArticleTitle>Sparse</ArticleTitle>
        <AuthorList>
          <Author>
            <AffiliationInfo><Affiliation/></AffiliationInfo>
            <AffiliationInfo><Identifier Source="ROR">https://ror.org/000</Identifier></AffiliationInfo>
          </Author>
        </AuthorList>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
</PubmedArticleSet>"#;

    let records = parse_records_from_xml(xml).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].non_academic_authors, "");
    assert_eq!(records[0].company_affiliations, "");
    assert_eq!(records[0].corresponding_email, "Not Available");
    assert_eq!(records[0].publication_date, "Unknown");
}

#[test]
#[traced_test]
fn test_field_text_is_kept_as_written() {
    let xml = r#"<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation>
      <PMID>8</PMID>
      <Article>
        <Journal>
          <JournalIssue>
            <PubDate><Year>2020</Year><Month/><Day>15</Day></PubDate>
          </JournalIssue>
        </Journal>
        <ArticleTitle> Padded title </ArticleTitle>
        <AuthorList>
          <Author>
            <AffiliationInfo><Affiliation>  Acme Pharma  </Affiliation></AffiliationInfo>
          </Author>
        </AuthorList>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
</PubmedArticleSet>"#;

    let records = parse_records_from_xml(xml).unwrap();
    assert_eq!(records[0].pubmed_id, "8");
    assert_eq!(records[0].title.as_deref(), Some(" Padded title "));
    // Month is present but empty, so it is not replaced by Unknown
    assert_eq!(records[0].publication_date, "2020--15");
    assert_eq!(records[0].company_affiliations, "  Acme Pharma  ");
    assert_eq!(records[0].non_academic_authors, "Unknown Author");
}
