//! Delimited export of extracted records
//!
//! Records are written as comma-separated values with a header row of the
//! display column titles and no index column. Reading the file back yields
//! the same field values; every column is text.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::{debug, instrument};

use crate::error::Result;
use crate::pubmed::models::ArticleRecord;

/// Write records as CSV to any writer
///
/// The header row is written even when `records` is empty.
///
/// # Example
///
/// ```
/// use paper_fetcher::export::write_csv;
/// use paper_fetcher::ArticleRecord;
///
/// let records = vec![ArticleRecord {
///     pubmed_id: "12345".to_string(),
///     title: Some("A study".to_string()),
///     publication_date: "2020-Jan-01".to_string(),
///     non_academic_authors: String::new(),
///     company_affiliations: String::new(),
///     corresponding_email: "Not Available".to_string(),
/// }];
///
/// let mut out = Vec::new();
/// write_csv(&records, &mut out)?;
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("PubmedID,Title,Publication Date,"));
/// # Ok::<(), paper_fetcher::PubMedError>(())
/// ```
pub fn write_csv<W: Write>(records: &[ArticleRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(ArticleRecord::COLUMNS)?;
    for record in records {
        csv_writer.write_record(record.to_row())?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Write records as CSV to a file, replacing any existing content
#[instrument(skip(records), fields(path = %path.as_ref().display(), records = records.len()))]
pub fn write_csv_file<P: AsRef<Path>>(records: &[ArticleRecord], path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv(records, file)?;
    debug!("CSV written");
    Ok(())
}

/// Read records back from CSV produced by [`write_csv`]
///
/// An empty `Title` cell reads back as `None`.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<ArticleRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let records = csv_reader
        .deserialize::<ArticleRecord>()
        .collect::<std::result::Result<Vec<_>, csv::Error>>()?;

    Ok(records)
}

/// Read records from a CSV file
pub fn read_csv_file<P: AsRef<Path>>(path: P) -> Result<Vec<ArticleRecord>> {
    let file = File::open(path.as_ref())?;
    read_csv(file)
}
