use comfy_table::{Attribute, Cell, ContentArrangement, Table, presets::UTF8_FULL};
use paper_fetcher::ArticleRecord;

const MAX_CELL_CHARS: usize = 60;

/// Terminal table with one row per record, columns as in the CSV export
pub fn render_table(records: &[ArticleRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            ArticleRecord::COLUMNS
                .iter()
                .map(|title| Cell::new(title).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        );

    for record in records {
        table.add_row(
            record
                .to_row()
                .iter()
                .map(|value| Cell::new(truncate(value, MAX_CELL_CHARS)))
                .collect::<Vec<_>>(),
        );
    }

    table
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() > max_chars {
        let kept: String = value.chars().take(max_chars - 3).collect();
        format!("{}...", kept)
    } else {
        value.to_string()
    }
}
