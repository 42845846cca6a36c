//! Delimited-text encoder.
//!
//! Matches what the dashboard hands to the browser: every field quoted,
//! embedded quotes doubled, embedded newlines stripped so multi-valued
//! cells stay on one physical line.

use std::io;

use crate::error::Result;
use crate::table::TableRecord;

/// Render `records` as UTF-8, comma-delimited, always-quoted CSV with
/// one header line. An empty collection yields the header line alone.
pub fn render_csv<R: TableRecord>(records: &[R]) -> Result<String> {
    let columns = R::columns();
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(columns.iter().map(|column| column.flat_label()))?;
    for record in records {
        let row = record.to_row();
        debug_assert_eq!(row.len(), columns.len());
        writer.write_record(row.iter().map(|cell| flatten(&cell.to_text())))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| io::Error::other(error.to_string()))?;
    String::from_utf8(bytes)
        .map_err(|error| io::Error::other(error.to_string()).into())
}

/// Newlines never survive inside a delimited cell; the joining space of
/// multi-valued cells does.
fn flatten(cell: &str) -> String {
    cell.replace(['\n', '\r'], "")
}
