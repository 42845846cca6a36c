//! Tabular export of DECP records.
//!
//! A collection of typed records goes through two stages: row formatting
//! (one [`TableRecord`] implementation per record kind, producing
//! display-formatted cells) and encoding (CSV, PDF or XLSX). All three
//! encoders consume the same rows, so a record exports with identical
//! cell semantics everywhere; the only sanctioned difference is that the
//! spreadsheet keeps numeric cells numeric.

pub mod csv;
pub mod error;
pub mod pdf;
pub mod records;
pub mod table;
pub mod xlsx;

use std::path::{Path, PathBuf};

pub use crate::csv::render_csv;
pub use crate::error::{ExportError, Result};
pub use crate::pdf::render_pdf;
pub use crate::table::{Cell, Column, LINE_SEPARATOR, TableRecord};
pub use crate::xlsx::render_xlsx;

/// Output encodings of the export pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Pdf,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Pdf => "pdf",
            Self::Xlsx => "xlsx",
        }
    }
}

/// Encode `records` in `format` and save the artifact as
/// `<file_name>.<ext>` under `output_dir`, creating the directory when
/// needed. `title` is only rendered by the document encoder. Returns the
/// written path.
pub fn export_to_file<R: TableRecord>(
    records: &[R],
    format: ExportFormat,
    title: &str,
    output_dir: &Path,
    file_name: &str,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(format!("{file_name}.{}", format.extension()));

    let bytes = match format {
        ExportFormat::Csv => render_csv(records)?.into_bytes(),
        ExportFormat::Pdf => render_pdf(records, title)?,
        ExportFormat::Xlsx => render_xlsx(records)?,
    };
    std::fs::write(&path, bytes)?;
    tracing::info!(path = %path.display(), rows = records.len(), "export written");
    Ok(path)
}
