use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("spreadsheet encoding failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("document encoding failed: {0}")]
    Pdf(#[from] printpdf::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;
