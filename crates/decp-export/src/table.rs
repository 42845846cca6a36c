//! Cell values, column specifications and the per-record-kind dispatch
//! the three encoders share.

use std::fmt;

/// Token joining multi-valued cells (several titulaires, CPV code and
/// label). The paginated-document encoder renders it as a line break;
/// the delimited-text encoder strips the newline and keeps the space.
pub const LINE_SEPARATOR: &str = " \n";

/// One display-formatted cell.
///
/// Numeric cells stay numeric so the spreadsheet encoder can emit real
/// numbers; the text encoders render them with plain `Display`
/// stringification (no trailing `.0`, no locale decoration). Locale
/// currency formatting is a preview/summary concern, not an export one.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Number(f64),
    Empty,
}

impl Cell {
    /// Text rendering used by the CSV and PDF encoders.
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Int(value) => value.to_string(),
            Self::Number(value) => value.to_string(),
            Self::Empty => String::new(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Int(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Empty => Ok(()),
        }
    }
}

/// One column of an exportable table: header label plus an optional
/// width hint (millimetres) for the paginated-document encoder.
///
/// Labels may embed `\n` to break narrow headers over several lines;
/// the CSV encoder strips those, the other two honour them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub label: &'static str,
    pub width_mm: Option<f32>,
}

impl Column {
    /// The label with embedded line breaks removed, as used for CSV
    /// headers and spreadsheet column keys.
    pub fn flat_label(&self) -> String {
        self.label.replace('\n', "")
    }
}

/// A record kind that can be laid out as a flat table row.
///
/// One implementation per domain record kind keeps the column-count and
/// column-order invariants in one place: `to_row` must produce exactly
/// one cell per entry of `columns`, in the same order, and every encoder
/// consumes both through this trait so they cannot disagree.
pub trait TableRecord {
    /// Ordered column set of this record kind.
    fn columns() -> &'static [Column];

    /// This record as one row of display-formatted cells, positionally
    /// aligned with [`columns`](Self::columns).
    fn to_row(&self) -> Vec<Cell>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_cells_render_without_trailing_zero() {
        assert_eq!(Cell::Number(125_000.0).to_text(), "125000");
        assert_eq!(Cell::Number(98_000.5).to_text(), "98000.5");
        assert_eq!(Cell::Int(18).to_text(), "18");
        assert_eq!(Cell::Empty.to_text(), "");
    }

    #[test]
    fn flat_label_strips_embedded_breaks() {
        let column = Column {
            label: "Durée \n(mois)",
            width_mm: Some(15.0),
        };
        assert_eq!(column.flat_label(), "Durée (mois)");
    }
}
