//! Spreadsheet encoder.
//!
//! One sheet named `data`, a header row of column labels, then one row
//! per record. Numeric cells are written as numbers so the amounts stay
//! computable in the spreadsheet; everything else is text.

use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::table::{Cell, TableRecord};

/// Sheet name, fixed across every export the dashboard produces.
const SHEET_NAME: &str = "data";

/// Render `records` as an XLSX workbook. An empty collection yields a
/// valid workbook with the header row alone.
pub fn render_xlsx<R: TableRecord>(records: &[R]) -> Result<Vec<u8>> {
    let columns = R::columns();
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (index, column) in columns.iter().enumerate() {
        sheet.write_string(0, index as u16, column.label)?;
    }

    for (row_index, record) in records.iter().enumerate() {
        let row = record.to_row();
        debug_assert_eq!(row.len(), columns.len());
        let row_number = (row_index + 1) as u32;
        for (col_index, cell) in row.iter().enumerate() {
            let col_number = col_index as u16;
            match cell {
                Cell::Text(text) => {
                    sheet.write_string(row_number, col_number, text)?;
                }
                Cell::Int(value) => {
                    sheet.write_number(row_number, col_number, *value as f64)?;
                }
                Cell::Number(value) => {
                    sheet.write_number(row_number, col_number, *value)?;
                }
                Cell::Empty => {}
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    struct Fixture;

    impl TableRecord for Fixture {
        fn columns() -> &'static [Column] {
            const COLUMNS: [Column; 2] = [
                Column { label: "Nom", width_mm: None },
                Column { label: "Montant", width_mm: None },
            ];
            &COLUMNS
        }

        fn to_row(&self) -> Vec<Cell> {
            vec![Cell::Text("Mairie".to_string()), Cell::Number(1250.5)]
        }
    }

    #[test]
    fn produces_a_zip_container() {
        let bytes = render_xlsx(&[Fixture]).unwrap();
        // XLSX is a ZIP archive: PK magic.
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn empty_collection_is_still_a_valid_workbook() {
        let bytes = render_xlsx::<Fixture>(&[]).unwrap();
        assert_eq!(&bytes[0..2], b"PK");
    }
}
