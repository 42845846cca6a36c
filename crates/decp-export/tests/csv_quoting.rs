//! Property tests for the delimited-text encoder's quoting rules.

use proptest::prelude::*;

use decp_export::{Cell, Column, TableRecord, render_csv};

struct Arbitrary(Vec<Cell>);

impl TableRecord for Arbitrary {
    fn columns() -> &'static [Column] {
        const COLUMNS: [Column; 3] = [
            Column { label: "a", width_mm: None },
            Column { label: "b", width_mm: None },
            Column { label: "c", width_mm: None },
        ];
        &COLUMNS
    }

    fn to_row(&self) -> Vec<Cell> {
        self.0.clone()
    }
}

fn flatten(text: &str) -> String {
    text.replace(['\n', '\r'], "")
}

proptest! {
    /// Whatever lands in a cell — quotes, commas, newlines — the encoded
    /// output parses back to the newline-stripped cell text at the same
    /// position.
    #[test]
    fn arbitrary_cells_round_trip(
        rows in proptest::collection::vec(
            (".*", ".*", proptest::option::of(-1_000_000i64..1_000_000)),
            0..8,
        )
    ) {
        let records: Vec<Arbitrary> = rows
            .iter()
            .map(|(a, b, n)| {
                Arbitrary(vec![
                    Cell::Text(a.clone()),
                    Cell::Text(b.clone()),
                    n.map_or(Cell::Empty, Cell::Int),
                ])
            })
            .collect();

        let encoded = render_csv(&records).unwrap();
        let mut reader = csv::ReaderBuilder::new().from_reader(encoded.as_bytes());

        let parsed: Vec<Vec<String>> = reader
            .records()
            .map(|record| record.unwrap().iter().map(String::from).collect())
            .collect();
        prop_assert_eq!(parsed.len(), records.len());

        for (record, parsed_row) in records.iter().zip(&parsed) {
            for (cell, parsed_cell) in record.to_row().iter().zip(parsed_row) {
                prop_assert_eq!(parsed_cell, &flatten(&cell.to_text()));
            }
        }
    }
}
