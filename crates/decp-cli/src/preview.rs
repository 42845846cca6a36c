//! Terminal rendering of a fetched page.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use decp_export::TableRecord;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

/// Print one page of records with the same columns and cell values the
/// export encoders produce.
pub fn print_page<R: TableRecord>(records: &[R]) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(
        R::columns()
            .iter()
            .map(|column| column.flat_label())
            .collect::<Vec<_>>(),
    );
    for record in records {
        table.add_row(
            record
                .to_row()
                .iter()
                .map(|cell| cell.to_text())
                .collect::<Vec<_>>(),
        );
    }
    println!("{table}");
}
