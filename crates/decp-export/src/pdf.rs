//! Paginated-document encoder.
//!
//! Landscape A4, a title line, then the table: header row repeated on
//! every page, per-column width hints honoured, cell text word-wrapped
//! to the column width. Built-in Helvetica keeps the document free of
//! font assets.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::error::Result;
use crate::table::{Column, TableRecord};

const PAGE_WIDTH: f32 = 297.0;
const PAGE_HEIGHT: f32 = 210.0;
const MARGIN: f32 = 10.0;
const TITLE_SIZE: f32 = 12.0;
const HEADER_SIZE: f32 = 8.0;
const BODY_SIZE: f32 = 7.0;
const LINE_HEIGHT: f32 = 3.5;
const ROW_PADDING: f32 = 1.2;
const CELL_GUTTER: f32 = 1.0;

/// Width given to columns that carry no hint, the minimum the original
/// table layout applied.
const DEFAULT_COLUMN_WIDTH: f32 = 20.0;

const MM_PER_PT: f32 = 0.352_778;

/// Average Helvetica glyph advance relative to the font size; good
/// enough for a wrapping budget, not for typesetting.
const GLYPH_WIDTH_RATIO: f32 = 0.5;

/// Render `records` as a landscape PDF document titled `title`.
/// An empty collection yields a title-and-header-only document.
pub fn render_pdf<R: TableRecord>(records: &[R], title: &str) -> Result<Vec<u8>> {
    let columns = R::columns();
    let widths = column_widths(columns);

    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "table");
    let body_font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let header_font = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let header: Vec<String> = columns.iter().map(|c| c.label.to_string()).collect();

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    layer.use_text(title, TITLE_SIZE, Mm(MARGIN), Mm(PAGE_HEIGHT - 8.0), &header_font);

    let mut y = PAGE_HEIGHT - 14.0;
    y = draw_row(&layer, &header, &widths, y, HEADER_SIZE, &header_font);

    for record in records {
        let cells: Vec<String> = record.to_row().iter().map(|c| c.to_text()).collect();
        let height = row_height(&cells, &widths, BODY_SIZE);
        if y - height < MARGIN {
            let (page, page_layer) =
                doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "table");
            layer = doc.get_page(page).get_layer(page_layer);
            y = PAGE_HEIGHT - MARGIN;
            y = draw_row(&layer, &header, &widths, y, HEADER_SIZE, &header_font);
        }
        y = draw_row(&layer, &cells, &widths, y, BODY_SIZE, &body_font);
    }

    Ok(doc.save_to_bytes()?)
}

/// Resolved column widths: hints where supplied, the default share
/// otherwise, the whole set scaled down when it overflows the page.
fn column_widths(columns: &[Column]) -> Vec<f32> {
    let content_width = PAGE_WIDTH - 2.0 * MARGIN;
    let mut widths: Vec<f32> = columns
        .iter()
        .map(|column| column.width_mm.unwrap_or(DEFAULT_COLUMN_WIDTH))
        .collect();

    let total: f32 = widths.iter().sum();
    if total > content_width {
        let scale = content_width / total;
        for width in &mut widths {
            *width *= scale;
        }
    }
    widths
}

fn draw_row(
    layer: &PdfLayerReference,
    cells: &[String],
    widths: &[f32],
    top: f32,
    font_size: f32,
    font: &IndirectFontRef,
) -> f32 {
    let mut x = MARGIN;
    let mut max_lines = 1;
    for (cell, width) in cells.iter().zip(widths) {
        let lines = wrap_cell(cell, chars_per_line(*width, font_size));
        for (index, line) in lines.iter().enumerate() {
            layer.use_text(
                line.clone(),
                font_size,
                Mm(x),
                Mm(top - LINE_HEIGHT * (index as f32 + 1.0)),
                font,
            );
        }
        max_lines = max_lines.max(lines.len());
        x += width;
    }
    top - LINE_HEIGHT * max_lines as f32 - ROW_PADDING
}

fn row_height(cells: &[String], widths: &[f32], font_size: f32) -> f32 {
    let max_lines = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| wrap_cell(cell, chars_per_line(*width, font_size)).len())
        .max()
        .unwrap_or(1);
    LINE_HEIGHT * max_lines as f32 + ROW_PADDING
}

fn chars_per_line(width: f32, font_size: f32) -> usize {
    let glyph = font_size * MM_PER_PT * GLYPH_WIDTH_RATIO;
    (((width - CELL_GUTTER) / glyph).floor()).max(1.0) as usize
}

/// Explicit line breaks first, then greedy word wrap to the character
/// budget. Single tokens longer than the budget overflow their column
/// rather than being split mid-word.
fn wrap_cell(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for segment in text.split('\n') {
        let segment = segment.trim_end();
        if segment.chars().count() <= max_chars {
            lines.push(segment.to_string());
            continue;
        }
        let mut current = String::new();
        for word in segment.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
