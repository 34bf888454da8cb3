//! Striped tables that flow across pages, repeating the header row.

use super::layout::FlowCursor;
use super::{Align, Font, PdfDocument, Rgb};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStyle {
    pub head_fill: Rgb,
    pub head_text: Rgb,
    pub body_text: Rgb,
    pub stripe_fill: Rgb,
    pub font_size: f64,
    pub cell_padding: f64,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            head_fill: Rgb(59, 130, 246),
            head_text: Rgb::WHITE,
            body_text: Rgb(80, 80, 80),
            stripe_fill: Rgb(245, 245, 245),
            font_size: 10.0,
            cell_padding: 1.76,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub head: Vec<String>,
    pub body: Vec<Vec<String>>,
    pub style: TableStyle,
}

impl Table {
    pub fn new(head: &[&str], body: Vec<Vec<String>>) -> Self {
        Self {
            head: head.iter().map(|h| h.to_string()).collect(),
            body,
            style: TableStyle::default(),
        }
    }
}

/// What a drawn table occupied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableSummary {
    /// y just below the last row, on the page the table ended on
    pub final_y: f64,
    pub rows_drawn: usize,
    pub page_breaks: usize,
}

/// Draws `table` at the cursor and leaves the cursor below it.
///
/// Cell text wraps onto as many lines as it needs; each row is as tall as its
/// tallest cell and is never split across pages.
pub fn draw_table(doc: &mut PdfDocument, cursor: &mut FlowCursor, table: &Table) -> TableSummary {
    let style = table.style;
    let x0 = cursor.margins().left;
    let width = cursor.content_width(doc);
    let columns = table.head.len().max(1);
    let col_width = width / columns as f64;
    let text_width = col_width - style.cell_padding * 2.0;

    doc.set_font_size(style.font_size);
    doc.set_font(Font::HelveticaBold);
    let head = wrap_row(doc, &table.head, text_width);
    doc.set_font(Font::Helvetica);
    let body: Vec<Vec<Vec<String>>> = table
        .body
        .iter()
        .map(|row| wrap_row(doc, row, text_width))
        .collect();

    let head_height = row_height(doc, &head, style);
    let first_height = body
        .first()
        .map(|row| row_height(doc, row, style))
        .unwrap_or(head_height);

    let mut page_breaks = 0;
    if cursor.ensure_space(doc, head_height + first_height) {
        page_breaks += 1;
    }
    draw_head(doc, cursor, &head, table.style, x0, width, col_width);

    for (index, row) in body.iter().enumerate() {
        let height = row_height(doc, row, style);
        if cursor.ensure_space(doc, height) {
            page_breaks += 1;
            draw_head(doc, cursor, &head, table.style, x0, width, col_width);
        }
        if index % 2 == 1 {
            doc.fill_rect(x0, cursor.y(), width, height, style.stripe_fill);
        }
        doc.set_font(Font::Helvetica);
        doc.set_text_color(style.body_text);
        draw_cells(doc, cursor.y(), row, x0, col_width, style);
        cursor.advance(height);
    }

    doc.set_font(Font::Helvetica);
    doc.set_text_color(Rgb::BLACK);

    TableSummary {
        final_y: cursor.y(),
        rows_drawn: table.body.len(),
        page_breaks,
    }
}

fn wrap_row(doc: &PdfDocument, cells: &[String], max_width: f64) -> Vec<Vec<String>> {
    cells.iter().map(|cell| wrap_text(doc, cell, max_width)).collect()
}

fn row_height(doc: &PdfDocument, cells: &[Vec<String>], style: TableStyle) -> f64 {
    let lines = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
    doc.line_height() * lines as f64 + style.cell_padding * 2.0
}

fn draw_head(
    doc: &mut PdfDocument,
    cursor: &mut FlowCursor,
    head: &[Vec<String>],
    style: TableStyle,
    x0: f64,
    width: f64,
    col_width: f64,
) {
    let height = row_height(doc, head, style);
    doc.fill_rect(x0, cursor.y(), width, height, style.head_fill);
    doc.set_font(Font::HelveticaBold);
    doc.set_text_color(style.head_text);
    draw_cells(doc, cursor.y(), head, x0, col_width, style);
    cursor.advance(height);
}

fn draw_cells(
    doc: &mut PdfDocument,
    top: f64,
    cells: &[Vec<String>],
    x0: f64,
    col_width: f64,
    style: TableStyle,
) {
    let line_height = doc.line_height();
    let first_baseline =
        top + style.cell_padding + line_height / 2.0 + style.font_size * 0.35 / super::MM_TO_PT;
    for (i, lines) in cells.iter().enumerate() {
        let x = x0 + col_width * i as f64 + style.cell_padding;
        for (n, line) in lines.iter().enumerate() {
            doc.text(line, x, first_baseline + line_height * n as f64, Align::Left);
        }
    }
}

/// Splits `text` into lines no wider than `max_width`, breaking between words.
/// A word that is wider than a whole line is broken between characters.
pub fn wrap_text(doc: &PdfDocument, text: &str, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if doc.text_width(&candidate) <= max_width {
            current = candidate;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        for c in word.chars() {
            current.push(c);
            if doc.text_width(&current) > max_width && current.chars().count() > 1 {
                current.pop();
                lines.push(std::mem::take(&mut current));
                current.push(c);
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pdf::layout::Margins;

    fn rows(n: usize) -> Vec<Vec<String>> {
        (0..n)
            .map(|i| vec![format!("Item {}", i), format!("{}", i)])
            .collect()
    }

    #[test]
    fn test_small_table_stays_on_page() {
        let mut doc = PdfDocument::a4();
        let mut cursor = FlowCursor::new(100.0, Margins::default());
        let summary = draw_table(&mut doc, &mut cursor, &Table::new(&["Name", "Qty"], rows(3)));

        assert_eq!(summary.rows_drawn, 3);
        assert_eq!(summary.page_breaks, 0);
        assert_eq!(doc.page_count(), 1);
        assert!(summary.final_y > 100.0);
        assert_eq!(summary.final_y, cursor.y());
        assert_eq!(doc.page_texts(0), vec!["Name", "Qty", "Item 0", "0", "Item 1", "1", "Item 2", "2"]);
    }

    #[test]
    fn test_long_table_repeats_head_on_each_page() {
        let mut doc = PdfDocument::a4();
        let mut cursor = FlowCursor::new(100.0, Margins::default());
        let summary = draw_table(&mut doc, &mut cursor, &Table::new(&["Name", "Qty"], rows(80)));

        assert!(doc.page_count() >= 2);
        assert_eq!(summary.page_breaks, doc.page_count() - 1);
        for page in 0..doc.page_count() {
            let texts = doc.page_texts(page);
            assert_eq!(&texts[..2], &["Name", "Qty"]);
        }
        let body_cells: usize = (0..doc.page_count())
            .map(|p| doc.page_texts(p).len() - 2)
            .sum();
        assert_eq!(body_cells, 160);
    }

    #[test]
    fn test_wrap_text_breaks_between_words() {
        let mut doc = PdfDocument::a4();
        doc.set_font_size(10.0);
        let name = "Oversized Graphic Hoodie Midnight Black";
        let lines = wrap_text(&doc, name, 30.0);

        assert!(lines.len() > 1);
        assert_eq!(lines.join(" "), name);
        assert!(lines.iter().all(|l| doc.text_width(l) <= 30.0));
        assert_eq!(wrap_text(&doc, "Cap", 30.0), vec!["Cap"]);
        assert!(wrap_text(&doc, "   ", 30.0).is_empty());
    }

    #[test]
    fn test_wrap_text_splits_overlong_word() {
        let mut doc = PdfDocument::a4();
        doc.set_font_size(10.0);
        let word = "W".repeat(40);
        let lines = wrap_text(&doc, &word, 20.0);

        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        assert!(lines.iter().all(|l| doc.text_width(l) <= 20.0));
    }

    #[test]
    fn test_wrapped_cell_grows_row() {
        let mut doc = PdfDocument::a4();
        let mut cursor = FlowCursor::new(100.0, Margins::default());
        let name = "Oversized Graphic Hoodie Midnight Black Limited Edition";
        let body = vec![
            vec![name.to_string(), "N/A".to_string(), "1".to_string(), "$1.00".to_string(), "$1.00".to_string()],
            vec!["Cap".to_string(), "Red".to_string(), "2".to_string(), "$2.00".to_string(), "$4.00".to_string()],
        ];
        let table = Table::new(&["Product", "Color", "Quantity", "Price", "Total"], body);
        let summary = draw_table(&mut doc, &mut cursor, &table);

        let texts = doc.page_texts(0);
        assert!(texts.join(" ").contains(name));
        assert!(!texts.iter().any(|t| t.ends_with("...")));
        doc.set_font_size(10.0);
        let single = doc.line_height() + 1.76 * 2.0;
        assert!(summary.final_y - 100.0 > single * 3.0 + 0.1);
    }
}
