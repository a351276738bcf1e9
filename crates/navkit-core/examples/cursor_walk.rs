//! Walks a cursor through a small document and prints where each motion lands.
//!
//! Run with `cargo run --example cursor_walk`.

use navkit_core::prelude::*;

fn describe(label: &str, doc: &Document, widths: &WidthService) {
    let (row, col) = doc.translate_index_to_position(doc.cursor_position());
    let screen_col = widths.get_width(doc.current_line_before_cursor());
    println!(
        "{label:<20} index={:<3} row={row} col={col} screen_col={screen_col}",
        doc.cursor_position()
    );
}

fn main() {
    let widths = WidthService::new();
    let text = "fn main() {\n    println!(\"世界\");\n\n    let x = 1;\n}";
    let mut doc = Document::with_text(text, 0);
    describe("start", &doc, &widths);

    let preferred = Some(20);
    doc = doc.with_cursor_offset(doc.get_cursor_down_position(1, preferred));
    describe("down (col 20)", &doc, &widths);

    doc = doc.with_cursor_offset(doc.get_start_of_line_position(false));
    doc = doc.with_cursor_offset(doc.get_start_of_line_position(true));
    describe("home (after indent)", &doc, &widths);

    doc = doc.with_cursor_offset(doc.end_of_paragraph(1, true));
    describe("next paragraph", &doc, &widths);

    doc = doc.with_cursor_offset(doc.get_end_of_document_position());
    describe("end of document", &doc, &widths);

    doc = doc.with_cursor_offset(doc.start_of_paragraph(1, true));
    describe("previous paragraph", &doc, &widths);
}
