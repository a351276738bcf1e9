// Property tests for navigation and width invariants.

use navkit_core::{measure_string, Document, WidthService};
use proptest::prelude::*;

// Text with frequent newlines and a mix of narrow, wide and zero-width chars
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => prop::char::range('a', 'z'),
            2 => Just('\n'),
            1 => Just(' '),
            1 => Just('世'),
            1 => Just('\u{0301}'),
            1 => Just('\t'),
        ],
        0..60,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn doc_strategy() -> impl Strategy<Value = Document> {
    text_strategy().prop_flat_map(|text| {
        let len = text.chars().count();
        (Just(text), 0..=len).prop_map(|(text, cursor)| Document::with_text(text, cursor))
    })
}

fn apply(doc: &Document, offset: isize) -> usize {
    let target = doc.cursor_position() as isize + offset;
    assert!(target >= 0, "offset {offset} moved before document start");
    target as usize
}

proptest! {
    #[test]
    fn index_position_roundtrip(text in text_strategy()) {
        let doc = Document::with_text(text.clone(), 0);
        for p in 0..=text.chars().count() {
            let (row, col) = doc.translate_index_to_position(p);
            prop_assert_eq!(doc.translate_row_col_to_index(row, col), p);
        }
    }

    #[test]
    fn left_right_are_mirror_images(doc in doc_strategy(), k in -80isize..80) {
        prop_assert_eq!(doc.get_cursor_left_position(k), doc.get_cursor_right_position(-k));
        prop_assert_eq!(doc.get_cursor_right_position(k), doc.get_cursor_left_position(-k));
    }

    #[test]
    fn horizontal_moves_stay_on_the_line(doc in doc_strategy(), k in 0isize..80) {
        let row = doc.cursor_position_row();
        for offset in [doc.get_cursor_left_position(k), doc.get_cursor_right_position(k)] {
            let target = apply(&doc, offset);
            prop_assert_eq!(doc.translate_index_to_position(target).0, row);
        }
    }

    #[test]
    fn vertical_moves_land_inside_text(
        doc in doc_strategy(),
        count in 0usize..10,
        preferred in prop::option::of(0usize..40),
    ) {
        let len = doc.text().chars().count();
        let row = doc.cursor_position_row();

        let up = apply(&doc, doc.get_cursor_up_position(count, preferred));
        prop_assert!(up <= len);
        prop_assert!(doc.translate_index_to_position(up).0 <= row);

        let down = apply(&doc, doc.get_cursor_down_position(count, preferred));
        prop_assert!(down <= len);
        prop_assert!(doc.translate_index_to_position(down).0 >= row);
        if doc.on_last_line() {
            prop_assert_eq!(down, doc.cursor_position());
        }
    }

    #[test]
    fn paragraph_motions_keep_direction(doc in doc_strategy(), count in 1usize..4, flag in any::<bool>()) {
        let len = doc.text().chars().count();
        let start = doc.start_of_paragraph(count, flag);
        let end = doc.end_of_paragraph(count, flag);
        prop_assert!(start <= 0);
        prop_assert!(end >= 0);
        prop_assert!(apply(&doc, end) <= len);
        apply(&doc, start);
    }

    #[test]
    fn line_motions_stay_on_the_line(doc in doc_strategy(), column in 0usize..80, flag in any::<bool>()) {
        let row = doc.cursor_position_row();
        for offset in [
            doc.get_start_of_line_position(flag),
            doc.get_end_of_line_position(),
            doc.get_column_cursor_position(column),
        ] {
            let target = apply(&doc, offset);
            prop_assert_eq!(doc.translate_index_to_position(target).0, row);
        }
    }

    #[test]
    fn measure_is_additive(a in "[a-z世\u{0301} ]{0,20}", b in "[a-z世 ]{0,20}") {
        prop_assert_eq!(
            measure_string(&format!("{a}{b}")),
            measure_string(&a) + measure_string(&b)
        );
    }

    #[test]
    fn cached_width_matches_fresh(texts in prop::collection::vec(text_strategy(), 1..40)) {
        let widths = WidthService::new();
        for text in texts.iter().chain(texts.iter()) {
            prop_assert_eq!(widths.get_width(text), measure_string(text));
        }
    }
}
