//! Document structure for immutable text analysis and cursor calculations.
//!
//! A [`Document`] pairs a text snapshot with a cursor position and answers
//! navigation queries about it. Movement queries return a signed offset to be
//! added to the cursor by the caller rather than an absolute index, so the same
//! query can drive both a cursor move and a range operation such as "delete to
//! end of line".
//!
//! All positions are rune indexes (Unicode scalar values), not byte offsets.

use once_cell::sync::OnceCell;

use crate::error::{NavError, NavResult};
use crate::line_index::LineIndex;
use crate::unicode;

/// An immutable document representing text content with cursor position.
///
/// The line table is built on the first line-aware query and reused by every
/// later query on the same instance. A `Document` is `Send + Sync` and can be
/// shared read-only across threads.
#[derive(Debug, Clone)]
pub struct Document {
    /// The text content
    text: String,
    /// Cursor position as rune index (not byte index)
    cursor_position: usize,
    line_index: OnceCell<LineIndex>,
}

/// Direction of a blank-line scan relative to the cursor row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanDirection {
    Backward,
    Forward,
}

impl Document {
    /// Create a new empty document.
    ///
    /// # Examples
    ///
    /// ```
    /// use navkit_core::document::Document;
    ///
    /// let doc = Document::new();
    /// assert_eq!(doc.text(), "");
    /// assert_eq!(doc.cursor_position(), 0);
    /// ```
    pub fn new() -> Self {
        Document {
            text: String::new(),
            cursor_position: 0,
            line_index: OnceCell::new(),
        }
    }

    /// Create a document with specified text and cursor position.
    ///
    /// The cursor position is clamped to `[0, rune_count(text)]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use navkit_core::document::Document;
    ///
    /// let doc = Document::with_text("hello world", 5);
    /// assert_eq!(doc.cursor_position(), 5);
    ///
    /// let clamped = Document::with_text("hello", 99);
    /// assert_eq!(clamped.cursor_position(), 5);
    /// ```
    pub fn with_text(text: impl Into<String>, cursor_position: usize) -> Self {
        let text = text.into();
        let text_len = unicode::rune_count(&text);
        if cursor_position > text_len {
            log::debug!("clamping cursor position {cursor_position} to text length {text_len}");
        }

        Document {
            text,
            cursor_position: cursor_position.min(text_len),
            line_index: OnceCell::new(),
        }
    }

    /// Create a document, rejecting a cursor position outside the text.
    ///
    /// # Examples
    ///
    /// ```
    /// use navkit_core::document::Document;
    ///
    /// assert!(Document::with_text_validated("hello", 3).is_ok());
    /// assert!(Document::with_text_validated("hello", 10).is_err());
    /// ```
    pub fn with_text_validated(text: impl Into<String>, cursor_position: usize) -> NavResult<Self> {
        let text = text.into();
        let text_len = unicode::rune_count(&text);
        if cursor_position > text_len {
            return Err(NavError::invalid_cursor_position(cursor_position, text_len));
        }

        Ok(Document {
            text,
            cursor_position,
            line_index: OnceCell::new(),
        })
    }

    /// Produce the document that results from applying `offset` to the cursor.
    ///
    /// The new cursor is clamped into the text, so offsets returned by the
    /// movement queries can be chained directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use navkit_core::document::Document;
    ///
    /// let doc = Document::with_text("line1\nline2", 8);
    /// let moved = doc.with_cursor_offset(doc.get_cursor_up_position(1, None));
    /// assert_eq!(moved.cursor_position(), 2);
    /// ```
    pub fn with_cursor_offset(&self, offset: isize) -> Document {
        let target = self.cursor_position.saturating_add_signed(offset);
        Document {
            text: self.text.clone(),
            cursor_position: target.min(self.text_len()),
            line_index: self.line_index.clone(),
        }
    }

    /// Get the text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the cursor position as a rune index.
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// The line table of this document, built on first use.
    pub fn line_index(&self) -> &LineIndex {
        self.line_index.get_or_init(|| LineIndex::new(&self.text))
    }

    fn text_len(&self) -> usize {
        self.line_index().text_len()
    }

    /// Get the text before the cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use navkit_core::document::Document;
    ///
    /// let doc = Document::with_text("hello world", 5);
    /// assert_eq!(doc.text_before_cursor(), "hello");
    /// assert_eq!(doc.text_after_cursor(), " world");
    /// ```
    pub fn text_before_cursor(&self) -> &str {
        let split = unicode::byte_index_from_rune_index(&self.text, self.cursor_position);
        &self.text[..split]
    }

    /// Get the text after the cursor.
    pub fn text_after_cursor(&self) -> &str {
        let split = unicode::byte_index_from_rune_index(&self.text, self.cursor_position);
        &self.text[split..]
    }

    /// Character immediately before the cursor.
    pub fn char_before_cursor(&self) -> Option<char> {
        self.text_before_cursor().chars().next_back()
    }

    /// Character under the cursor.
    pub fn current_char(&self) -> Option<char> {
        self.text_after_cursor().chars().next()
    }

    // Multi-line operations

    /// Split the text into lines, without their separators.
    ///
    /// # Examples
    ///
    /// ```
    /// use navkit_core::document::Document;
    ///
    /// let doc = Document::with_text("line1\nline2\n", 0);
    /// assert_eq!(doc.lines(), vec!["line1", "line2", ""]);
    /// ```
    pub fn lines(&self) -> Vec<&str> {
        self.text.split('\n').collect()
    }

    /// Number of lines; a trailing newline opens a final empty line.
    pub fn line_count(&self) -> usize {
        self.line_index().line_count()
    }

    /// Rune index where each line starts. The first element is always 0.
    pub fn line_start_indexes(&self) -> &[usize] {
        self.line_index().starts()
    }

    /// Get the complete current line, without its separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use navkit_core::document::Document;
    ///
    /// let doc = Document::with_text("line1\nline2\nline3", 8);
    /// assert_eq!(doc.current_line(), "line2");
    /// assert_eq!(doc.current_line_before_cursor(), "li");
    /// assert_eq!(doc.current_line_after_cursor(), "ne2");
    /// ```
    pub fn current_line(&self) -> &str {
        let range = self.line_index().byte_range(self.cursor_position_row());
        &self.text[range]
    }

    /// Portion of the current line before the cursor.
    pub fn current_line_before_cursor(&self) -> &str {
        let line = self.current_line();
        let split = unicode::byte_index_from_rune_index(line, self.cursor_position_col());
        &line[..split]
    }

    /// Portion of the current line from the cursor to the line end.
    pub fn current_line_after_cursor(&self) -> &str {
        let line = self.current_line();
        let split = unicode::byte_index_from_rune_index(line, self.cursor_position_col());
        &line[split..]
    }

    /// Leading whitespace of the current line.
    ///
    /// # Examples
    ///
    /// ```
    /// use navkit_core::document::Document;
    ///
    /// let doc = Document::with_text("line1\n    indented", 12);
    /// assert_eq!(doc.leading_whitespace_in_current_line(), "    ");
    /// ```
    pub fn leading_whitespace_in_current_line(&self) -> &str {
        let line = self.current_line();
        let trimmed = line.trim_start();
        &line[..line.len() - trimmed.len()]
    }

    /// Get the row (line number) of the cursor position.
    pub fn cursor_position_row(&self) -> usize {
        self.line_index().row_of(self.cursor_position)
    }

    /// Get the column of the cursor position within its line.
    pub fn cursor_position_col(&self) -> usize {
        self.line_index().position_of(self.cursor_position).1
    }

    /// Whether the cursor is on the first line.
    pub fn on_first_line(&self) -> bool {
        self.cursor_position_row() == 0
    }

    /// Whether the cursor is on the last line.
    pub fn on_last_line(&self) -> bool {
        self.cursor_position_row() == self.line_index().last_row()
    }

    /// Translate a rune index to `(row, column)`; the index is clamped to the
    /// text length.
    ///
    /// # Examples
    ///
    /// ```
    /// use navkit_core::document::Document;
    ///
    /// let doc = Document::with_text("line1\nline2\nline3", 0);
    /// assert_eq!(doc.translate_index_to_position(8), (1, 2));
    /// assert_eq!(doc.translate_row_col_to_index(1, 2), 8);
    /// ```
    pub fn translate_index_to_position(&self, index: usize) -> (usize, usize) {
        self.line_index().position_of(index)
    }

    /// Translate `(row, column)` to a rune index.
    ///
    /// The row is clamped to the last line and the column to that line's
    /// length, so out-of-range coordinates resolve to the closest valid position.
    pub fn translate_row_col_to_index(&self, row: usize, col: usize) -> usize {
        self.line_index().index_of(row, col)
    }

    // Cursor movement calculations

    fn offset_to(&self, index: usize) -> isize {
        index as isize - self.cursor_position as isize
    }

    /// Offset for moving left by `count` without leaving the current line.
    ///
    /// A negative `count` moves right instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use navkit_core::document::Document;
    ///
    /// let doc = Document::with_text("line1\nline2", 8); // "li|ne2"
    /// assert_eq!(doc.get_cursor_left_position(1), -1);
    /// assert_eq!(doc.get_cursor_left_position(5), -2);
    /// assert_eq!(doc.get_cursor_left_position(-1), 1);
    /// ```
    pub fn get_cursor_left_position(&self, count: isize) -> isize {
        if count < 0 {
            return self.get_cursor_right_position(count.saturating_neg());
        }
        let available = self.cursor_position_col();
        -(count.unsigned_abs().min(available) as isize)
    }

    /// Offset for moving right by `count` without leaving the current line.
    ///
    /// A negative `count` moves left instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use navkit_core::document::Document;
    ///
    /// let doc = Document::with_text("line1\nline2", 6); // "|line2"
    /// assert_eq!(doc.get_cursor_right_position(1), 1);
    /// assert_eq!(doc.get_cursor_right_position(10), 5);
    /// ```
    pub fn get_cursor_right_position(&self, count: isize) -> isize {
        if count < 0 {
            return self.get_cursor_left_position(count.saturating_neg());
        }
        let index = self.line_index();
        let available = index.line_end(self.cursor_position_row()) - self.cursor_position;
        count.unsigned_abs().min(available) as isize
    }

    /// Offset for moving up `count` rows.
    ///
    /// The target row is clamped to the first line; the target column is
    /// `preferred_column` (or the current column) clamped to the target line's
    /// length. Returns 0 when already on the first line or when `count` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use navkit_core::document::Document;
    ///
    /// let doc = Document::with_text("line1\nline2\nline3", 8); // "li|ne2"
    /// assert_eq!(doc.get_cursor_up_position(1, None), -6);
    /// assert_eq!(doc.get_cursor_up_position(1, Some(10)), -3);
    /// ```
    pub fn get_cursor_up_position(&self, count: usize, preferred_column: Option<usize>) -> isize {
        let current_row = self.cursor_position_row();
        if count == 0 || current_row == 0 {
            return 0;
        }

        let target_row = current_row.saturating_sub(count);
        let target_col = preferred_column.unwrap_or_else(|| self.cursor_position_col());
        self.offset_to(self.translate_row_col_to_index(target_row, target_col))
    }

    /// Offset for moving down `count` rows.
    ///
    /// Returns exactly 0 when the cursor is already on the last line. A
    /// `count` that overshoots the last line lands on the last line.
    ///
    /// # Examples
    ///
    /// ```
    /// use navkit_core::document::Document;
    ///
    /// let doc = Document::with_text("line1\nline2\nline3", 2); // "li|ne1"
    /// assert_eq!(doc.get_cursor_down_position(1, None), 6);
    /// assert_eq!(doc.get_cursor_down_position(2, Some(1)), 11);
    /// ```
    pub fn get_cursor_down_position(&self, count: usize, preferred_column: Option<usize>) -> isize {
        let current_row = self.cursor_position_row();
        let last_row = self.line_index().last_row();
        if count == 0 || current_row >= last_row {
            return 0;
        }

        let target_row = current_row.saturating_add(count).min(last_row);
        let target_col = preferred_column.unwrap_or_else(|| self.cursor_position_col());
        self.offset_to(self.translate_row_col_to_index(target_row, target_col))
    }

    /// Offset to the start of the current line.
    ///
    /// With `after_whitespace`, targets the column just past the line's leading
    /// whitespace instead, and yields 0 when the cursor is already at or past
    /// that column.
    ///
    /// # Examples
    ///
    /// ```
    /// use navkit_core::document::Document;
    ///
    /// let doc = Document::with_text("    indented", 1);
    /// assert_eq!(doc.get_start_of_line_position(false), -1);
    /// assert_eq!(doc.get_start_of_line_position(true), 3);
    /// ```
    pub fn get_start_of_line_position(&self, after_whitespace: bool) -> isize {
        let col = self.cursor_position_col();
        if after_whitespace {
            let indent = unicode::rune_count(self.leading_whitespace_in_current_line());
            return indent.saturating_sub(col) as isize;
        }
        -(col as isize)
    }

    /// Offset to the end of the current line (before its separator).
    ///
    /// # Examples
    ///
    /// ```
    /// use navkit_core::document::Document;
    ///
    /// let doc = Document::with_text("line1\nline2\nline3", 8); // "li|ne2"
    /// assert_eq!(doc.get_end_of_line_position(), 3);
    /// ```
    pub fn get_end_of_line_position(&self) -> isize {
        let line_end = self.line_index().line_end(self.cursor_position_row());
        self.offset_to(line_end)
    }

    /// Offset to the start of the document.
    pub fn get_start_of_document_position(&self) -> isize {
        self.offset_to(0)
    }

    /// Offset to the end of the document.
    pub fn get_end_of_document_position(&self) -> isize {
        self.offset_to(self.text_len())
    }

    /// Offset to `column` on the current line, clamped to the line length.
    ///
    /// # Examples
    ///
    /// ```
    /// use navkit_core::document::Document;
    ///
    /// let doc = Document::with_text("hello\nworld", 8); // "wo|rld"
    /// assert_eq!(doc.get_column_cursor_position(0), -2);
    /// assert_eq!(doc.get_column_cursor_position(99), 3);
    /// ```
    pub fn get_column_cursor_position(&self, column: usize) -> isize {
        let row = self.cursor_position_row();
        self.offset_to(self.translate_row_col_to_index(row, column))
    }

    /// Row of the `count`-th blank line strictly before or after the cursor row.
    ///
    /// A `count` of 0 is treated as 1.
    fn find_blank_line(&self, direction: ScanDirection, count: usize) -> Option<usize> {
        let index = self.line_index();
        let row = self.cursor_position_row();
        let nth = count.max(1) - 1;
        let is_blank = |r: &usize| index.line_len(*r) == 0;

        match direction {
            ScanDirection::Backward => (0..row).rev().filter(is_blank).nth(nth),
            ScanDirection::Forward => (row + 1..index.line_count()).filter(is_blank).nth(nth),
        }
    }

    /// Offset to the start of the paragraph `count` paragraphs back.
    ///
    /// Lands on the `count`-th blank line above the cursor; `before` lands one
    /// position closer to the cursor. With too few blank lines above, returns
    /// the offset to the start of the document. Never positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use navkit_core::document::Document;
    ///
    /// let doc = Document::with_text("a\n\nb\nc", 6); // "c|"
    /// assert_eq!(doc.start_of_paragraph(1, false), -4);
    /// assert_eq!(doc.start_of_paragraph(1, true), -3);
    /// assert_eq!(doc.start_of_paragraph(2, false), -6);
    /// ```
    pub fn start_of_paragraph(&self, count: usize, before: bool) -> isize {
        match self.find_blank_line(ScanDirection::Backward, count) {
            Some(row) => {
                let shift = if before { 1 } else { 0 };
                let blank_start = self.line_index().line_start(row);
                (self.offset_to(blank_start) + shift).min(0)
            }
            None => self.get_start_of_document_position(),
        }
    }

    /// Offset to the end of the paragraph `count` paragraphs ahead.
    ///
    /// Lands just before the `count`-th blank line below the cursor; `after`
    /// lands on the blank line itself. With too few blank lines below, returns
    /// the offset to the end of the document. Never negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use navkit_core::document::Document;
    ///
    /// let doc = Document::with_text("a\nb\n\nc", 0); // "|a"
    /// assert_eq!(doc.end_of_paragraph(1, false), 3);
    /// assert_eq!(doc.end_of_paragraph(1, true), 4);
    /// assert_eq!(doc.end_of_paragraph(2, false), 6);
    /// ```
    pub fn end_of_paragraph(&self, count: usize, after: bool) -> isize {
        match self.find_blank_line(ScanDirection::Forward, count) {
            Some(row) => {
                let shift = if after { 0 } else { 1 };
                let blank_start = self.line_index().line_start(row);
                (self.offset_to(blank_start) - shift).max(0)
            }
            None => self.get_end_of_document_position(),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.cursor_position == other.cursor_position
    }
}

impl Eq for Document {}

#[cfg(feature = "serde")]
pub use self::state::DocumentState;

#[cfg(feature = "serde")]
mod state {
    use super::Document;
    use serde::{Deserialize, Serialize};

    /// Serializable snapshot of a document.
    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
    pub struct DocumentState {
        pub text: String,
        pub cursor_position: usize,
    }

    impl Document {
        /// Convert to a serializable snapshot.
        pub fn to_state(&self) -> DocumentState {
            DocumentState {
                text: self.text.clone(),
                cursor_position: self.cursor_position,
            }
        }

        /// Rebuild a document from a snapshot, clamping the cursor.
        pub fn from_state(state: DocumentState) -> Self {
            Document::with_text(state.text, state.cursor_position)
        }
    }
}
