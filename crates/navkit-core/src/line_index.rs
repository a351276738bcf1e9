//! Line start table for rune-index to row/column conversion.

use std::ops::Range;

/// Pre-computed line starts of a text snapshot.
///
/// `starts[0]` is always 0. Every `\n` opens a new line, so a trailing newline
/// yields a final empty line and empty text has exactly one empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Rune index where each line starts.
    starts: Vec<usize>,
    /// Byte offset where each line starts, parallel to `starts`.
    byte_starts: Vec<usize>,
    /// Text length in runes.
    len: usize,
    /// Text length in bytes.
    byte_len: usize,
}

impl LineIndex {
    /// Scan `text` once for line separators.
    pub fn new(text: &str) -> Self {
        let mut starts = vec![0];
        let mut byte_starts = vec![0];
        let mut runes = 0;

        for (byte_idx, ch) in text.char_indices() {
            runes += 1;
            if ch == '\n' {
                starts.push(runes);
                byte_starts.push(byte_idx + ch.len_utf8());
            }
        }

        LineIndex {
            starts,
            byte_starts,
            len: runes,
            byte_len: text.len(),
        }
    }

    /// Number of lines; never zero.
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Index of the last row.
    pub fn last_row(&self) -> usize {
        self.starts.len() - 1
    }

    /// Text length in runes.
    pub fn text_len(&self) -> usize {
        self.len
    }

    /// Rune index of the start of every line.
    pub fn starts(&self) -> &[usize] {
        &self.starts
    }

    /// Start of `row`, with `row` clamped to the last line.
    pub fn line_start(&self, row: usize) -> usize {
        self.starts[row.min(self.last_row())]
    }

    /// Length of `row` in runes, excluding its separator.
    pub fn line_len(&self, row: usize) -> usize {
        let row = row.min(self.last_row());
        self.line_end(row) - self.starts[row]
    }

    /// Rune index just past the last character of `row` (its separator, or
    /// the end of text on the last line).
    pub fn line_end(&self, row: usize) -> usize {
        let row = row.min(self.last_row());
        match self.starts.get(row + 1) {
            Some(&next) => next - 1,
            None => self.len,
        }
    }

    /// Byte range of `row`'s content, excluding its separator.
    pub fn byte_range(&self, row: usize) -> Range<usize> {
        let row = row.min(self.last_row());
        let end = match self.byte_starts.get(row + 1) {
            Some(&next) => next - 1,
            None => self.byte_len,
        };
        self.byte_starts[row]..end
    }

    /// Row containing rune `index`; `index` is clamped to the text length.
    pub fn row_of(&self, index: usize) -> usize {
        let index = index.min(self.len);
        match self.starts.binary_search(&index) {
            Ok(row) => row,
            Err(row) => row - 1,
        }
    }

    /// Translate a rune index into `(row, column)`.
    pub fn position_of(&self, index: usize) -> (usize, usize) {
        let index = index.min(self.len);
        let row = self.row_of(index);
        (row, index - self.starts[row])
    }

    /// Translate `(row, column)` into a rune index; both are clamped.
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        let row = row.min(self.last_row());
        self.starts[row] + col.min(self.line_len(row))
    }
}
