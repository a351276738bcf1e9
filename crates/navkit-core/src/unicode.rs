//! Unicode utilities for cursor navigation and width measurement.
//!
//! All positions in this crate are rune indexes (Unicode scalar value counts),
//! never byte offsets. This module holds the conversions between the two and the
//! per-code-point display width classification used by the width service.

use unicode_width::UnicodeWidthChar;

/// Number of terminal columns a single code point occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GlyphWidth {
    /// Control characters, NUL, combining marks and other zero-width code points.
    Zero = 0,
    /// Ordinary printable characters.
    Narrow = 1,
    /// East Asian wide and fullwidth characters.
    Wide = 2,
}

impl GlyphWidth {
    /// Column count as an integer.
    pub fn columns(self) -> usize {
        self as usize
    }
}

impl From<GlyphWidth> for usize {
    fn from(width: GlyphWidth) -> Self {
        width.columns()
    }
}

/// Classify a code point into its display width category.
///
/// # Examples
///
/// ```
/// use navkit_core::unicode::{classify_code_point, GlyphWidth};
///
/// assert_eq!(classify_code_point('a'), GlyphWidth::Narrow);
/// assert_eq!(classify_code_point('世'), GlyphWidth::Wide);
/// assert_eq!(classify_code_point('\u{0301}'), GlyphWidth::Zero);
/// assert_eq!(classify_code_point('\0'), GlyphWidth::Zero);
/// ```
pub fn classify_code_point(c: char) -> GlyphWidth {
    // `width` yields None for C0/C1 controls.
    match c.width() {
        None | Some(0) => GlyphWidth::Zero,
        Some(1) => GlyphWidth::Narrow,
        Some(_) => GlyphWidth::Wide,
    }
}

/// Measure the display width of a string by summing per-code-point widths.
///
/// Iterates by scalar value, so a character encoded in several bytes is
/// measured exactly once. The result is additive across concatenation.
///
/// # Examples
///
/// ```
/// use navkit_core::unicode::measure_string;
///
/// assert_eq!(measure_string(""), 0);
/// assert_eq!(measure_string("Hello世界"), 9);
/// ```
pub fn measure_string(s: &str) -> usize {
    s.chars().map(|c| classify_code_point(c).columns()).sum()
}

/// Count the number of Unicode characters (runes) in a string.
///
/// # Examples
///
/// ```
/// use navkit_core::unicode::rune_count;
///
/// assert_eq!(rune_count("hello"), 5);
/// assert_eq!(rune_count("こんにちは"), 5);
/// ```
pub fn rune_count(s: &str) -> usize {
    s.chars().count()
}

/// Convert a rune index to a byte index, clamping to `s.len()`.
///
/// # Examples
///
/// ```
/// use navkit_core::unicode::byte_index_from_rune_index;
///
/// assert_eq!(byte_index_from_rune_index("hello", 2), 2);
/// assert_eq!(byte_index_from_rune_index("こんにちは", 2), 6);
/// ```
pub fn byte_index_from_rune_index(s: &str, rune_index: usize) -> usize {
    s.char_indices()
        .nth(rune_index)
        .map(|(byte_idx, _)| byte_idx)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ascii() {
        assert_eq!(classify_code_point('a'), GlyphWidth::Narrow);
        assert_eq!(classify_code_point('Z'), GlyphWidth::Narrow);
        assert_eq!(classify_code_point(' '), GlyphWidth::Narrow);
        assert_eq!(classify_code_point('~'), GlyphWidth::Narrow);
    }

    #[test]
    fn test_classify_control_characters() {
        assert_eq!(classify_code_point('\0'), GlyphWidth::Zero);
        assert_eq!(classify_code_point('\n'), GlyphWidth::Zero);
        assert_eq!(classify_code_point('\t'), GlyphWidth::Zero);
        assert_eq!(classify_code_point('\u{1b}'), GlyphWidth::Zero); // ESC
        assert_eq!(classify_code_point('\u{7f}'), GlyphWidth::Zero); // DEL
        assert_eq!(classify_code_point('\u{85}'), GlyphWidth::Zero); // C1 NEL
        assert_eq!(classify_code_point('\u{9f}'), GlyphWidth::Zero);
    }

    #[test]
    fn test_classify_combining_marks() {
        assert_eq!(classify_code_point('\u{0300}'), GlyphWidth::Zero);
        assert_eq!(classify_code_point('\u{0301}'), GlyphWidth::Zero);
        assert_eq!(classify_code_point('\u{20D0}'), GlyphWidth::Zero);
        assert_eq!(classify_code_point('\u{200B}'), GlyphWidth::Zero); // Zero-width space
    }

    #[test]
    fn test_classify_wide() {
        // CJK ideographs
        assert_eq!(classify_code_point('世'), GlyphWidth::Wide);
        assert_eq!(classify_code_point('中'), GlyphWidth::Wide);
        // Hiragana / Katakana
        assert_eq!(classify_code_point('あ'), GlyphWidth::Wide);
        assert_eq!(classify_code_point('カ'), GlyphWidth::Wide);
        // Hangul syllables
        assert_eq!(classify_code_point('한'), GlyphWidth::Wide);
        // Fullwidth forms
        assert_eq!(classify_code_point('Ａ'), GlyphWidth::Wide);
        assert_eq!(classify_code_point('！'), GlyphWidth::Wide);
    }

    #[test]
    fn test_classify_halfwidth_katakana_is_narrow() {
        assert_eq!(classify_code_point('ｶ'), GlyphWidth::Narrow);
    }

    #[test]
    fn test_glyph_width_columns() {
        assert_eq!(GlyphWidth::Zero.columns(), 0);
        assert_eq!(GlyphWidth::Narrow.columns(), 1);
        assert_eq!(usize::from(GlyphWidth::Wide), 2);
    }

    #[test]
    fn test_measure_string() {
        assert_eq!(measure_string(""), 0);
        assert_eq!(measure_string("hello"), 5);
        assert_eq!(measure_string("こんにちは"), 10);
        assert_eq!(measure_string("Hello世界"), 9);
        assert_eq!(measure_string("안녕하세요"), 10);

        // Combining sequence counts the base only
        assert_eq!(measure_string("e\u{0301}"), 1);

        // Control characters contribute nothing
        assert_eq!(measure_string("a\nb"), 2);
        assert_eq!(measure_string("a\0b"), 2);
    }

    #[test]
    fn test_measure_string_counts_supplementary_planes_once() {
        // U+20000 is a CJK Extension B ideograph outside the BMP
        assert_eq!(measure_string("\u{20000}"), 2);
        assert_eq!(measure_string("a\u{20000}b"), 4);
    }

    #[test]
    fn test_measure_string_is_additive() {
        let cases = [("hello", "世界"), ("", "abc"), ("e\u{0301}", "x"), ("タ", "\t")];
        for (a, b) in cases {
            let joined = format!("{a}{b}");
            assert_eq!(measure_string(&joined), measure_string(a) + measure_string(b));
        }
    }

    #[test]
    fn test_rune_count() {
        assert_eq!(rune_count(""), 0);
        assert_eq!(rune_count("hello"), 5);
        assert_eq!(rune_count("世界"), 2);
        assert_eq!(rune_count("Hello 世界 🦀"), 10);
        assert_eq!(rune_count("e\u{0301}"), 2);
    }

    #[test]
    fn test_byte_index_from_rune_index() {
        assert_eq!(byte_index_from_rune_index("hello", 0), 0);
        assert_eq!(byte_index_from_rune_index("hello", 5), 5);
        assert_eq!(byte_index_from_rune_index("hello", 10), 5);
        assert_eq!(byte_index_from_rune_index("こんにちは", 2), 6);
        assert_eq!(byte_index_from_rune_index("a🦀b", 2), 5);
    }
}
