//! Text Measurement
//!
//! Display widths in terminal cells, via `unicode-width`:
//! - ASCII printable: 1 cell
//! - CJK and most emoji: 2 cells
//! - Control and zero-width characters: 0 cells

use unicode_width::UnicodeWidthChar;

/// Width of one character in terminal cells.
#[inline]
pub fn char_width(c: char) -> u16 {
    c.width().unwrap_or(0) as u16
}

/// Measure the display width of a string in terminal cells.
pub fn string_width(s: &str) -> u16 {
    s.chars()
        .fold(0u16, |acc, c| acc.saturating_add(char_width(c)))
}

/// Longest prefix of `s` that fits in `max_width` cells.
pub fn truncate_to_width(s: &str, max_width: u16) -> &str {
    let mut used = 0u16;
    for (i, c) in s.char_indices() {
        let w = char_width(c);
        if used.saturating_add(w) > max_width {
            return &s[..i];
        }
        used = used.saturating_add(w);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_width_ascii() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
    }

    #[test]
    fn test_string_width_wide() {
        assert_eq!(string_width("日本"), 4);
        assert_eq!(string_width("a\u{0301}"), 1);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_to_width("hello", 3), "hel");
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("日本語", 3), "日");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_truncate_at_max_width() {
        let long = "a".repeat(70_000);
        assert_eq!(truncate_to_width(&long, u16::MAX).len(), u16::MAX as usize);
    }
}
