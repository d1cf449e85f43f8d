//! Display width calculation in monospace columns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

/// Get the display width of a string in columns.
#[must_use]
pub fn display_width(s: &str, method: WidthMethod) -> usize {
    if s.is_ascii() {
        return s.bytes().filter(|b| (b' '..=b'~').contains(b)).count();
    }
    match method {
        WidthMethod::WcWidth => UnicodeWidthStr::width(s),
        WidthMethod::Unicode => UnicodeWidthStr::width_cjk(s),
    }
}

/// Get the display width of a character in columns.
///
/// ASCII printable characters take the fast path; control characters are
/// zero width.
#[inline]
#[must_use]
pub fn display_width_char(c: char, method: WidthMethod) -> usize {
    if c.is_ascii() && (' '..='~').contains(&c) {
        return 1;
    }
    if c < ' ' {
        return 0;
    }
    match method {
        WidthMethod::WcWidth => UnicodeWidthChar::width(c).unwrap_or(0),
        WidthMethod::Unicode => UnicodeWidthChar::width_cjk(c).unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(display_width("hello", WidthMethod::WcWidth), 5);
        assert_eq!(display_width_char('a', WidthMethod::WcWidth), 1);
    }

    #[test]
    fn test_control_chars_are_zero_width() {
        assert_eq!(display_width("a\nb", WidthMethod::WcWidth), 2);
        assert_eq!(display_width_char('\t', WidthMethod::WcWidth), 0);
    }

    #[test]
    fn test_cjk_width() {
        assert_eq!(display_width("漢字", WidthMethod::WcWidth), 4);
        assert_eq!(display_width_char('漢', WidthMethod::WcWidth), 2);
    }

    #[test]
    fn test_width_methods() {
        // U+2460 CIRCLED DIGIT ONE is East Asian ambiguous.
        let ch = '①';
        assert_eq!(display_width_char(ch, WidthMethod::WcWidth), 1);
        assert_eq!(display_width_char(ch, WidthMethod::Unicode), 2);
    }
}
