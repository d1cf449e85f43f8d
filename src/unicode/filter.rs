//! Acceptance rules for typed and pasted text.

use std::borrow::Cow;

/// Whether a character is a printable, directly typeable character.
///
/// Control characters (C0, DEL, C1) and the Unicode line/paragraph
/// separators are rejected, so `'\n'` is the only line break that can reach
/// a buffer. Newline handling is up to [`InputRules`].
#[inline]
#[must_use]
pub fn is_printable(c: char) -> bool {
    !c.is_control() && !matches!(c, '\u{2028}' | '\u{2029}')
}

/// Normalize line endings: `\r\n` and lone `\r` both become `\n`.
///
/// Returns `Cow::Borrowed` when the text contains no carriage return.
#[must_use]
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// Which characters a field accepts from typed or pasted input.
///
/// The same predicate applies to both sources: a numeric field accepts every
/// decimal digit, including a leading `0`, whether typed or pasted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputRules {
    /// Accept only ASCII decimal digits.
    pub numeric_only: bool,
    /// Accept `'\n'` (multi-line fields).
    pub allow_newline: bool,
}

impl InputRules {
    /// Check a single character against the rules.
    #[must_use]
    pub fn accepts(&self, c: char) -> bool {
        if self.numeric_only {
            return c.is_ascii_digit();
        }
        if c == '\n' {
            return self.allow_newline;
        }
        is_printable(c)
    }

    /// Normalize newlines and drop every character the rules reject.
    #[must_use]
    pub fn filter<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let normalized = normalize_newlines(text);
        if normalized.chars().all(|c| self.accepts(c)) {
            return normalized;
        }
        Cow::Owned(normalized.chars().filter(|&c| self.accepts(c)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
        assert!(matches!(normalize_newlines("plain"), Cow::Borrowed(_)));
        assert_eq!(normalize_newlines("\r\r\n"), "\n\n");
    }

    #[test]
    fn test_numeric_rules() {
        let rules = InputRules {
            numeric_only: true,
            allow_newline: false,
        };
        assert!(rules.accepts('0'));
        assert!(rules.accepts('9'));
        assert!(!rules.accepts('a'));
        assert!(!rules.accepts('٣')); // Arabic-Indic digit, not ASCII
        assert_eq!(rules.filter("12a3b"), "123");
        assert_eq!(rules.filter("0\r\n7"), "07");
    }

    #[test]
    fn test_single_line_drops_newlines_and_controls() {
        let rules = InputRules::default();
        assert_eq!(rules.filter("ab\r\ncd\te\u{7f}"), "abcde");
        assert!(rules.accepts('é'));
        assert!(rules.accepts(' '));
    }

    #[test]
    fn test_multiline_keeps_newlines() {
        let rules = InputRules {
            numeric_only: false,
            allow_newline: true,
        };
        assert_eq!(rules.filter("one\r\ntwo\rthree"), "one\ntwo\nthree");
        assert!(matches!(rules.filter("clean\ntext"), Cow::Borrowed(_)));
    }
}
