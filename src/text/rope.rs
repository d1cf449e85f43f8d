//! Rope wrapper using the ropey crate.
//!
//! All indices are character (Unicode scalar) offsets, never bytes.

use ropey::{Rope, RopeSlice};

/// Wrapper around `ropey::Rope` with bounds-checked, char-indexed operations.
#[derive(Clone, Debug, Default)]
pub struct RopeWrapper {
    rope: Rope,
}

impl RopeWrapper {
    /// Create an empty rope.
    #[must_use]
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a rope from a string.
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Get the number of characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get the number of lines.
    ///
    /// An empty rope has one (empty) line, and a trailing `'\n'` opens a new
    /// empty line, matching how a caret can sit after it.
    #[must_use]
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Get a line by index, including its trailing newline.
    #[must_use]
    pub fn line(&self, idx: usize) -> Option<RopeSlice<'_>> {
        if idx < self.rope.len_lines() {
            Some(self.rope.line(idx))
        } else {
            None
        }
    }

    /// Get a line's text without its trailing newline.
    #[must_use]
    pub fn line_text(&self, idx: usize) -> String {
        self.line(idx)
            .map(|line| {
                let mut text = line.to_string();
                if text.ends_with('\n') {
                    text.pop();
                }
                text
            })
            .unwrap_or_default()
    }

    /// Number of characters on a line, excluding its trailing newline.
    #[must_use]
    pub fn line_len(&self, idx: usize) -> usize {
        let Some(line) = self.line(idx) else {
            return 0;
        };
        let chars = line.len_chars();
        if chars > 0 && line.char(chars - 1) == '\n' {
            chars - 1
        } else {
            chars
        }
    }

    /// Get a slice of the rope as a string; out-of-range yields `""`.
    #[must_use]
    pub fn slice_to_string(&self, start: usize, end: usize) -> String {
        self.rope
            .get_slice(start..end)
            .map(|s| s.to_string())
            .unwrap_or_default()
    }

    /// Insert text at a character position. Out-of-range positions are ignored.
    pub fn insert(&mut self, char_idx: usize, text: &str) {
        if char_idx <= self.len_chars() {
            self.rope.insert(char_idx, text);
        }
    }

    /// Remove the characters in `start..end`, clamped to the rope length.
    pub fn remove(&mut self, start: usize, end: usize) {
        let end = end.min(self.len_chars());
        if start < end {
            self.rope.remove(start..end);
        }
    }

    /// Clear all content.
    pub fn clear(&mut self) {
        self.rope = Rope::new();
    }

    /// Convert char index to line index.
    #[must_use]
    pub fn char_to_line(&self, char_idx: usize) -> usize {
        self.rope.char_to_line(char_idx.min(self.len_chars()))
    }

    /// Get the char index at the start of a line.
    #[must_use]
    pub fn line_to_char(&self, line_idx: usize) -> usize {
        if line_idx >= self.len_lines() {
            self.len_chars()
        } else {
            self.rope.line_to_char(line_idx)
        }
    }
}

impl std::fmt::Display for RopeWrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}
