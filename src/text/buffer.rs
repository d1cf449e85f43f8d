//! Character storage under a capacity policy.
//!
//! [`TextBuffer`] owns a field's characters. A [`CapacityPolicy::Fixed`]
//! buffer silently clamps input at its maximum; a
//! [`CapacityPolicy::Growable`] buffer grows its capacity before any write
//! that would exceed it, and reports growth failure as
//! [`Error::CapacityExhausted`] without touching the content.

use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use crate::text::rope::RopeWrapper;

/// Default number of spare characters added when growing to fit a large insert.
pub const DEFAULT_GROWTH_SLACK: usize = 64;

/// Default upper bound on a growable buffer's capacity (characters).
pub const DEFAULT_MAX_CAPACITY: usize = 16 * 1024 * 1024;

/// Capacity policy of a text buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapacityPolicy {
    /// Never holds more than `max` characters; excess input is dropped.
    Fixed { max: usize },
    /// Holds up to `capacity` characters and grows on demand.
    Growable { capacity: usize },
}

impl CapacityPolicy {
    /// A fixed policy. Zero is rejected.
    pub fn fixed(max: usize) -> Result<Self> {
        if max == 0 {
            return Err(Error::InvalidCapacity(max));
        }
        Ok(Self::Fixed { max })
    }

    /// A growable policy starting at `initial` characters. Zero is rejected.
    pub fn growable(initial: usize) -> Result<Self> {
        if initial == 0 {
            return Err(Error::InvalidCapacity(initial));
        }
        Ok(Self::Growable { capacity: initial })
    }

    /// Current capacity in characters.
    #[must_use]
    pub fn capacity(&self) -> usize {
        match *self {
            Self::Fixed { max } => max,
            Self::Growable { capacity } => capacity,
        }
    }

    #[must_use]
    pub fn is_growable(&self) -> bool {
        matches!(self, Self::Growable { .. })
    }

    /// Capacity this policy would have after demanding `demanded` characters.
    ///
    /// Fixed policies never change. Growable policies keep their capacity when
    /// it suffices, otherwise take the larger of double the current capacity
    /// and `demanded + slack`, capped at `limit`. Demanding more than `limit`
    /// fails.
    pub fn capacity_for(&self, demanded: usize, slack: usize, limit: usize) -> Result<usize> {
        let capacity = match *self {
            Self::Fixed { max } => return Ok(max),
            Self::Growable { capacity } => capacity,
        };
        if demanded <= capacity {
            return Ok(capacity);
        }
        if demanded > limit {
            return Err(Error::CapacityExhausted {
                requested: demanded,
                limit,
            });
        }
        let doubled = capacity.saturating_mul(2);
        let fitted = demanded.saturating_add(slack);
        Ok(doubled.max(fitted).min(limit))
    }
}

/// Character storage with a capacity policy.
///
/// Offsets are character indices; every operation clamps them to
/// `0..=len()`, so no call can read or write outside the content.
#[derive(Clone, Debug)]
pub struct TextBuffer {
    rope: RopeWrapper,
    policy: CapacityPolicy,
    growth_slack: usize,
    max_capacity: usize,
}

impl TextBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new(policy: CapacityPolicy) -> Self {
        Self {
            rope: RopeWrapper::new(),
            policy,
            growth_slack: DEFAULT_GROWTH_SLACK,
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }

    /// Set growth slack and the capacity ceiling for growable buffers.
    #[must_use]
    pub fn with_growth(mut self, slack: usize, max_capacity: usize) -> Self {
        self.set_growth(slack, max_capacity);
        self
    }

    pub fn set_growth(&mut self, slack: usize, max_capacity: usize) {
        self.growth_slack = slack;
        self.max_capacity = max_capacity;
    }

    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rope.len_chars()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.is_empty()
    }

    /// Current capacity in characters.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.policy.capacity()
    }

    #[must_use]
    pub fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    /// Underlying rope, for line queries.
    #[must_use]
    pub fn rope(&self) -> &RopeWrapper {
        &self.rope
    }

    /// Full content as a string.
    #[must_use]
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Characters in `start..end`, clamped.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.len());
        if start >= end {
            return String::new();
        }
        self.rope.slice_to_string(start, end)
    }

    /// How many of `extra` further characters may be written.
    ///
    /// Fixed buffers answer with what is left; growable buffers grow first so
    /// all of `extra` fits, or fail without changing anything.
    pub fn remaining_or_grow(&mut self, extra: usize) -> Result<usize> {
        let len = self.len();
        match self.policy {
            CapacityPolicy::Fixed { max } => Ok(extra.min(max.saturating_sub(len))),
            CapacityPolicy::Growable { capacity } => {
                let demanded = len.checked_add(extra).ok_or(Error::CapacityExhausted {
                    requested: usize::MAX,
                    limit: self.max_capacity,
                })?;
                let grown =
                    self.policy
                        .capacity_for(demanded, self.growth_slack, self.max_capacity)?;
                if grown != capacity {
                    emit_log(
                        LogLevel::Debug,
                        &format!("text buffer grew from {capacity} to {grown} characters"),
                    );
                    self.policy = CapacityPolicy::Growable { capacity: grown };
                }
                Ok(extra)
            }
        }
    }

    /// Insert `text` at `offset`, returning the new length.
    ///
    /// A fixed buffer keeps as many leading characters of `text` as fit and
    /// drops the rest.
    pub fn insert_at(&mut self, offset: usize, text: &str) -> Result<usize> {
        let count = text.chars().count();
        if count == 0 {
            return Ok(self.len());
        }
        let offset = offset.min(self.len());
        let allowed = self.remaining_or_grow(count)?;
        if allowed == count {
            self.rope.insert(offset, text);
        } else if allowed > 0 {
            let end = text
                .char_indices()
                .nth(allowed)
                .map_or(text.len(), |(idx, _)| idx);
            self.rope.insert(offset, &text[..end]);
        }
        if allowed < count {
            emit_log(
                LogLevel::Debug,
                &format!(
                    "fixed buffer full: dropped {} of {count} characters",
                    count - allowed
                ),
            );
        }
        Ok(self.len())
    }

    /// Remove the characters in `start..end`, returning how many were removed.
    ///
    /// Everything outside the range keeps its order.
    pub fn delete_range(&mut self, start: usize, end: usize) -> usize {
        let end = end.min(self.len());
        if start >= end {
            return 0;
        }
        self.rope.remove(start, end);
        end - start
    }

    /// Replace all content, subject to the capacity policy.
    pub fn set_text(&mut self, text: &str) -> Result<usize> {
        // Grow before clearing so a failed growth leaves the old content.
        let count = text.chars().count();
        if self.policy.is_growable() && count > self.capacity() {
            self.remaining_or_grow(count.saturating_sub(self.len()))?;
        }
        self.rope.clear();
        self.insert_at(0, text)
    }

    /// Consume the buffer, releasing its storage and returning the content.
    #[must_use]
    pub fn into_string(self) -> String {
        self.rope.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(max: usize) -> TextBuffer {
        TextBuffer::new(CapacityPolicy::fixed(max).unwrap())
    }

    fn growable(initial: usize) -> TextBuffer {
        TextBuffer::new(CapacityPolicy::growable(initial).unwrap())
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(CapacityPolicy::fixed(0), Err(Error::InvalidCapacity(0)));
        assert_eq!(CapacityPolicy::growable(0), Err(Error::InvalidCapacity(0)));
    }

    #[test]
    fn test_fixed_insert_truncates() {
        let mut buf = fixed(5);
        assert_eq!(buf.insert_at(0, "abc").unwrap(), 3);
        assert_eq!(buf.insert_at(1, "XYZ").unwrap(), 5);
        assert_eq!(buf.text(), "aXYbc");
        assert_eq!(buf.insert_at(5, "more").unwrap(), 5);
        assert_eq!(buf.capacity(), 5);
    }

    #[test]
    fn test_fixed_truncation_respects_char_boundaries() {
        let mut buf = fixed(2);
        buf.insert_at(0, "éßü").unwrap();
        assert_eq!(buf.text(), "éß");
    }

    #[test]
    fn test_growable_doubles() {
        let mut buf = growable(4).with_growth(0, DEFAULT_MAX_CAPACITY);
        buf.insert_at(0, "abcd").unwrap();
        assert_eq!(buf.capacity(), 4);
        buf.insert_at(4, "e").unwrap();
        assert_eq!(buf.capacity(), 8);
        assert_eq!(buf.len(), 5);
    }

    #[test]
    fn test_growable_fits_large_insert() {
        let mut buf = growable(256);
        let text = "x".repeat(1000);
        assert_eq!(buf.insert_at(0, &text).unwrap(), 1000);
        assert_eq!(buf.capacity(), 1000 + DEFAULT_GROWTH_SLACK);
    }

    #[test]
    fn test_growth_failure_leaves_content() {
        let mut buf = growable(4).with_growth(0, 8);
        buf.insert_at(0, "abcdef").unwrap();
        assert_eq!(buf.capacity(), 8);
        let err = buf.insert_at(0, "xyz").unwrap_err();
        assert_eq!(
            err,
            Error::CapacityExhausted {
                requested: 9,
                limit: 8
            }
        );
        assert_eq!(buf.text(), "abcdef");
        assert_eq!(buf.capacity(), 8);
    }

    #[test]
    fn test_growth_capped_at_limit() {
        let policy = CapacityPolicy::Growable { capacity: 6 };
        assert_eq!(policy.capacity_for(7, 0, 10), Ok(10));
        assert_eq!(policy.capacity_for(5, 0, 10), Ok(6));
        assert_eq!(policy.capacity_for(50, 4, 100), Ok(54));
        assert_eq!(CapacityPolicy::Fixed { max: 3 }.capacity_for(99, 0, 10), Ok(3));
    }

    #[test]
    fn test_delete_range_preserves_outside() {
        let mut buf = fixed(64);
        buf.insert_at(0, "0123456789").unwrap();
        assert_eq!(buf.delete_range(2, 5), 3);
        assert_eq!(buf.text(), "0156789");
        assert_eq!(buf.delete_range(5, 100), 2);
        assert_eq!(buf.text(), "01567");
        assert_eq!(buf.delete_range(3, 3), 0);
        assert_eq!(buf.delete_range(4, 2), 0);
    }

    #[test]
    fn test_insert_then_delete_round_trip() {
        let mut buf = growable(8);
        buf.insert_at(0, "hello world").unwrap();
        let before = buf.text();
        buf.insert_at(5, ", big").unwrap();
        buf.delete_range(5, 10);
        assert_eq!(buf.text(), before);
    }

    #[test]
    fn test_set_text_and_into_string() {
        let mut buf = fixed(4);
        buf.insert_at(0, "ab").unwrap();
        assert_eq!(buf.set_text("120").unwrap(), 3);
        assert_eq!(buf.slice(1, 9), "20");
        assert_eq!(buf.into_string(), "120");
    }
}
