//! Per-field configuration.

use std::time::Duration;

use crate::field::hit::HitMode;
use crate::input::repeat::{DEFAULT_BLINK_PERIOD, DEFAULT_REPEAT_DELAY, DEFAULT_REPEAT_INTERVAL};
use crate::text::{DEFAULT_GROWTH_SLACK, DEFAULT_MAX_CAPACITY};

/// Layout, timing and growth options for a field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldOptions {
    /// Font size handed to the glyph metrics.
    pub font_size: f32,
    /// Extra vertical space between lines; line height is `font_size + line_spacing`.
    pub line_spacing: f32,
    /// Inner padding on every side of the bounds.
    pub padding: f32,
    /// Content pixels scrolled per wheel notch.
    pub wheel_step: f32,
    /// Backspace hold time before auto-repeat starts.
    pub repeat_delay: Duration,
    /// Time between auto-repeated deletions.
    pub repeat_interval: Duration,
    /// Full caret blink cycle.
    pub blink_period: Duration,
    pub cursor_width: f32,
    pub scrollbar_width: f32,
    /// Spare characters added when a growable buffer grows to fit a large insert.
    pub growth_slack: usize,
    /// Capacity ceiling for growable buffers.
    pub max_capacity: usize,
    pub hit_mode: HitMode,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            font_size: 20.0,
            line_spacing: 2.0,
            padding: 5.0,
            wheel_step: 20.0,
            repeat_delay: DEFAULT_REPEAT_DELAY,
            repeat_interval: DEFAULT_REPEAT_INTERVAL,
            blink_period: DEFAULT_BLINK_PERIOD,
            cursor_width: 2.0,
            scrollbar_width: 6.0,
            growth_slack: DEFAULT_GROWTH_SLACK,
            max_capacity: DEFAULT_MAX_CAPACITY,
            hit_mode: HitMode::Linear,
        }
    }
}

impl FieldOptions {
    /// Height of one line of text.
    #[must_use]
    pub fn line_height(&self) -> f32 {
        self.font_size + self.line_spacing
    }
}
