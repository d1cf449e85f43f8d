//! Glyph measurement capability.
//!
//! The engine never loads fonts. Every computation that needs text widths
//! takes a `&dyn GlyphMetrics` supplied by the host, which typically wraps its
//! font backend's "measure text" call.

use crate::unicode::{WidthMethod, display_width};

/// Measures rendered text for a font size.
pub trait GlyphMetrics {
    /// Rendered width of `text` in pixels. `text` never contains `'\n'`.
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

impl<F> GlyphMetrics for F
where
    F: Fn(&str, f32) -> f32,
{
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        self(text, font_size)
    }
}

/// Monospace metrics: every display column advances by a fixed ratio of the
/// font size.
///
/// Wide characters (CJK, most emoji) take two columns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMetrics {
    /// Advance of one column as a fraction of the font size.
    pub advance_ratio: f32,
    pub width_method: WidthMethod,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            advance_ratio: 0.5,
            width_method: WidthMethod::WcWidth,
        }
    }
}

impl MonospaceMetrics {
    /// Create metrics with the given column advance ratio.
    #[must_use]
    pub fn new(advance_ratio: f32) -> Self {
        Self {
            advance_ratio,
            ..Self::default()
        }
    }

    /// Set the width method for ambiguous-width characters.
    #[must_use]
    pub fn width_method(mut self, method: WidthMethod) -> Self {
        self.width_method = method;
        self
    }
}

impl GlyphMetrics for MonospaceMetrics {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        display_width(text, self.width_method) as f32 * font_size * self.advance_ratio
    }
}
