//! Viewport offsets and scrollbar geometry.
//!
//! Single-line fields do not scroll freely: their horizontal offset is
//! recomputed from the text width so the tail of overflowing text stays in
//! view. Multi-line fields scroll vertically under wheel input.

use crate::field::FieldKind;
use crate::geometry::{Rect, Size};

/// Largest valid offset for content of extent `content` in a viewport of
/// extent `viewport`.
#[must_use]
pub fn max_offset(content: f32, viewport: f32) -> f32 {
    (content - viewport).max(0.0)
}

/// Scrollbar track and thumb rectangles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scrollbar {
    pub track: Rect,
    pub thumb: Rect,
}

impl Scrollbar {
    /// Thumb position along the track, in screen y.
    #[must_use]
    pub fn thumb_offset(&self) -> f32 {
        self.thumb.y
    }

    #[must_use]
    pub fn thumb_length(&self) -> f32 {
        self.thumb.height
    }
}

/// Horizontal and vertical viewport offsets, both never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollModel {
    horizontal: f32,
    vertical: f32,
}

impl ScrollModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.horizontal
    }

    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.vertical
    }

    /// Recompute offsets from content and viewport extents.
    ///
    /// Single-line: horizontal is right-anchored, vertical is zero.
    /// Multi-line: horizontal is zero, vertical is clamped.
    pub fn recompute(&mut self, kind: FieldKind, content: Size, viewport: Size) {
        match kind {
            FieldKind::SingleLine => {
                self.horizontal = max_offset(content.width, viewport.width);
                self.vertical = 0.0;
            }
            FieldKind::MultiLine => {
                self.horizontal = 0.0;
                self.clamp_vertical(content.height, viewport.height);
            }
        }
    }

    /// Clamp the vertical offset to `[0, max(0, content - viewport)]`.
    pub fn clamp_vertical(&mut self, content_height: f32, viewport_height: f32) {
        let max = max_offset(content_height, viewport_height);
        self.vertical = if self.vertical.is_finite() {
            self.vertical.clamp(0.0, max)
        } else {
            0.0
        };
    }

    /// Apply wheel notches; positive notches scroll towards the top.
    pub fn apply_wheel(
        &mut self,
        notches: f32,
        step: f32,
        content_height: f32,
        viewport_height: f32,
    ) {
        if !notches.is_finite() {
            return;
        }
        self.vertical -= notches * step;
        self.clamp_vertical(content_height, viewport_height);
    }

    /// Scrollbar for the vertical offset, or `None` when everything fits.
    ///
    /// `track` gives the scrollbar column; its `y`/`height` are the viewport
    /// top and height. The thumb is `height² / content` long and travels the
    /// track in proportion to the offset.
    #[must_use]
    pub fn scrollbar(&self, content_height: f32, track: Rect) -> Option<Scrollbar> {
        let viewport = track.height;
        if content_height <= viewport || viewport <= 0.0 {
            return None;
        }
        let thumb_length = viewport * viewport / content_height;
        let travel = viewport - thumb_length;
        let range = content_height - viewport;
        let thumb_y = track.y + self.vertical * travel / range;
        Some(Scrollbar {
            track,
            thumb: Rect::new(track.x, thumb_y, track.width, thumb_length),
        })
    }
}
