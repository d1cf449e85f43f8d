//! Pointer position ↔ buffer offset mapping.
//!
//! The default [`HitMode::Linear`] assumes every glyph on a line is equally
//! wide: the column under `x` is `round(x / line_width * line_len)` and the
//! inverse places column `c` at `line_width * c / line_len`. This is cheap and
//! exact for monospace fonts, approximate for proportional ones.
//! [`HitMode::Exact`] measures every prefix instead and snaps to the nearest
//! character boundary.

use crate::field::{Field, FieldKind};
use crate::geometry::{Point, Rect};
use crate::metrics::GlyphMetrics;
use crate::text::RopeWrapper;

/// How columns are mapped to x positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HitMode {
    /// Uniform glyph width across the line.
    #[default]
    Linear,
    /// Cumulative prefix measurement.
    Exact,
}

/// The first `n` characters of `s`.
pub(crate) fn char_prefix(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or(s, |(idx, _)| &s[..idx])
}

/// Hit-tester for one field in its current state.
///
/// Built per query batch; the single-line horizontal offset is derived from
/// the measured text width at construction.
pub struct HitTester<'a> {
    rope: &'a RopeWrapper,
    kind: FieldKind,
    metrics: &'a dyn GlyphMetrics,
    font_size: f32,
    line_height: f32,
    mode: HitMode,
    content: Rect,
    horizontal: f32,
    vertical: f32,
}

impl<'a> HitTester<'a> {
    /// Create a hit-tester for `field` using `metrics`.
    #[must_use]
    pub fn new(field: &'a Field, metrics: &'a dyn GlyphMetrics) -> Self {
        let options = field.options();
        let content = field.content_rect();
        let rope = field.buffer().rope();
        let horizontal = match field.kind() {
            FieldKind::SingleLine => {
                let width = metrics.text_width(&rope.line_text(0), options.font_size);
                (width - content.width).max(0.0)
            }
            FieldKind::MultiLine => 0.0,
        };
        Self {
            rope,
            kind: field.kind(),
            metrics,
            font_size: options.font_size,
            line_height: options.line_height(),
            mode: options.hit_mode,
            content,
            horizontal,
            vertical: field.scroll().vertical(),
        }
    }

    /// Horizontal offset in effect for this state.
    #[must_use]
    pub fn horizontal_offset(&self) -> f32 {
        self.horizontal
    }

    /// Line under a screen y coordinate, clamped to existing lines.
    #[must_use]
    pub fn line_at_y(&self, y: f32) -> usize {
        if self.kind == FieldKind::SingleLine || self.line_height <= 0.0 {
            return 0;
        }
        let raw = ((y - self.content.y + self.vertical) / self.line_height).floor();
        // Negative and NaN saturate to 0.
        (raw as usize).min(self.rope.len_lines().saturating_sub(1))
    }

    /// Buffer offset under a screen point.
    #[must_use]
    pub fn offset_at_point(&self, point: Point) -> usize {
        let line = self.line_at_y(point.y);
        let text = self.rope.line_text(line);
        let len = self.rope.line_len(line);
        let x = point.x - self.content.x + self.horizontal;
        self.rope.line_to_char(line) + self.col_at_x(&text, len, x)
    }

    /// Screen position of the top-left corner of the caret at `offset`.
    #[must_use]
    pub fn pixel_at_offset(&self, offset: usize) -> Point {
        let offset = offset.min(self.rope.len_chars());
        let line = match self.kind {
            FieldKind::SingleLine => 0,
            FieldKind::MultiLine => self.rope.char_to_line(offset),
        };
        let text = self.rope.line_text(line);
        let len = self.rope.line_len(line);
        let col = offset.saturating_sub(self.rope.line_to_char(line)).min(len);
        Point::new(
            self.content.x + self.x_at_col(&text, len, col) - self.horizontal,
            self.line_top(line),
        )
    }

    /// Screen y of the top of a line.
    #[must_use]
    pub fn line_top(&self, line: usize) -> f32 {
        self.content.y + line as f32 * self.line_height - self.vertical
    }

    /// x of column `col` relative to the line start.
    pub(crate) fn x_at_col(&self, text: &str, len: usize, col: usize) -> f32 {
        if col == 0 || len == 0 {
            return 0.0;
        }
        match self.mode {
            HitMode::Linear => {
                let width = self.metrics.text_width(text, self.font_size);
                width * col.min(len) as f32 / len as f32
            }
            HitMode::Exact => self
                .metrics
                .text_width(char_prefix(text, col), self.font_size),
        }
    }

    fn col_at_x(&self, text: &str, len: usize, x: f32) -> usize {
        if len == 0 || x <= 0.0 || x.is_nan() {
            return 0;
        }
        match self.mode {
            HitMode::Linear => {
                let width = self.metrics.text_width(text, self.font_size);
                if width <= 0.0 {
                    return 0;
                }
                ((x / width * len as f32).round() as usize).min(len)
            }
            HitMode::Exact => {
                let mut prev = 0.0;
                for col in 1..=len {
                    let width = self
                        .metrics
                        .text_width(char_prefix(text, col), self.font_size);
                    if x < (prev + width) / 2.0 {
                        return col - 1;
                    }
                    prev = width;
                }
                len
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldOptions;
    use crate::metrics::MonospaceMetrics;
    use crate::text::CapacityPolicy;

    // Font 20, advance 0.5 => 10px per column; padding 5 => content at x=15.
    fn field(kind: FieldKind, text: &str) -> Field {
        let bounds = Rect::new(10.0, 10.0, 200.0, 100.0);
        let policy = CapacityPolicy::growable(64).unwrap();
        let mut field = Field::new(bounds, policy, kind);
        field.focus();
        field.set_text(text).unwrap();
        field
    }

    #[test]
    fn test_char_prefix() {
        assert_eq!(char_prefix("héllo", 2), "hé");
        assert_eq!(char_prefix("abc", 9), "abc");
        assert_eq!(char_prefix("abc", 0), "");
    }

    #[test]
    fn test_single_line_linear_round_trip() {
        let metrics = MonospaceMetrics::default();
        let field = field(FieldKind::SingleLine, "abcdefgh");
        let hit = HitTester::new(&field, &metrics);
        assert_eq!(hit.horizontal_offset(), 0.0);
        for offset in 0..=8 {
            let p = hit.pixel_at_offset(offset);
            assert_eq!(p.x, 15.0 + offset as f32 * 10.0);
            assert_eq!(hit.offset_at_point(Point::new(p.x, p.y)), offset);
        }
        // Rounds to the nearest boundary.
        assert_eq!(hit.offset_at_point(Point::new(15.0 + 14.0, 20.0)), 1);
        assert_eq!(hit.offset_at_point(Point::new(15.0 + 16.0, 20.0)), 2);
        // Left of the text and far right clamp.
        assert_eq!(hit.offset_at_point(Point::new(0.0, 20.0)), 0);
        assert_eq!(hit.offset_at_point(Point::new(500.0, 20.0)), 8);
    }

    #[test]
    fn test_single_line_overflow_uses_tail_offset() {
        let metrics = MonospaceMetrics::default();
        // 25 columns = 250px in a 190px content area.
        let field = field(FieldKind::SingleLine, &"x".repeat(25));
        let hit = HitTester::new(&field, &metrics);
        assert_eq!(hit.horizontal_offset(), 60.0);
        assert_eq!(hit.pixel_at_offset(25).x, 15.0 + 190.0);
        assert_eq!(hit.offset_at_point(Point::new(15.0, 20.0)), 6);
    }

    #[test]
    fn test_linear_is_approximate_for_proportional_fonts() {
        // 'i' is narrow and 'W' wide, but linear mode spreads width evenly.
        let metrics = |text: &str, _: f32| {
            text.chars()
                .map(|c| if c == 'i' { 4.0 } else { 16.0 })
                .sum::<f32>()
        };
        let f = field(FieldKind::SingleLine, "iiWW");
        let hit = HitTester::new(&f, &metrics);
        // Total width 40 => linear thinks each glyph is 10 wide.
        assert_eq!(hit.pixel_at_offset(2).x, 15.0 + 20.0);

        let mut exact = field(FieldKind::SingleLine, "iiWW");
        exact.set_options(FieldOptions {
            hit_mode: HitMode::Exact,
            ..FieldOptions::default()
        });
        let hit = HitTester::new(&exact, &metrics);
        assert_eq!(hit.pixel_at_offset(2).x, 15.0 + 8.0);
        // 8 + 16/2 = 16 is the midpoint of the third glyph.
        assert_eq!(hit.offset_at_point(Point::new(15.0 + 15.0, 20.0)), 2);
        assert_eq!(hit.offset_at_point(Point::new(15.0 + 17.0, 20.0)), 3);
    }

    #[test]
    fn test_multi_line_selects_line_then_column() {
        let metrics = MonospaceMetrics::default();
        let field = field(FieldKind::MultiLine, "abc\nlonger line\n\nz");
        let hit = HitTester::new(&field, &metrics);
        // Line height 22; content top at y=15.
        assert_eq!(hit.line_at_y(15.0), 0);
        assert_eq!(hit.line_at_y(15.0 + 22.0), 1);
        assert_eq!(hit.line_at_y(15.0 + 43.9), 1);
        assert_eq!(hit.line_at_y(-50.0), 0);
        assert_eq!(hit.line_at_y(900.0), 3);

        // Column 2 of line 1 ("longer line" starts at offset 4).
        assert_eq!(hit.offset_at_point(Point::new(15.0 + 20.0, 40.0)), 6);
        // Empty line 2 starts at offset 16.
        assert_eq!(hit.offset_at_point(Point::new(100.0, 15.0 + 44.0)), 16);
        // Past the end of a short line clamps to its end, not into the next.
        assert_eq!(hit.offset_at_point(Point::new(150.0, 16.0)), 3);

        let p = hit.pixel_at_offset(6);
        assert_eq!(p, Point::new(35.0, 15.0 + 22.0));
        let p = hit.pixel_at_offset(17);
        assert_eq!(p, Point::new(15.0, 15.0 + 66.0));
    }
}
