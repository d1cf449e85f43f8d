//! Per-frame drawing geometry.
//!
//! The host draws; this module only says where. Text runs are positioned at
//! their line tops with scroll offsets already applied. Selection rectangles
//! are clipped to the content area, and runs are expected to be clipped by
//! the host to [`RenderGeometry::clip`].

use crate::color::Rgba;
use crate::field::hit::HitTester;
use crate::field::scroll::Scrollbar;
use crate::field::theme::FieldTheme;
use crate::field::{Field, FieldKind};
use crate::geometry::{Point, Rect};
use crate::metrics::GlyphMetrics;

/// A run of text drawn at one position.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Top-left corner of the run.
    pub position: Point,
    pub font_size: f32,
    pub color: Rgba,
}

/// Everything needed to draw one field for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderGeometry {
    /// Outer field rectangle, filled with the background color.
    pub bounds: Rect,
    /// Content area; text outside it is not visible.
    pub clip: Rect,
    pub theme: FieldTheme,
    pub text_runs: Vec<TextRun>,
    pub selection_rects: Vec<Rect>,
    /// Caret, when focused and in the visible blink phase.
    pub cursor_rect: Option<Rect>,
    /// Vertical scrollbar, when a multi-line field overflows.
    pub scrollbar: Option<Scrollbar>,
}

pub(crate) fn build(field: &Field, metrics: &dyn GlyphMetrics) -> RenderGeometry {
    let options = field.options();
    let theme = *field.theme();
    let clip = field.content_rect();
    let line_height = options.line_height();
    let hit = HitTester::new(field, metrics);
    let rope = field.buffer().rope();

    let mut text_runs = Vec::new();
    let (display, is_placeholder) = field.display_text();
    if is_placeholder {
        text_runs.push(TextRun {
            text: display,
            position: clip.origin(),
            font_size: options.font_size,
            color: theme.placeholder,
        });
    } else if !display.is_empty() {
        match field.kind() {
            FieldKind::SingleLine => text_runs.push(TextRun {
                text: display,
                position: Point::new(clip.x - hit.horizontal_offset(), clip.y),
                font_size: options.font_size,
                color: theme.text,
            }),
            FieldKind::MultiLine => {
                for line in 0..rope.len_lines() {
                    let top = hit.line_top(line);
                    if top + line_height <= clip.y || top >= clip.bottom() {
                        continue;
                    }
                    let text = rope.line_text(line);
                    if text.is_empty() {
                        continue;
                    }
                    text_runs.push(TextRun {
                        text,
                        position: Point::new(clip.x, top),
                        font_size: options.font_size,
                        color: theme.text,
                    });
                }
            }
        }
    }

    let mut selection_rects = Vec::new();
    if let Some(selection) = field.selection() {
        let (start, end) = (selection.start(), selection.end());
        let first = rope.char_to_line(start);
        let last = rope.char_to_line(end);
        for line in first..=last {
            let line_start = rope.line_to_char(line);
            let from = start.max(line_start);
            let to = end.min(line_start + rope.line_len(line));
            if to <= from {
                continue;
            }
            let left = hit.pixel_at_offset(from);
            let right = hit.pixel_at_offset(to);
            let rect = Rect::new(left.x, left.y, right.x - left.x, line_height);
            if let Some(visible) = rect.intersect(&clip) {
                selection_rects.push(visible);
            }
        }
    }

    let cursor_rect = field.cursor_visible().then(|| {
        let at = hit.pixel_at_offset(field.cursor());
        Rect::new(at.x, at.y, options.cursor_width, line_height)
    });

    let scrollbar = match field.kind() {
        FieldKind::SingleLine => None,
        FieldKind::MultiLine => {
            let bounds = field.bounds();
            let track = Rect::new(
                bounds.right() - options.scrollbar_width,
                clip.y,
                options.scrollbar_width,
                clip.height,
            );
            let content_height = rope.len_lines() as f32 * line_height;
            field.scroll().scrollbar(content_height, track)
        }
    };

    RenderGeometry {
        bounds: field.bounds(),
        clip,
        theme,
        text_runs,
        selection_rects,
        cursor_rect,
        scrollbar,
    }
}
