//! The editable field: buffer, cursor, scroll and timers behind one API.
//!
//! A [`Field`] is mutated only while focused, once per input event or frame
//! tick. Text edits go through the capacity policy of its [`TextBuffer`];
//! pointer and render queries take a [`GlyphMetrics`] from the host.
//!
//! # Examples
//!
//! ```
//! use editfield::field::{Field, FieldKind};
//! use editfield::geometry::Rect;
//! use editfield::text::CapacityPolicy;
//!
//! let bounds = Rect::new(0.0, 0.0, 120.0, 30.0);
//! let mut bpm = Field::new(bounds, CapacityPolicy::fixed(3).unwrap(), FieldKind::SingleLine)
//!     .with_numeric_only(true)
//!     .with_placeholder("120");
//!
//! bpm.focus();
//! bpm.on_paste("1a4b0x9").unwrap();
//! assert_eq!(bpm.text(), "140");
//!
//! // Clearing and committing restores the placeholder value.
//! bpm.on_select_all();
//! bpm.on_backspace_press();
//! assert_eq!(bpm.blur().unwrap().as_deref(), Some("120"));
//! ```

pub mod hit;
mod options;
pub mod render;
pub mod scroll;
mod theme;

pub use hit::{HitMode, HitTester};
pub use options::FieldOptions;
pub use render::{RenderGeometry, TextRun};
pub use scroll::{ScrollModel, Scrollbar};
pub use theme::{ColorRole, FieldTheme};

use std::time::Duration;

use crate::error::Result;
use crate::event::{EVENT_COMMIT, emit_event};
use crate::geometry::{Point, Rect, Size};
use crate::input::repeat::{BlinkTimer, KeyRepeatTimer, RepeatState};
use crate::metrics::GlyphMetrics;
use crate::text::{CapacityPolicy, CursorModel, Selection, TextBuffer};
use crate::unicode::InputRules;

/// Single-line or multi-line editing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldKind {
    /// One line, right-anchored horizontal scrolling, Enter commits.
    #[default]
    SingleLine,
    /// Newlines allowed, wheel-driven vertical scrolling, Enter inserts `'\n'`.
    MultiLine,
}

/// One editable text-entry widget and its state.
#[derive(Clone, Debug)]
pub struct Field {
    bounds: Rect,
    kind: FieldKind,
    buffer: TextBuffer,
    cursor: CursorModel,
    numeric_only: bool,
    placeholder: Option<String>,
    focused: bool,
    dragging: bool,
    scroll: ScrollModel,
    repeat: KeyRepeatTimer,
    blink: BlinkTimer,
    options: FieldOptions,
    theme: FieldTheme,
}

impl Field {
    /// Create an empty, unfocused field.
    #[must_use]
    pub fn new(bounds: Rect, policy: CapacityPolicy, kind: FieldKind) -> Self {
        let options = FieldOptions::default();
        Self {
            bounds,
            kind,
            buffer: TextBuffer::new(policy).with_growth(options.growth_slack, options.max_capacity),
            cursor: CursorModel::new(),
            numeric_only: false,
            placeholder: None,
            focused: false,
            dragging: false,
            scroll: ScrollModel::new(),
            repeat: KeyRepeatTimer::new(options.repeat_delay, options.repeat_interval),
            blink: BlinkTimer::new(options.blink_period),
            options,
            theme: FieldTheme::default(),
        }
    }

    /// Create a single-line field.
    #[must_use]
    pub fn single_line(bounds: Rect, policy: CapacityPolicy) -> Self {
        Self::new(bounds, policy, FieldKind::SingleLine)
    }

    /// Create a multi-line field.
    #[must_use]
    pub fn multi_line(bounds: Rect, policy: CapacityPolicy) -> Self {
        Self::new(bounds, policy, FieldKind::MultiLine)
    }

    /// Accept only decimal digits.
    #[must_use]
    pub fn with_numeric_only(mut self, numeric_only: bool) -> Self {
        self.numeric_only = numeric_only;
        self
    }

    /// Text shown while empty and unfocused, and restored on an empty commit.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        self.placeholder = (!placeholder.is_empty()).then_some(placeholder);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.set_options(options);
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: FieldTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Replace the options, re-arming timers with the new durations.
    pub fn set_options(&mut self, options: FieldOptions) {
        self.options = options;
        self.buffer
            .set_growth(options.growth_slack, options.max_capacity);
        self.repeat = KeyRepeatTimer::new(options.repeat_delay, options.repeat_interval);
        self.blink = BlinkTimer::new(options.blink_period);
        self.clamp_vertical();
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Move or resize the field; offsets are re-clamped.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.clamp_vertical();
    }

    /// The padded area text is laid out in.
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        self.bounds.inset(self.options.padding)
    }

    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    #[must_use]
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[must_use]
    pub fn policy(&self) -> CapacityPolicy {
        self.buffer.policy()
    }

    /// Cursor offset.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor.offset()
    }

    /// The active non-empty selection.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.cursor.selection()
    }

    /// Selected text, if any.
    #[must_use]
    pub fn selected_text(&self) -> Option<String> {
        let (start, end) = self.cursor.selection_range()?;
        Some(self.buffer.slice(start, end))
    }

    #[must_use]
    pub fn is_numeric_only(&self) -> bool {
        self.numeric_only
    }

    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub fn scroll(&self) -> ScrollModel {
        self.scroll
    }

    #[must_use]
    pub fn options(&self) -> &FieldOptions {
        &self.options
    }

    #[must_use]
    pub fn theme(&self) -> &FieldTheme {
        &self.theme
    }

    /// Backspace repeat state.
    #[must_use]
    pub fn repeat_state(&self) -> RepeatState {
        self.repeat.state()
    }

    /// Whether the caret is drawn this frame.
    #[must_use]
    pub fn cursor_visible(&self) -> bool {
        self.focused && self.blink.visible()
    }

    /// Text to draw and whether it is the placeholder.
    #[must_use]
    pub fn display_text(&self) -> (String, bool) {
        match &self.placeholder {
            Some(placeholder) if self.is_empty() && !self.focused => (placeholder.clone(), true),
            _ => (self.text(), false),
        }
    }

    /// Total content extent: measured width of the widest line and the height
    /// of all lines.
    #[must_use]
    pub fn content_size(&self, metrics: &dyn GlyphMetrics) -> Size {
        let rope = self.buffer.rope();
        let width = (0..rope.len_lines())
            .map(|line| metrics.text_width(&rope.line_text(line), self.options.font_size))
            .fold(0.0, f32::max);
        Size::new(width, self.content_height())
    }

    fn content_height(&self) -> f32 {
        match self.kind {
            FieldKind::SingleLine => self.options.line_height(),
            FieldKind::MultiLine => {
                self.buffer.rope().len_lines() as f32 * self.options.line_height()
            }
        }
    }

    fn rules(&self) -> InputRules {
        InputRules {
            numeric_only: self.numeric_only,
            allow_newline: self.kind == FieldKind::MultiLine,
        }
    }

    // ------------------------------------------------------------------
    // Focus lifecycle
    // ------------------------------------------------------------------

    /// Make the field editable.
    pub fn focus(&mut self) {
        if !self.focused {
            self.focused = true;
            self.blink.reset();
        }
    }

    /// Commit and end editing.
    ///
    /// An empty field with a placeholder takes the placeholder as its value.
    /// Returns the committed text, or `None` if the field was not focused.
    pub fn blur(&mut self) -> Result<Option<String>> {
        if !self.focused {
            return Ok(None);
        }
        if self.is_empty() {
            if let Some(placeholder) = self.placeholder.clone() {
                let filtered = self.rules().filter(&placeholder).into_owned();
                self.buffer.set_text(&filtered)?;
                self.cursor.set_cursor(self.len(), self.len());
            }
        }
        self.end_editing();

        let text = self.text();
        emit_event(EVENT_COMMIT, &text);
        Ok(Some(text))
    }

    /// Leave the focused state without committing: no placeholder, no event.
    pub(crate) fn end_editing(&mut self) {
        self.focused = false;
        self.dragging = false;
        self.cursor.clear_selection();
        self.repeat.reset();
        self.clamp_vertical();
    }

    /// Release the field, freeing its storage and returning its content.
    #[must_use]
    pub fn release(self) -> String {
        self.buffer.into_string()
    }

    /// Replace the content from the host (e.g. a loaded value).
    ///
    /// Input rules and the capacity policy apply; the cursor moves to the end.
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        let filtered = self.rules().filter(text).into_owned();
        self.buffer.set_text(&filtered)?;
        self.cursor.clear_selection();
        self.cursor.set_cursor(self.len(), self.len());
        self.clamp_vertical();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Text input
    // ------------------------------------------------------------------

    /// A typed character. Rejected characters are dropped silently.
    pub fn on_character(&mut self, c: char) -> Result<()> {
        if !self.focused || !self.rules().accepts(c) {
            return Ok(());
        }
        let mut buf = [0u8; 4];
        self.insert_text(c.encode_utf8(&mut buf))
    }

    /// Clipboard text: newlines normalized, filtered, then inserted at the
    /// cursor in place of any selection.
    pub fn on_paste(&mut self, clipboard: &str) -> Result<()> {
        if !self.focused {
            return Ok(());
        }
        let filtered = self.rules().filter(clipboard);
        if filtered.is_empty() {
            return Ok(());
        }
        self.insert_text(&filtered)
    }

    /// Enter: commits a single-line field, inserts a newline in a multi-line one.
    pub fn on_enter(&mut self) -> Result<Option<String>> {
        match self.kind {
            FieldKind::SingleLine => self.blur(),
            FieldKind::MultiLine => {
                self.on_character('\n')?;
                Ok(None)
            }
        }
    }

    /// Escape: commit either kind of field.
    pub fn on_escape(&mut self) -> Result<Option<String>> {
        self.blur()
    }

    fn insert_text(&mut self, text: &str) -> Result<()> {
        let count = text.chars().count();
        let selected = self.cursor.selection_range();
        let removed = selected.map_or(0, |(start, end)| end - start);
        // Grow first so a growth failure leaves the selection intact.
        self.buffer.remaining_or_grow(count.saturating_sub(removed))?;
        if let Some((start, end)) = selected {
            self.buffer.delete_range(start, end);
            self.cursor.clear_selection();
            self.cursor.set_cursor(start, self.buffer.len());
        }
        let at = self.cursor.offset();
        let before = self.buffer.len();
        let after = self.buffer.insert_at(at, text)?;
        self.cursor.set_cursor(at + (after - before), after);
        self.after_edit();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Deletion
    // ------------------------------------------------------------------

    /// Delete the selection, if any. Returns whether anything was removed.
    pub fn delete_selection(&mut self) -> bool {
        let Some((start, end)) = self.cursor.selection_range() else {
            return false;
        };
        self.buffer.delete_range(start, end);
        self.cursor.clear_selection();
        self.cursor.set_cursor(start, self.buffer.len());
        self.after_edit();
        true
    }

    fn delete_before_cursor(&mut self) {
        let at = self.cursor.offset();
        if at == 0 {
            return;
        }
        self.buffer.delete_range(at - 1, at);
        self.cursor.clear_selection();
        self.cursor.set_cursor(at - 1, self.buffer.len());
        self.after_edit();
    }

    /// Backspace went down.
    ///
    /// A selection is deleted as a single action that does not repeat;
    /// otherwise one character before the cursor is deleted and auto-repeat
    /// is armed.
    pub fn on_backspace_press(&mut self) {
        if !self.focused {
            return;
        }
        if self.delete_selection() {
            self.repeat.reset();
        } else {
            self.delete_before_cursor();
            self.repeat.arm();
        }
    }

    /// Backspace still held for another `dt`; deletes once per due repeat.
    pub fn on_backspace_held(&mut self, dt: Duration) {
        if !self.focused {
            return;
        }
        for _ in 0..self.repeat.advance(dt) {
            self.delete_before_cursor();
        }
    }

    pub fn on_backspace_release(&mut self) {
        self.repeat.reset();
    }

    /// Forward delete: the selection, or the character after the cursor.
    pub fn on_delete(&mut self) {
        if !self.focused || self.delete_selection() {
            return;
        }
        let at = self.cursor.offset();
        if self.buffer.delete_range(at, at + 1) > 0 {
            self.after_edit();
        }
    }

    /// Copy the selection out, then delete it.
    pub fn cut(&mut self) -> Option<String> {
        if !self.focused {
            return None;
        }
        let text = self.selected_text()?;
        self.delete_selection();
        Some(text)
    }

    // ------------------------------------------------------------------
    // Cursor movement
    // ------------------------------------------------------------------

    pub fn on_arrow_left(&mut self) {
        if self.focused {
            self.cursor.move_left(self.len());
            self.blink.reset();
        }
    }

    pub fn on_arrow_right(&mut self) {
        if self.focused {
            self.cursor.move_right(self.len());
            self.blink.reset();
        }
    }

    pub fn on_home(&mut self) {
        if self.focused {
            self.cursor.clear_selection();
            self.cursor.set_cursor(0, self.len());
            self.blink.reset();
        }
    }

    pub fn on_end(&mut self) {
        if self.focused {
            self.cursor.clear_selection();
            self.cursor.set_cursor(self.len(), self.len());
            self.blink.reset();
        }
    }

    /// Select everything and put the cursor at the end.
    pub fn on_select_all(&mut self) {
        if self.focused {
            self.cursor.select_all(self.len());
        }
    }

    // ------------------------------------------------------------------
    // Pointer and wheel
    // ------------------------------------------------------------------

    /// Primary button pressed inside the field: place the cursor.
    pub fn on_pointer_down(&mut self, point: Point, metrics: &dyn GlyphMetrics) {
        if !self.focused {
            return;
        }
        let offset = HitTester::new(self, metrics).offset_at_point(point);
        self.cursor.clear_selection();
        self.cursor.set_cursor(offset, self.len());
        self.dragging = true;
        self.blink.reset();
    }

    /// Pointer moved with the button held: extend the selection.
    pub fn on_pointer_drag(&mut self, point: Point, metrics: &dyn GlyphMetrics) {
        if !self.focused || !self.dragging {
            return;
        }
        let offset = HitTester::new(self, metrics).offset_at_point(point);
        self.cursor.extend_selection_to(offset, self.len());
        self.blink.reset();
    }

    pub fn on_pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Wheel notches; only multi-line fields scroll.
    pub fn on_wheel(&mut self, notches: f32) {
        if !self.focused || self.kind != FieldKind::MultiLine {
            return;
        }
        let viewport = self.content_rect().height;
        self.scroll.apply_wheel(
            notches,
            self.options.wheel_step,
            self.content_height(),
            viewport,
        );
    }

    // ------------------------------------------------------------------
    // Frame
    // ------------------------------------------------------------------

    /// Advance the blink phase and, while backspace is held, the repeat
    /// timer; then re-clamp the vertical offset.
    ///
    /// Drive held backspace with either this or
    /// [`on_backspace_held`](Self::on_backspace_held), not both.
    pub fn tick(&mut self, dt: Duration) {
        self.blink.advance(dt);
        self.on_backspace_held(dt);
        self.clamp_vertical();
    }

    /// Recompute both scroll offsets from measured content.
    pub fn sync_scroll(&mut self, metrics: &dyn GlyphMetrics) {
        let content = self.content_size(metrics);
        let viewport = self.content_rect().size();
        self.scroll.recompute(self.kind, content, viewport);
    }

    /// Geometry for the host renderer to draw this frame.
    #[must_use]
    pub fn render_geometry(&self, metrics: &dyn GlyphMetrics) -> RenderGeometry {
        render::build(self, metrics)
    }

    fn after_edit(&mut self) {
        self.cursor.clamp(self.buffer.len());
        self.blink.reset();
        self.clamp_vertical();
    }

    fn clamp_vertical(&mut self) {
        match self.kind {
            FieldKind::SingleLine => self.scroll.clamp_vertical(0.0, 0.0),
            FieldKind::MultiLine => {
                let viewport = self.content_rect().height;
                self.scroll.clamp_vertical(self.content_height(), viewport);
            }
        }
    }
}
