//! Per-frame event dispatch.
//!
//! The host pushes discrete [`InputEvent`]s as they arrive and calls
//! [`InputRouter::frame`] once per tick. Events are applied in order to the
//! focused field of a [`Panel`]; a pointer press elsewhere moves focus first.
//! After the queue is drained the focused field's timers advance by the
//! frame delta and its scroll offsets are recomputed.

use std::collections::VecDeque;
use std::time::Duration;

use crate::error::Result;
use crate::field::FieldKind;
use crate::input::event::{InputEvent, PointerEvent, PointerKind};
use crate::input::keyboard::{KeyCode, KeyEvent};
use crate::metrics::GlyphMetrics;
use crate::panel::{Commit, FieldId, Panel};

/// Something the host must act on after a frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// A field lost focus; `text` is its committed content.
    Committed { field: FieldId, text: String },
    /// Focus moved. `None` means no field.
    FocusChanged {
        from: Option<FieldId>,
        to: Option<FieldId>,
    },
    /// Text to place on the clipboard (copy or cut).
    Copy(String),
}

impl From<Commit> for Effect {
    fn from(commit: Commit) -> Self {
        Self::Committed {
            field: commit.field,
            text: commit.text,
        }
    }
}

/// Queue of this frame's input and the dispatcher that applies it.
#[derive(Clone, Debug, Default)]
pub struct InputRouter {
    queue: VecDeque<InputEvent>,
    /// Effects of events already applied in a frame that then failed.
    carried: Vec<Effect>,
    backspace_down: bool,
}

impl InputRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for the next frame.
    pub fn push(&mut self, event: impl Into<InputEvent>) {
        self.queue.push_back(event.into());
    }

    /// Number of queued events.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Effects carried over from a failed frame, oldest first.
    ///
    /// Commits and focus changes that happened before the failing event are
    /// kept here until taken or returned by the next successful frame.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.carried)
    }

    /// Apply queued events, then advance the focused field by `dt`.
    ///
    /// Growth failure of a growable field is returned immediately; events
    /// after the failing one stay queued, and the effects of the events
    /// before it are kept for [`InputRouter::take_effects`] or the next frame.
    pub fn frame(
        &mut self,
        panel: &mut Panel,
        dt: Duration,
        metrics: &dyn GlyphMetrics,
    ) -> Result<Vec<Effect>> {
        let mut effects = std::mem::take(&mut self.carried);
        while let Some(event) = self.queue.pop_front() {
            if let Err(err) = self.dispatch(panel, event, metrics, &mut effects) {
                self.carried = effects;
                return Err(err);
            }
        }
        if let Some(field) = panel.focused_field_mut() {
            field.tick(dt);
            field.sync_scroll(metrics);
        }
        Ok(effects)
    }

    fn dispatch(
        &mut self,
        panel: &mut Panel,
        event: InputEvent,
        metrics: &dyn GlyphMetrics,
        effects: &mut Vec<Effect>,
    ) -> Result<()> {
        match event {
            InputEvent::Pointer(pointer) => self.on_pointer(panel, pointer, metrics, effects)?,
            InputEvent::Key(key) => self.on_key(panel, key, effects)?,
            InputEvent::KeyRelease(KeyCode::Backspace) => {
                self.backspace_down = false;
                if let Some(field) = panel.focused_field_mut() {
                    field.on_backspace_release();
                }
            }
            InputEvent::KeyRelease(_) => {}
            InputEvent::Text(c) => {
                if let Some(field) = panel.focused_field_mut() {
                    field.on_character(c)?;
                }
            }
            InputEvent::Paste(text) => {
                if let Some(field) = panel.focused_field_mut() {
                    field.on_paste(&text)?;
                }
            }
            InputEvent::Wheel(notches) => {
                if let Some(field) = panel.focused_field_mut() {
                    field.on_wheel(notches);
                }
            }
        }
        Ok(())
    }

    fn on_pointer(
        &mut self,
        panel: &mut Panel,
        pointer: PointerEvent,
        metrics: &dyn GlyphMetrics,
        effects: &mut Vec<Effect>,
    ) -> Result<()> {
        match pointer.kind {
            PointerKind::Down => {
                let target = panel.field_at(pointer.position);
                if target != panel.focused() {
                    self.move_focus(panel, target, effects)?;
                }
                if let Some(field) = panel.focused_field_mut() {
                    field.on_pointer_down(pointer.position, metrics);
                }
            }
            PointerKind::Drag => {
                if let Some(field) = panel.focused_field_mut() {
                    field.on_pointer_drag(pointer.position, metrics);
                }
            }
            PointerKind::Up => {
                if let Some(field) = panel.focused_field_mut() {
                    field.on_pointer_up();
                }
            }
        }
        Ok(())
    }

    fn on_key(&mut self, panel: &mut Panel, key: KeyEvent, effects: &mut Vec<Effect>) -> Result<()> {
        let Some(kind) = panel.focused_field_mut().map(|field| field.kind()) else {
            return Ok(());
        };
        let commits = match key.code {
            KeyCode::Esc => true,
            KeyCode::Enter => kind == FieldKind::SingleLine,
            _ => false,
        };
        if commits {
            return self.move_focus(panel, None, effects);
        }
        let Some(field) = panel.focused_field_mut() else {
            return Ok(());
        };

        if key.is_select_all() {
            field.on_select_all();
            return Ok(());
        }
        if key.is_copy() {
            if let Some(text) = field.selected_text() {
                effects.push(Effect::Copy(text));
            }
            return Ok(());
        }
        if key.is_cut() {
            if let Some(text) = field.cut() {
                effects.push(Effect::Copy(text));
            }
            return Ok(());
        }

        match key.code {
            // Host key-repeat while held is ignored; the field repeats itself.
            KeyCode::Backspace if self.backspace_down => {}
            KeyCode::Backspace => {
                self.backspace_down = true;
                field.on_backspace_press();
            }
            KeyCode::Delete => field.on_delete(),
            KeyCode::Left => field.on_arrow_left(),
            KeyCode::Right => field.on_arrow_right(),
            KeyCode::Home => field.on_home(),
            KeyCode::End => field.on_end(),
            KeyCode::Enter => field.on_character('\n')?,
            KeyCode::Esc | KeyCode::Char(_) => {}
        }
        Ok(())
    }

    fn move_focus(
        &mut self,
        panel: &mut Panel,
        to: Option<FieldId>,
        effects: &mut Vec<Effect>,
    ) -> Result<()> {
        let from = panel.focused();
        self.backspace_down = false;
        let commit = match to {
            Some(id) => panel.focus(id)?,
            None => panel.blur_all()?,
        };
        effects.extend(commit.map(Effect::from));
        if from != panel.focused() {
            effects.push(Effect::FocusChanged {
                from,
                to: panel.focused(),
            });
        }
        Ok(())
    }
}
