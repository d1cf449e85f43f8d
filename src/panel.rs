//! A set of fields with exclusive focus.
//!
//! Fields live in slots addressed by [`FieldId`]. Removed slots go on a
//! free list and are reused by later [`Panel::add`] calls, so an id is only
//! meaningful until its field is removed.
//!
//! At most one field is focused. Switching focus commits the old field
//! before the new one becomes editable.

use std::fmt;

use crate::error::{Error, Result};
use crate::event::{EVENT_FOCUS, emit_event};
use crate::field::Field;
use crate::geometry::Point;

/// Slot id of a field in a [`Panel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(u32);

impl FieldId {
    /// Build an id from a raw slot index.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Text committed by a field losing focus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commit {
    pub field: FieldId,
    pub text: String,
}

/// Owner of a group of fields.
#[derive(Clone, Debug, Default)]
pub struct Panel {
    slots: Vec<Option<Field>>,
    /// Stack of free slot indices for reuse.
    free_list: Vec<u32>,
    focused: Option<FieldId>,
}

impl Panel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, returning its id. A field that arrives focused stops
    /// editing without a commit; only [`Panel::focus`] grants focus.
    pub fn add(&mut self, mut field: Field) -> FieldId {
        field.end_editing();
        if let Some(free) = self.free_list.pop() {
            self.slots[free as usize] = Some(field);
            return FieldId(free);
        }
        let id = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
        self.slots.push(Some(field));
        FieldId(id)
    }

    /// Number of live fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn get(&self, id: FieldId) -> Option<&Field> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn get_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Ids of all live fields, in slot order.
    pub fn ids(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .filter_map(|(idx, _)| u32::try_from(idx).ok().map(FieldId))
    }

    /// The focused field's id.
    #[must_use]
    pub fn focused(&self) -> Option<FieldId> {
        self.focused
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut Field> {
        let id = self.focused?;
        self.get_mut(id)
    }

    /// Topmost field whose bounds contain `point`. Later fields are on top.
    #[must_use]
    pub fn field_at(&self, point: Point) -> Option<FieldId> {
        self.ids()
            .filter(|&id| self.get(id).is_some_and(|f| f.bounds().contains(point)))
            .last()
    }

    /// Focus `id`, committing the previously focused field first.
    ///
    /// Focusing the already focused field does nothing.
    pub fn focus(&mut self, id: FieldId) -> Result<Option<Commit>> {
        if self.get(id).is_none() {
            return Err(Error::UnknownField(id));
        }
        if self.focused == Some(id) {
            return Ok(None);
        }
        let commit = self.blur_all()?;
        if let Some(field) = self.get_mut(id) {
            field.focus();
        }
        self.focused = Some(id);
        emit_event(EVENT_FOCUS, &id.to_string());
        Ok(commit)
    }

    /// Commit and blur the focused field, if any.
    pub fn blur_all(&mut self) -> Result<Option<Commit>> {
        let Some(id) = self.focused else {
            return Ok(None);
        };
        let text = match self.get_mut(id) {
            Some(field) => field.blur()?,
            None => None,
        };
        self.focused = None;
        Ok(text.map(|text| Commit { field: id, text }))
    }

    /// Remove a field, releasing its storage and returning its content.
    ///
    /// A focused field is dropped without committing.
    pub fn remove(&mut self, id: FieldId) -> Result<String> {
        let field = self
            .slots
            .get_mut(id.index())
            .and_then(Option::take)
            .ok_or(Error::UnknownField(id))?;
        if self.focused == Some(id) {
            self.focused = None;
        }
        self.free_list.push(id.0);
        Ok(field.release())
    }
}
