//! Discrete input events delivered to the router once per frame.

use crate::geometry::Point;
use crate::input::keyboard::{KeyCode, KeyEvent};

/// An input event.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// A key went down.
    Key(KeyEvent),
    /// A key was released. Only Backspace release matters to the engine.
    KeyRelease(KeyCode),
    /// A typed character, after keyboard layout and IME processing.
    Text(char),
    /// Clipboard text the host read in response to a paste shortcut.
    Paste(String),
    /// Pointer press, drag or release.
    Pointer(PointerEvent),
    /// Wheel movement in notches; positive scrolls towards the top.
    Wheel(f32),
}

impl InputEvent {
    /// Check if this is a key event.
    #[must_use]
    pub fn is_key(&self) -> bool {
        matches!(self, Self::Key(_))
    }

    /// Get the key event if this is one.
    #[must_use]
    pub fn key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Key(e) => Some(e),
            _ => None,
        }
    }

    /// Get the pointer event if this is one.
    #[must_use]
    pub fn pointer(&self) -> Option<&PointerEvent> {
        match self {
            Self::Pointer(e) => Some(e),
            _ => None,
        }
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(e: KeyEvent) -> Self {
        Self::Key(e)
    }
}

impl From<PointerEvent> for InputEvent {
    fn from(e: PointerEvent) -> Self {
        Self::Pointer(e)
    }
}

impl From<char> for InputEvent {
    fn from(c: char) -> Self {
        Self::Text(c)
    }
}

/// Kind of pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    /// Primary button pressed.
    Down,
    /// Pointer moved with the primary button held.
    Drag,
    /// Primary button released.
    Up,
}

/// A primary-button pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
}

impl PointerEvent {
    /// Create a press event.
    #[must_use]
    pub fn down(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Down,
            position: Point::new(x, y),
        }
    }

    /// Create a drag event.
    #[must_use]
    pub fn drag(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Drag,
            position: Point::new(x, y),
        }
    }

    /// Create a release event.
    #[must_use]
    pub fn up(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Up,
            position: Point::new(x, y),
        }
    }
}
