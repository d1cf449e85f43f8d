//! Keyboard event types.

use bitflags::bitflags;

bitflags! {
    /// Keyboard modifier flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Alt/Option key.
        const ALT = 0b0000_0010;
        /// Control key.
        const CTRL = 0b0000_0100;
        /// Super/Command/Windows key.
        const SUPER = 0b0000_1000;
    }
}

/// Keys the field engine reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Backspace key.
    Backspace,
    /// Delete (forward delete) key.
    Delete,
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Esc,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
    /// A character key, used with modifiers for shortcuts.
    ///
    /// Plain typed text arrives as [`InputEvent::Text`](super::InputEvent::Text)
    /// instead.
    Char(char),
}

impl KeyCode {
    /// Get the character if this is a character key.
    #[must_use]
    pub fn char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }
}

/// A keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code.
    pub code: KeyCode,
    /// Modifier keys held.
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// Create a new key event.
    #[must_use]
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key event with no modifiers.
    #[must_use]
    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    /// Create a Ctrl+key event.
    #[must_use]
    pub fn with_ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CTRL)
    }

    /// Create a Cmd/Super+key event.
    #[must_use]
    pub fn with_super(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SUPER)
    }

    /// Check if Ctrl or Cmd/Super is held, the platform "command" modifier.
    #[must_use]
    pub fn command(&self) -> bool {
        self.modifiers
            .intersects(KeyModifiers::CTRL | KeyModifiers::SUPER)
    }

    /// Check if this is the command modifier plus a letter, in either case.
    #[must_use]
    pub fn is_command(&self, letter: char) -> bool {
        self.command()
            && self
                .code
                .char()
                .is_some_and(|c| c.eq_ignore_ascii_case(&letter))
    }

    /// Check if this is Ctrl/Cmd+A.
    #[must_use]
    pub fn is_select_all(&self) -> bool {
        self.is_command('a')
    }

    /// Check if this is Ctrl/Cmd+C.
    #[must_use]
    pub fn is_copy(&self) -> bool {
        self.is_command('c')
    }

    /// Check if this is Ctrl/Cmd+X.
    #[must_use]
    pub fn is_cut(&self) -> bool {
        self.is_command('x')
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::key(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_event_creation() {
        let event = KeyEvent::key(KeyCode::Backspace);
        assert_eq!(event.code, KeyCode::Backspace);
        assert!(event.modifiers.is_empty());
        assert!(!event.command());
    }

    #[test]
    fn test_select_all_shortcuts() {
        assert!(KeyEvent::with_ctrl(KeyCode::Char('a')).is_select_all());
        assert!(KeyEvent::with_super(KeyCode::Char('A')).is_select_all());
        assert!(
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CTRL | KeyModifiers::SHIFT)
                .is_select_all()
        );
        assert!(!KeyEvent::key(KeyCode::Char('a')).is_select_all());
        assert!(!KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT).is_select_all());
    }

    #[test]
    fn test_clipboard_shortcuts() {
        assert!(KeyEvent::with_ctrl(KeyCode::Char('c')).is_copy());
        assert!(KeyEvent::with_super(KeyCode::Char('x')).is_cut());
        assert!(!KeyEvent::with_ctrl(KeyCode::Char('v')).is_copy());
    }

    #[test]
    fn test_key_code_checks() {
        assert_eq!(KeyCode::Char('q').char(), Some('q'));
        assert_eq!(KeyCode::Esc.char(), None);
    }
}
