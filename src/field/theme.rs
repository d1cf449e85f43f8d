//! Colors attached to render geometry.

use crate::color::Rgba;

/// Color roles of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Background,
    Text,
    Placeholder,
    Selection,
    Cursor,
    ScrollbarTrack,
    ScrollbarThumb,
}

/// Field color palette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldTheme {
    pub background: Rgba,
    pub text: Rgba,
    pub placeholder: Rgba,
    pub selection: Rgba,
    pub cursor: Rgba,
    pub scrollbar_track: Rgba,
    pub scrollbar_thumb: Rgba,
}

impl Default for FieldTheme {
    fn default() -> Self {
        Self {
            background: Rgba::from_rgb_u8(0x12, 0x12, 0x15),
            text: Rgba::from_rgb_u8(0xE6, 0xE6, 0xEA),
            placeholder: Rgba::from_rgb_u8(0x6C, 0x6C, 0x78),
            selection: Rgba::from_rgb_u8(0x2E, 0x3F, 0x6E),
            cursor: Rgba::WHITE,
            scrollbar_track: Rgba::from_rgb_u8(0x1E, 0x1F, 0x26),
            scrollbar_thumb: Rgba::from_rgb_u8(0x4A, 0x4B, 0x57),
        }
    }
}

impl FieldTheme {
    /// Get the color for a role.
    #[must_use]
    pub fn color(&self, role: ColorRole) -> Rgba {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Text => self.text,
            ColorRole::Placeholder => self.placeholder,
            ColorRole::Selection => self.selection,
            ColorRole::Cursor => self.cursor,
            ColorRole::ScrollbarTrack => self.scrollbar_track,
            ColorRole::ScrollbarThumb => self.scrollbar_thumb,
        }
    }

    /// Set a role from a hex string. Returns `false` and leaves the theme
    /// unchanged if the string does not parse.
    pub fn set_hex(&mut self, role: ColorRole, hex: &str) -> bool {
        let Some(color) = Rgba::from_hex(hex) else {
            return false;
        };
        let slot = match role {
            ColorRole::Background => &mut self.background,
            ColorRole::Text => &mut self.text,
            ColorRole::Placeholder => &mut self.placeholder,
            ColorRole::Selection => &mut self.selection,
            ColorRole::Cursor => &mut self.cursor,
            ColorRole::ScrollbarTrack => &mut self.scrollbar_track,
            ColorRole::ScrollbarThumb => &mut self.scrollbar_thumb,
        };
        *slot = color;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let theme = FieldTheme::default();
        assert_eq!(theme.color(ColorRole::Background).to_string(), "#121215");
        assert_eq!(theme.color(ColorRole::Cursor), Rgba::WHITE);
    }

    #[test]
    fn test_set_hex() {
        let mut theme = FieldTheme::default();
        assert!(theme.set_hex(ColorRole::Selection, "#191A1F"));
        assert_eq!(theme.selection.to_string(), "#191A1F");
        assert!(!theme.set_hex(ColorRole::Selection, "nope"));
        assert_eq!(theme.selection.to_string(), "#191A1F");
    }
}
