//! Fuzz target for theme color parsing.
//!
//! Arbitrary strings must never panic `FieldTheme::set_hex`, and any color
//! that parses must survive a Display round trip.

#![no_main]

use editfield::Rgba;
use editfield::field::{ColorRole, FieldTheme};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let mut theme = FieldTheme::default();
    let before = theme;
    if !theme.set_hex(ColorRole::Selection, data) {
        assert_eq!(theme, before, "failed parse must leave the theme unchanged");
        return;
    }

    let color = theme.color(ColorRole::Selection);
    let printed = color.to_string();
    let reparsed = Rgba::from_hex(&printed).expect("printed colors always parse");
    assert_eq!(reparsed.to_rgb_u8(), color.to_rgb_u8());

    // Char-boundary-safe prefixes exercise the length checks.
    for (idx, _) in data.char_indices().take(10) {
        let _ = Rgba::from_hex(&data[..idx]);
    }
});
