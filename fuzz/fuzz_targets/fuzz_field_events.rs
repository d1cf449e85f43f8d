//! Fuzz target for field event handling.
//!
//! Drives arbitrary event streams through a two-field panel and checks the
//! cursor/selection invariants after every frame. Growth failures are the
//! only acceptable error.

#![no_main]

use std::time::Duration;

use arbitrary::Arbitrary;
use editfield::input::{InputEvent, InputRouter, KeyCode, KeyEvent, KeyModifiers, PointerEvent};
use editfield::text::CapacityPolicy;
use editfield::{Error, Field, FieldOptions, MonospaceMetrics, Panel, Rect};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum FuzzKey {
    Backspace,
    Delete,
    Enter,
    Esc,
    Left,
    Right,
    Home,
    End,
    Char(char),
}

#[derive(Arbitrary, Debug)]
enum FuzzEvent {
    Key { key: FuzzKey, ctrl: bool },
    Release(FuzzKey),
    Text(char),
    Paste(String),
    Down(i16, i16),
    Drag(i16, i16),
    Up,
    Wheel(i8),
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    fixed_max: u8,
    growable_initial: u8,
    numeric: bool,
    frames: Vec<(Vec<FuzzEvent>, u8)>,
}

fn key_code(key: &FuzzKey) -> KeyCode {
    match key {
        FuzzKey::Backspace => KeyCode::Backspace,
        FuzzKey::Delete => KeyCode::Delete,
        FuzzKey::Enter => KeyCode::Enter,
        FuzzKey::Esc => KeyCode::Esc,
        FuzzKey::Left => KeyCode::Left,
        FuzzKey::Right => KeyCode::Right,
        FuzzKey::Home => KeyCode::Home,
        FuzzKey::End => KeyCode::End,
        FuzzKey::Char(c) => KeyCode::Char(*c),
    }
}

fn to_event(event: FuzzEvent) -> InputEvent {
    match event {
        FuzzEvent::Key { key, ctrl } => {
            let modifiers = if ctrl {
                KeyModifiers::CTRL
            } else {
                KeyModifiers::empty()
            };
            KeyEvent::new(key_code(&key), modifiers).into()
        }
        FuzzEvent::Release(key) => InputEvent::KeyRelease(key_code(&key)),
        FuzzEvent::Text(c) => InputEvent::Text(c),
        FuzzEvent::Paste(text) => InputEvent::Paste(text),
        FuzzEvent::Down(x, y) => PointerEvent::down(f32::from(x), f32::from(y)).into(),
        FuzzEvent::Drag(x, y) => PointerEvent::drag(f32::from(x), f32::from(y)).into(),
        FuzzEvent::Up => PointerEvent::up(0.0, 0.0).into(),
        FuzzEvent::Wheel(notches) => InputEvent::Wheel(f32::from(notches)),
    }
}

fuzz_target!(|input: FuzzInput| {
    let metrics = MonospaceMetrics::default();
    let mut panel = Panel::new();
    let options = FieldOptions {
        max_capacity: 4096,
        ..FieldOptions::default()
    };
    let fixed = CapacityPolicy::fixed(usize::from(input.fixed_max).max(1)).unwrap();
    let growable = CapacityPolicy::growable(usize::from(input.growable_initial).max(1)).unwrap();
    panel.add(
        Field::single_line(Rect::new(0.0, 0.0, 200.0, 30.0), fixed)
            .with_numeric_only(input.numeric)
            .with_placeholder("120"),
    );
    panel.add(
        Field::multi_line(Rect::new(0.0, 40.0, 200.0, 120.0), growable).with_options(options),
    );

    let mut router = InputRouter::new();
    for (events, dt) in input.frames.into_iter().take(64) {
        for event in events.into_iter().take(64) {
            router.push(to_event(event));
        }
        match router.frame(&mut panel, Duration::from_millis(u64::from(dt)), &metrics) {
            Ok(_) => {}
            Err(Error::CapacityExhausted { .. }) => return,
            Err(err) => panic!("unexpected error: {err}"),
        }

        let ids: Vec<_> = panel.ids().collect();
        for id in ids {
            let field = panel.get(id).unwrap();
            assert!(field.cursor() <= field.len());
            assert!(field.len() <= field.capacity());
            if let Some(sel) = field.selection() {
                assert!(sel.start() < sel.end() && sel.end() <= field.len());
            }
            assert!(field.is_focused() == (panel.focused() == Some(id)));
        }
    }
});
