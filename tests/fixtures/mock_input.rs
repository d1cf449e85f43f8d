//! Mock input provider for scripted test scenarios.
//!
//! [`MockInput`] collects input events into frames. Each frame is pushed to
//! an [`InputRouter`] and applied with its own delta, the way a host's event
//! loop would deliver it.

#![allow(dead_code)] // Shared test helpers; not every integration test uses every input helper

use std::time::Duration;

use editfield::input::{Effect, InputEvent, InputRouter, KeyCode, KeyEvent, PointerEvent};
use editfield::{GlyphMetrics, Panel, Result};

/// One frame of scripted input.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub events: Vec<InputEvent>,
    pub dt: Duration,
}

/// A scripted sequence of input frames.
///
/// # Example
///
/// ```ignore
/// let mut input = MockInput::new();
/// input.click(20.0, 20.0).type_text("120").key(KeyCode::Enter);
/// let effects = input.run(&mut panel, &metrics).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockInput {
    frames: Vec<Frame>,
    current: Vec<InputEvent>,
}

impl MockInput {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw event in the current frame.
    pub fn event(&mut self, event: impl Into<InputEvent>) -> &mut Self {
        self.current.push(event.into());
        self
    }

    /// Queue each character of `text` as typed input.
    pub fn type_text(&mut self, text: &str) -> &mut Self {
        for c in text.chars() {
            self.event(c);
        }
        self
    }

    pub fn paste(&mut self, text: &str) -> &mut Self {
        self.event(InputEvent::Paste(text.to_string()))
    }

    /// Queue a key press with no modifiers.
    pub fn key(&mut self, code: KeyCode) -> &mut Self {
        self.event(KeyEvent::key(code))
    }

    /// Queue Ctrl + `letter`.
    pub fn ctrl(&mut self, letter: char) -> &mut Self {
        self.event(KeyEvent::with_ctrl(KeyCode::Char(letter)))
    }

    pub fn release(&mut self, code: KeyCode) -> &mut Self {
        self.event(InputEvent::KeyRelease(code))
    }

    /// Queue a press at `(x, y)`.
    pub fn click(&mut self, x: f32, y: f32) -> &mut Self {
        self.event(PointerEvent::down(x, y))
    }

    /// Queue press, drag and release.
    pub fn drag(&mut self, from: (f32, f32), to: (f32, f32)) -> &mut Self {
        self.event(PointerEvent::down(from.0, from.1))
            .event(PointerEvent::drag(to.0, to.1))
            .event(PointerEvent::up(to.0, to.1))
    }

    pub fn wheel(&mut self, notches: f32) -> &mut Self {
        self.event(InputEvent::Wheel(notches))
    }

    /// Close the current frame with delta `dt`.
    pub fn frame(&mut self, dt: Duration) -> &mut Self {
        let events = std::mem::take(&mut self.current);
        self.frames.push(Frame { events, dt });
        self
    }

    /// Close `count` empty frames of `dt` each (time passing, no input).
    pub fn idle(&mut self, count: usize, dt: Duration) -> &mut Self {
        self.frame(dt);
        for _ in 1..count {
            self.frames.push(Frame {
                events: Vec::new(),
                dt,
            });
        }
        self
    }

    /// Number of closed frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Drive every frame through a fresh router, collecting effects.
    ///
    /// An unclosed trailing frame is closed with a zero delta.
    pub fn run(&mut self, panel: &mut Panel, metrics: &dyn GlyphMetrics) -> Result<Vec<Effect>> {
        if !self.current.is_empty() {
            self.frame(Duration::ZERO);
        }
        let mut router = InputRouter::new();
        let mut effects = Vec::new();
        for frame in self.frames.drain(..) {
            for event in frame.events {
                router.push(event);
            }
            effects.extend(router.frame(panel, frame.dt, metrics)?);
        }
        Ok(effects)
    }
}
