//! Input events, key handling and the per-frame router.
//!
//! Hosts translate their window system's events into [`InputEvent`]s, queue
//! them on an [`InputRouter`] and call [`InputRouter::frame`] once per tick.

mod event;
mod keyboard;
pub mod repeat;
mod router;

pub use event::{InputEvent, PointerEvent, PointerKind};
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use repeat::{BlinkTimer, KeyRepeatTimer, RepeatState};
pub use router::{Effect, InputRouter};
