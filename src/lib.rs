//! `editfield` - Text-entry field engine
//!
//! Editable single-line and multi-line fields for immediate-mode UIs:
//! capacity-policied text storage, cursor and selection, pointer hit-testing,
//! scrolling and backspace auto-repeat. The engine draws nothing; it consumes
//! a glyph-measurement capability and produces drawing geometry and plain
//! committed text.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use editfield::{Field, InputRouter, MonospaceMetrics, Panel, PointerEvent, Rect};
//! use editfield::text::CapacityPolicy;
//!
//! let mut panel = Panel::new();
//! let title = panel.add(Field::single_line(
//!     Rect::new(10.0, 10.0, 200.0, 30.0),
//!     CapacityPolicy::fixed(63).unwrap(),
//! ));
//!
//! let metrics = MonospaceMetrics::default();
//! let mut router = InputRouter::new();
//! router.push(PointerEvent::down(20.0, 20.0));
//! for c in "Intro".chars() {
//!     router.push(c);
//! }
//! router.frame(&mut panel, Duration::from_millis(16), &metrics).unwrap();
//!
//! assert_eq!(panel.get(title).unwrap().text(), "Intro");
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional pixel/column casts
#![allow(clippy::cast_sign_loss)] // Column math is clamped before casting
#![allow(clippy::cast_precision_loss)] // Line counts as f32 coordinates
#![allow(clippy::module_name_repetitions)] // Allow FieldOptions, FieldTheme etc
#![allow(clippy::struct_excessive_bools)] // Field state needs multiple flags
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::float_cmp)] // Exact pixel values in tests

pub mod color;
pub mod error;
pub mod event;
pub mod field;
pub mod geometry;
pub mod input;
pub mod metrics;
pub mod panel;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use color::Rgba;
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use geometry::{Point, Rect, Size};

// Re-export field types
pub use field::{
    Field, FieldKind, FieldOptions, FieldTheme, HitMode, HitTester, RenderGeometry, ScrollModel,
    Scrollbar, TextRun,
};
pub use panel::{FieldId, Panel};

// Re-export input types
pub use input::{
    Effect, InputEvent, InputRouter, KeyCode, KeyEvent, KeyModifiers, KeyRepeatTimer,
    PointerEvent, RepeatState,
};

// Re-export commonly used types
pub use metrics::{GlyphMetrics, MonospaceMetrics};
pub use text::{CapacityPolicy, CursorModel, Selection, TextBuffer};
pub use unicode::WidthMethod;
