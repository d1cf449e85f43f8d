//! Text storage and cursor state for editable fields.
//!
//! Key types:
//!
//! - [`TextBuffer`]: character storage under a [`CapacityPolicy`]
//! - [`CursorModel`]: insertion offset plus an optional [`Selection`]
//!
//! # Examples
//!
//! ```
//! use editfield::text::{CapacityPolicy, TextBuffer};
//!
//! let mut buffer = TextBuffer::new(CapacityPolicy::fixed(4).unwrap());
//! buffer.insert_at(0, "123456").unwrap();
//! assert_eq!(buffer.text(), "1234");
//! ```

mod buffer;
mod cursor;
mod rope;

pub use buffer::{CapacityPolicy, DEFAULT_GROWTH_SLACK, DEFAULT_MAX_CAPACITY, TextBuffer};
pub use cursor::{CursorModel, Selection};
pub use rope::RopeWrapper;
