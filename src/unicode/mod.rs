//! Unicode utilities for input filtering and display width.

mod filter;
mod width;

pub use filter::{InputRules, is_printable, normalize_newlines};
pub use width::{WidthMethod, display_width, display_width_char};
