//! Test fixtures and helpers for field engine tests.
//!
//! - [`MockInput`] - Scripted input frames driven through an `InputRouter`
//! - [`init_logging`] - `tracing` subscriber for `--nocapture` runs

#![allow(clippy::nursery)] // Test fixtures prioritize clarity over pedantry
#![allow(clippy::pedantic)] // Test fixtures prioritize clarity over pedantry

pub mod mock_input;

pub use mock_input::*;

use tracing::Level;

/// Install a test-writer subscriber once per test binary.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_test_writer()
        .try_init();
}
