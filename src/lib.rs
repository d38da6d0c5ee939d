//! Month-view calendar grid computation and rendering.
//!
//! Features:
//! - Sunday-first month grids padded with adjacent-month days to whole weeks
//! - Date normalization with month/day rollover
//! - Month navigation with explicit state
//! - Terminal and HTML rendering

pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod types;
