//! Error types raised at the input boundary and by navigation.
//!
//! Grid computation itself never fails; these errors are produced before a
//! reference date reaches the calculator.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("Invalid reference date: {0}")]
    InvalidReferenceDate(String),

    #[error("Date out of range: year {year}, month index {month_index}, day {day}")]
    OutOfRange {
        year: i64,
        month_index: i64,
        day: i64,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
