//! Type definitions and constants for month grid computation and rendering.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;

/// Output format for the rendered month.
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain terminal grid.
    Text,
    /// `datedreamer__calendar` HTML markup.
    Html,
}

/// A valid local calendar day.
///
/// The month is stored zero-based (0 = January .. 11 = December). A value of
/// this type always names a real date; use [`CalendarDate::normalized`] to
/// build one from out-of-range parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(pub(crate) NaiveDate);

impl CalendarDate {
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Zero-based month index (0-11).
    pub fn month_index(&self) -> u32 {
        self.0.month0()
    }

    /// One-based month number (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Day of week with 0 = Sunday .. 6 = Saturday.
    pub fn weekday_index(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Title of a displayed month, e.g. "February 2024".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLabel {
    pub month_name: &'static str,
    pub year: i32,
}

impl fmt::Display for MonthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name, self.year)
    }
}

/// Which month a displayed day belongs to, relative to the displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    Previous,
    Current,
    Next,
}

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub origin: Origin,
}

impl DayCell {
    pub fn is_current(&self) -> bool {
        self.origin == Origin::Current
    }
}

/// Whole weeks of day cells covering one month, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub(crate) cells: Vec<DayCell>,
    pub(crate) days_to_skip_before: u32,
    pub(crate) days_in_month: u32,
    pub(crate) days_to_skip_after: u32,
}

impl MonthGrid {
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rows of seven cells, Sunday through Saturday.
    pub fn weeks(&self) -> std::slice::Chunks<'_, DayCell> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// Number of trailing days shown from the previous month.
    pub fn days_to_skip_before(&self) -> u32 {
        self.days_to_skip_before
    }

    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    /// Number of leading days shown from the next month.
    pub fn days_to_skip_after(&self) -> u32 {
        self.days_to_skip_after
    }

    pub fn count(&self, origin: Origin) -> usize {
        self.cells.iter().filter(|c| c.origin == origin).count()
    }
}

/// Rendering context for the presentation layer.
#[derive(Clone, Debug)]
pub struct CalContext {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Output format.
    pub format: OutputFormat,
    /// Today's date, used when no reference date is given.
    pub today: NaiveDate,
    /// Months to move away from the reference date before rendering.
    pub shift: i32,
    /// Whether to read navigation commands from stdin.
    pub interactive: bool,
}

pub const DAYS_PER_WEEK: usize = 7;
pub const MAX_GRID_CELLS: usize = 42; // 6 weeks x 7 days
pub const GRID_WIDTH: usize = 20;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Sunday-first
pub const WEEKDAY_SHORT_NAMES: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub const COLOR_ENABLED_BY_DEFAULT: bool = true;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_DIM: &str = "\x1b[2m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
