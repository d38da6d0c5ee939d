//! Month grid calculation and calendar date arithmetic.
//!
//! Weeks are Sunday-first and the calendar is proleptic Gregorian.

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::error::CalendarError;
use crate::types::{
    CalendarDate, DayCell, MAX_GRID_CELLS, MONTH_NAMES, MonthGrid, MonthLabel, Origin,
};

/// Check if a year is a leap year (divisible by 4, except centuries unless divisible by 400).
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Number of days in a month, month given as a zero-based index.
///
/// Equivalent to taking "day 0" of the following month. Indexes past 11 wrap
/// within the same year, as in [`first_weekday`].
pub fn days_in_month(year: i32, month_index: u32) -> u32 {
    match month_index % 12 {
        1 if is_leap_year(year) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Weekday index (0 = Sunday) of day 1 of the month, via Zeller's congruence.
///
/// Indexes past 11 wrap within the same year.
pub fn first_weekday(year: i32, month_index: u32) -> u32 {
    let month = i64::from(month_index % 12) + 1;
    let m = if month < 3 { month + 12 } else { month };
    let year_i = if month < 3 {
        i64::from(year) - 1
    } else {
        i64::from(year)
    };
    let k = year_i.rem_euclid(100);
    let j = year_i.div_euclid(100);

    // h: 0=Sat, 1=Sun, 2=Mon, 3=Tue, 4=Wed, 5=Thu, 6=Fri
    let h = (1 + (13 * (m + 1)) / 5 + k + k / 4 + j.div_euclid(4) - 2 * j).rem_euclid(7);
    ((h + 6) % 7) as u32
}

/// Weekday index (0 = Sunday) of the last day of the month.
pub fn last_weekday(year: i32, month_index: u32) -> u32 {
    (first_weekday(year, month_index) + days_in_month(year, month_index) - 1) % 7
}

/// Compute the label and Sunday-first grid for the month containing `reference`.
///
/// The grid always spans whole weeks: trailing days of the previous month fill
/// the first week, leading days of the next month fill the last one.
pub fn compute_month_grid(reference: CalendarDate) -> (MonthLabel, MonthGrid) {
    let year = reference.year();
    let month = reference.month_index();

    let days_in_current = days_in_month(year, month);
    let days_to_skip_before = first_weekday(year, month);
    let days_to_skip_after = 6 - last_weekday(year, month);

    let days_in_previous = if month == 0 {
        days_in_month(year - 1, 11)
    } else {
        days_in_month(year, month - 1)
    };

    debug!(
        year,
        month,
        days_to_skip_before,
        days_in_current,
        days_to_skip_after,
        "computing month grid"
    );

    let total = days_to_skip_before + days_in_current + days_to_skip_after;
    let mut cells = Vec::with_capacity(MAX_GRID_CELLS);

    for i in 1..=total {
        let cell = if i <= days_to_skip_before {
            // Counting back from day 0, the last day of the previous month
            DayCell {
                day: days_in_previous - (days_to_skip_before - i),
                origin: Origin::Previous,
            }
        } else if i <= days_to_skip_before + days_in_current {
            DayCell {
                day: i - days_to_skip_before,
                origin: Origin::Current,
            }
        } else {
            DayCell {
                day: i - days_to_skip_before - days_in_current,
                origin: Origin::Next,
            }
        };
        cells.push(cell);
    }

    let label = MonthLabel {
        month_name: MONTH_NAMES[month as usize],
        year,
    };

    (
        label,
        MonthGrid {
            cells,
            days_to_skip_before,
            days_in_month: days_in_current,
            days_to_skip_after,
        },
    )
}

impl CalendarDate {
    /// Build a date from exact parts, rejecting days that do not exist.
    pub fn new(year: i32, month_index: u32, day: u32) -> Result<Self, CalendarError> {
        month_index
            .checked_add(1)
            .and_then(|month| NaiveDate::from_ymd_opt(year, month, day))
            .map(CalendarDate)
            .ok_or_else(|| {
                CalendarError::InvalidReferenceDate(format!(
                    "{:04}-{:02}-{:02}",
                    year,
                    u64::from(month_index) + 1,
                    day
                ))
            })
    }

    /// Build a date from parts that may overflow, rolling them over.
    ///
    /// Month -1 is December of the previous year, day 0 is the last day of
    /// the previous month, and days past the end roll into following months.
    pub fn normalized(year: i32, month_index: i64, day: i64) -> Result<Self, CalendarError> {
        let out_of_range = || CalendarError::OutOfRange {
            year: i64::from(year),
            month_index,
            day,
        };

        let total_months = i64::from(year)
            .checked_mul(12)
            .and_then(|m| m.checked_add(month_index))
            .ok_or_else(out_of_range)?;
        let norm_year = i32::try_from(total_months.div_euclid(12)).map_err(|_| out_of_range())?;
        let norm_month = (total_months.rem_euclid(12) + 1) as u32;

        let first = NaiveDate::from_ymd_opt(norm_year, norm_month, 1).ok_or_else(out_of_range)?;
        let offset = day.checked_sub(1).ok_or_else(out_of_range)?;
        let date = if offset >= 0 {
            first.checked_add_days(Days::new(offset as u64))
        } else {
            first.checked_sub_days(Days::new(offset.unsigned_abs()))
        };

        date.map(CalendarDate).ok_or_else(out_of_range)
    }

    /// Day 1 of the month `delta` months away.
    pub fn shift_months(&self, delta: i32) -> Result<Self, CalendarError> {
        Self::normalized(
            self.year(),
            i64::from(self.month_index()) + i64::from(delta),
            1,
        )
    }
}

/// The month currently on display, moved explicitly by navigation calls.
#[derive(Debug, Clone)]
pub struct MonthNavigator {
    current: CalendarDate,
}

impl MonthNavigator {
    pub fn new(reference: CalendarDate) -> Self {
        MonthNavigator { current: reference }
    }

    pub fn current(&self) -> CalendarDate {
        self.current
    }

    pub fn view(&self) -> (MonthLabel, MonthGrid) {
        compute_month_grid(self.current)
    }

    pub fn previous(&mut self) -> Result<CalendarDate, CalendarError> {
        self.shift(-1)
    }

    pub fn next(&mut self) -> Result<CalendarDate, CalendarError> {
        self.shift(1)
    }

    /// Move by `months`; on error the displayed month is unchanged.
    pub fn shift(&mut self, months: i32) -> Result<CalendarDate, CalendarError> {
        let target = self.current.shift_months(months)?;
        debug!(from = %self.current, to = %target, "navigating");
        self.current = target;
        Ok(target)
    }

    pub fn reset(&mut self, date: CalendarDate) {
        self.current = date;
    }
}
