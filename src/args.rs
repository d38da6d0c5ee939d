//! Command-line argument parsing using clap.
//!
//! Arguments: `[date]` where date is ISO-parseable (`2024-02-01`, `2024-02`,
//! or an RFC 3339 timestamp).

use chrono::{DateTime, NaiveDate};
use clap::{ArgAction, Parser, ValueHint};
use std::io::IsTerminal;
use tracing::warn;

use crate::error::CalendarError;
use crate::types::{COLOR_ENABLED_BY_DEFAULT, CalContext, CalendarDate, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "datedreamer")]
#[command(about = "Displays a month-view calendar grid", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Reference date (YYYY-MM-DD, YYYY-MM or RFC 3339); defaults to today.
    #[arg(index = 1, value_name = "date", value_hint = ValueHint::Other)]
    pub date: Option<String>,

    /// Months to move from the reference date (negative moves back).
    #[arg(
        short = 's',
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        help_heading = "Calendar options",
        value_name = "months"
    )]
    pub shift: i32,

    /// Output format (text or html).
    #[arg(
        short = 'f',
        long,
        default_value = "text",
        help_heading = "Output options",
        value_name = "format"
    )]
    pub format: OutputFormat,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub no_color: bool,

    /// Navigate months interactively (p = previous, n = next, t = today, q = quit).
    #[arg(short = 'i', long, help_heading = "Display options")]
    pub interactive: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short = 'v', long, action = ArgAction::Count, help_heading = "Output options")]
    pub verbose: u8,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Display the month containing a date as a Sunday-first grid.

Days from the previous and next month fill the first and last week.

Examples:
  datedreamer                  Display current month
  datedreamer 2024-02-01       Display February 2024
  datedreamer 2024-02 -s -1    Display January 2024
  datedreamer -f html          Print the month as HTML markup
  datedreamer -i               Navigate months from stdin";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

/// Reference date as supplied by a caller, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// ISO-parseable text.
    Text(String),
    /// An already-typed date.
    Native(NaiveDate),
}

impl DateInput {
    /// Resolve to a calendar date; the grid calculator only ever sees the result.
    pub fn resolve(self) -> Result<CalendarDate, CalendarError> {
        match self {
            DateInput::Native(date) => Ok(CalendarDate::from(date)),
            DateInput::Text(text) => parse_iso_date(&text).map(CalendarDate::from).ok_or_else(|| {
                warn!(input = %text, "rejected reference date");
                CalendarError::InvalidReferenceDate(text)
            }),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Native(date)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

/// Parse `YYYY-MM-DD`, `YYYY-MM` (day 1) or an RFC 3339 date-time.
fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", text), "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.date_naive())
}

impl CalContext {
    pub fn new(args: &Args) -> Result<Self, CalendarError> {
        let today = get_today_date();

        let color = !args.no_color
            && COLOR_ENABLED_BY_DEFAULT
            && args.format == OutputFormat::Text
            && std::io::stdout().is_terminal();

        if args.interactive && args.format == OutputFormat::Html {
            return Err(CalendarError::InvalidArgument(
                "Option -i requires text output".to_string(),
            ));
        }

        Ok(CalContext {
            color,
            format: args.format,
            today,
            shift: args.shift,
            interactive: args.interactive,
        })
    }
}

/// Get today's date, respecting DATEDREAMER_TEST_TIME environment variable for testing.
pub fn get_today_date() -> NaiveDate {
    if let Ok(test_time) = std::env::var("DATEDREAMER_TEST_TIME")
        && let Ok(date) = NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

/// Resolve the date to display from the positional argument and --shift.
pub fn get_display_date(args: &Args, ctx: &CalContext) -> Result<CalendarDate, CalendarError> {
    let input = match &args.date {
        Some(text) => DateInput::Text(text.clone()),
        None => DateInput::Native(ctx.today),
    };
    let reference = input.resolve()?;

    if ctx.shift == 0 {
        Ok(reference)
    } else {
        reference.shift_months(ctx.shift)
    }
}
