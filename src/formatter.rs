//! Month rendering for terminals and HTML hosts.

use std::io::{BufRead, Write};

use chrono::Datelike;
use tracing::{debug, warn};
use unicode_width::UnicodeWidthStr;

use crate::calendar::{MonthNavigator, compute_month_grid};
use crate::error::CalendarError;
use crate::types::{
    COLOR_DIM, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, CalContext,
    CalendarDate, DayCell, GRID_WIDTH, MonthGrid, MonthLabel, Origin, OutputFormat,
    WEEKDAY_SHORT_NAMES,
};

const HTML_PREFIX: &str = "datedreamer__calendar";

/// Format month header with navigation markers and optional color.
///
/// The label is centered between `<` and `>` so the line is exactly `width` wide.
pub fn format_month_header(label: &MonthLabel, width: usize, color: bool) -> String {
    let inner = center_text(&label.to_string(), width.saturating_sub(2));
    if color {
        format!("<{}{}{}>", COLOR_TEAL, inner, COLOR_RESET)
    } else {
        format!("<{}>", inner)
    }
}

/// Center text within a specified width, accounting for Unicode character widths.
fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Format the Sunday-first weekday header row.
pub fn format_weekday_headers(ctx: &CalContext) -> String {
    let names = WEEKDAY_SHORT_NAMES.join(" ");
    if ctx.color {
        format!("{}{}{}", COLOR_SAND_YELLOW, names, COLOR_RESET)
    } else {
        names
    }
}

/// Day of `today` if it falls inside the month of `reference`.
pub fn today_in_month(ctx: &CalContext, reference: CalendarDate) -> Option<u32> {
    (ctx.today.year() == reference.year() && ctx.today.month0() == reference.month_index())
        .then(|| ctx.today.day())
}

/// Format day cell with color highlighting.
///
/// Color priority: today > adjacent month > regular
fn format_day(ctx: &CalContext, cell: &DayCell, today: Option<u32>, is_last: bool) -> String {
    let day_str = format!("{:>2}", cell.day);

    let formatted = if !ctx.color {
        day_str
    } else if cell.is_current() && today == Some(cell.day) {
        format!("{}{}{}", COLOR_REVERSE, day_str, COLOR_RESET)
    } else if !cell.is_current() {
        format!("{}{}{}", COLOR_DIM, day_str, COLOR_RESET)
    } else {
        day_str
    };

    if is_last {
        formatted
    } else {
        format!("{} ", formatted)
    }
}

/// Format month as grid of lines: header, weekday row, then one line per week.
pub fn format_month_grid(
    ctx: &CalContext,
    label: &MonthLabel,
    grid: &MonthGrid,
    today: Option<u32>,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(8);

    lines.push(format_month_header(label, GRID_WIDTH, ctx.color));
    lines.push(format_weekday_headers(ctx));

    for week in grid.weeks() {
        let mut line = String::new();
        for (i, cell) in week.iter().enumerate() {
            line.push_str(&format_day(ctx, cell, today, i + 1 == week.len()));
        }
        lines.push(line);
    }

    lines
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn day_classes(cell: &DayCell, today: Option<u32>) -> String {
    let mut classes = format!("{}_day", HTML_PREFIX);
    match cell.origin {
        Origin::Previous => classes.push_str(&format!(" {}_day--prev", HTML_PREFIX)),
        Origin::Next => classes.push_str(&format!(" {}_day--next", HTML_PREFIX)),
        Origin::Current if today == Some(cell.day) => {
            classes.push_str(&format!(" {}_day--today", HTML_PREFIX))
        }
        Origin::Current => {}
    }
    classes
}

/// Render the month as `datedreamer__calendar` markup.
pub fn render_html(label: &MonthLabel, grid: &MonthGrid, today: Option<u32>) -> String {
    let mut html = String::new();

    html.push_str(&format!("<div class=\"{}\">\n", HTML_PREFIX));
    html.push_str(&format!("  <div class=\"{}_header\">\n", HTML_PREFIX));
    html.push_str(&format!(
        "    <button class=\"{}_prev\" aria-label=\"Previous\"><i class=\"fa-solid fa-chevron-left\"></i></button>\n",
        HTML_PREFIX
    ));
    html.push_str(&format!(
        "    <span class=\"{}_title\">{}</span>\n",
        HTML_PREFIX,
        escape_html(&label.to_string())
    ));
    html.push_str(&format!(
        "    <button class=\"{}_next\" aria-label=\"Next\"><i class=\"fa-solid fa-chevron-right\"></i></button>\n",
        HTML_PREFIX
    ));
    html.push_str("  </div>\n");

    html.push_str(&format!("  <div class=\"{}_days\">\n", HTML_PREFIX));
    for name in WEEKDAY_SHORT_NAMES {
        html.push_str(&format!(
            "    <div class=\"{p}_day {p}_day-header\">{}</div>\n",
            name,
            p = HTML_PREFIX
        ));
    }
    for cell in grid.cells() {
        html.push_str(&format!(
            "    <div class=\"{}\"><button>{}</button></div>\n",
            day_classes(cell, today),
            cell.day
        ));
    }
    html.push_str("  </div>\n");
    html.push_str("</div>\n");

    html
}

/// Render the month containing `reference` in the context's output format.
pub fn format_month(ctx: &CalContext, reference: CalendarDate) -> String {
    let (label, grid) = compute_month_grid(reference);
    let today = today_in_month(ctx, reference);

    match ctx.format {
        OutputFormat::Text => {
            let mut out = format_month_grid(ctx, &label, &grid, today).join("\n");
            out.push('\n');
            out
        }
        OutputFormat::Html => render_html(&label, &grid, today),
    }
}

/// Print the month containing `reference`.
pub fn print_month(ctx: &CalContext, reference: CalendarDate) {
    print!("{}", format_month(ctx, reference));
}

/// Navigation command read in interactive mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavCommand {
    Previous,
    Next,
    Today,
    Quit,
}

/// Parse a navigation command (case-insensitive, surrounding whitespace ignored).
pub fn parse_command(line: &str) -> Option<NavCommand> {
    match line.trim().to_lowercase().as_str() {
        "p" | "prev" | "previous" => Some(NavCommand::Previous),
        "n" | "next" => Some(NavCommand::Next),
        "t" | "today" => Some(NavCommand::Today),
        "q" | "quit" | "exit" => Some(NavCommand::Quit),
        _ => None,
    }
}

/// Render `start`, then re-render after each command read from `input` until
/// `q` or end of input.
pub fn run_interactive<R: BufRead, W: Write>(
    ctx: &CalContext,
    start: CalendarDate,
    input: R,
    mut output: W,
) -> Result<(), CalendarError> {
    let mut navigator = MonthNavigator::new(start);
    write!(output, "{}", format_month(ctx, navigator.current()))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let moved = match parse_command(&line) {
            Some(NavCommand::Quit) => break,
            Some(NavCommand::Previous) => navigator.previous(),
            Some(NavCommand::Next) => navigator.next(),
            Some(NavCommand::Today) => {
                navigator.reset(CalendarDate::from(ctx.today));
                Ok(navigator.current())
            }
            None => {
                warn!(command = %line.trim(), "unknown navigation command");
                writeln!(output, "Unknown command: {}", line.trim())?;
                continue;
            }
        };

        match moved {
            Ok(date) => {
                debug!(%date, "displaying month");
                writeln!(output)?;
                write!(output, "{}", format_month(ctx, date))?;
            }
            Err(e) => writeln!(output, "{}", e)?,
        }
    }

    output.flush()?;
    Ok(())
}
