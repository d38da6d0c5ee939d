//! Integration tests for input resolution, grid computation and rendering together.

use chrono::NaiveDate;
use unicode_width::UnicodeWidthStr;

use datedreamer::args::DateInput;
use datedreamer::calendar::{MonthNavigator, compute_month_grid, days_in_month};
use datedreamer::formatter::{format_month, format_month_grid};
use datedreamer::types::{CalContext, CalendarDate, Origin, OutputFormat};

fn test_context() -> CalContext {
    CalContext {
        color: false,
        format: OutputFormat::Text,
        today: NaiveDate::from_ymd_opt(2024, 2, 18).unwrap(),
        shift: 0,
        interactive: false,
    }
}

mod input_to_grid_tests {
    use super::*;

    #[test]
    fn test_text_and_native_inputs_agree() {
        let from_text = DateInput::from("2024-02-01").resolve().unwrap();
        let from_native = DateInput::from(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
            .resolve()
            .unwrap();

        assert_eq!(compute_month_grid(from_text), compute_month_grid(from_native));
    }

    #[test]
    fn test_timestamp_input_renders_its_month() {
        let reference = DateInput::from("2023-09-30T18:00:00+02:00").resolve().unwrap();
        let out = format_month(&test_context(), reference);

        assert!(out.contains("September 2023"));
        assert!(out.contains("27 28 29 30 31  1  2"));
    }
}

mod leap_year_grid_tests {
    use super::*;

    #[test]
    fn test_every_month_of_leap_and_common_years() {
        for year in [2023, 2024, 1900, 2000] {
            for month in 0..12u32 {
                let reference = CalendarDate::new(year, month, 1).unwrap();
                let (label, grid) = compute_month_grid(reference);

                assert_eq!(label.year, year);
                assert_eq!(grid.count(Origin::Current) as u32, days_in_month(year, month));
                assert_eq!(
                    grid.len() as u32,
                    grid.days_to_skip_before() + grid.days_in_month() + grid.days_to_skip_after()
                );

                // Next-month days always start at 1 and count up
                let next: Vec<u32> = grid
                    .cells()
                    .iter()
                    .filter(|c| c.origin == Origin::Next)
                    .map(|c| c.day)
                    .collect();
                assert_eq!(next, (1..=grid.days_to_skip_after()).collect::<Vec<_>>());

                // Previous-month days end on the previous month's last day
                if let Some(last_prev) = grid
                    .cells()
                    .iter()
                    .filter(|c| c.origin == Origin::Previous)
                    .last()
                {
                    let prev_last_day = CalendarDate::normalized(year, i64::from(month), 0)
                        .unwrap()
                        .day();
                    assert_eq!(last_prev.day, prev_last_day);
                }
            }
        }
    }
}

mod navigation_rendering_tests {
    use super::*;

    #[test]
    fn test_year_of_navigation_renders_consistent_widths() {
        let ctx = test_context();
        let mut nav = MonthNavigator::new(CalendarDate::new(2023, 11, 15).unwrap());

        for _ in 0..24 {
            let (label, grid) = nav.view();
            let lines = format_month_grid(&ctx, &label, &grid, None);
            assert_eq!(lines.len(), 2 + grid.len() / 7);
            for line in &lines {
                assert_eq!(line.width(), 20, "{label}: {line:?}");
            }
            nav.next().unwrap();
        }

        assert_eq!(nav.view().0.to_string(), "December 2025");
    }

    #[test]
    fn test_december_to_january_labels() {
        let mut nav = MonthNavigator::new(CalendarDate::new(2023, 11, 1).unwrap());
        assert_eq!(nav.view().0.to_string(), "December 2023");
        nav.next().unwrap();
        let (label, grid) = nav.view();
        assert_eq!(label.to_string(), "January 2024");
        assert_eq!(grid.cells()[0].day, 31);
        assert_eq!(grid.cells()[0].origin, Origin::Previous);
    }
}
