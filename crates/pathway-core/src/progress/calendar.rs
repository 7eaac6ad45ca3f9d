//! Month-grid math for the progress calendar.
//!
//! The grid is a flat list of cells in reading order: leading blanks up to
//! the weekday of the 1st (weeks start on Sunday), then one cell per day of
//! the month. Rendering is the caller's job; this module only does the math.

use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

use super::DailyScore;

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const MONTHS: [&str; 12] = [
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

/// Cells for `year`/`month` (1-based month): `None` for leading blanks,
/// `Some(day)` for each day of the month.
pub fn month_grid(year: i32, month: u32) -> Vec<Option<u32>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let start_weekday = first.weekday().num_days_from_sunday();

    let mut cells: Vec<Option<u32>> = Vec::new();
    for _ in 0..start_weekday {
        cells.push(None);
    }
    for day in 1..=days_in_month(year, month) {
        cells.push(Some(day));
    }
    cells
}

/// Number of days in `year`/`month` (1-based month).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(next) => next.pred_opt().map(|d| d.day()).unwrap_or(0),
        None => 0,
    }
}

/// `YYYY-MM-DD` key for a grid cell.
pub fn cell_key(year: i32, month: u32, day: u32) -> String {
    format!("{year}-{month:02}-{day:02}")
}

/// One month of the calendar with per-day practice marks.
#[derive(Debug, Clone)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<Option<u32>>,
}

impl MonthView {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            cells: month_grid(year, month),
        }
    }

    pub fn month_name(&self) -> &'static str {
        MONTHS
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("")
    }

    /// Look up the practice mark for a day of this month.
    pub fn mark<'a>(
        &self,
        scores: &'a HashMap<String, DailyScore>,
        day: u32,
    ) -> Option<&'a DailyScore> {
        scores.get(&cell_key(self.year, self.month, day))
    }
}
