//! Calendar arithmetic: leap years, month lengths and weekdays across the 1752 reform.
//!
//! Years up to 1752 follow Julian leap rules, later years Gregorian ones.
//! September 1752 lost its days 3-13, so weekdays stay continuous across the
//! switch and match the historical `cal` output on both sides of it.

use std::slice::Chunks;

use chrono::Weekday;

use crate::types::{
    ANCHOR_WEEKDAY, ANCHOR_YEAR, ColumnsMode, DAYS_IN_WEEK, GUTTER_WIDTH, MAX_AUTO_COLUMNS,
    MONTH_WIDTH, MonthLayout, REFORM_FIRST_DAY, REFORM_GAP_DAYS, REFORM_LAST_DAY, REFORM_MONTH,
    REFORM_YEAR,
};

/// Check if a year is a leap year according to the calendar rules.
pub fn is_leap_year(year: i32) -> bool {
    if year <= REFORM_YEAR {
        // Julian: every 4 years
        year % 4 == 0
    } else {
        // Gregorian: divisible by 4, except centuries unless divisible by 400
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }
}

/// Check if a date falls within the reform gap (September 3-13, 1752).
pub fn is_reform_gap(year: i32, month: u32, day: u32) -> bool {
    year == REFORM_YEAR
        && month == REFORM_MONTH
        && (REFORM_FIRST_DAY..=REFORM_LAST_DAY).contains(&day)
}

/// Last day number of the month, ignoring the reform gap.
fn last_day_of_month(month: u32, year: i32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => unreachable!("month {month} out of range"),
    }
}

/// Day numbers that exist in the month, in order.
pub fn month_days(month: u32, year: i32) -> impl Iterator<Item = u32> {
    (1..=last_day_of_month(month, year)).filter(move |&day| !is_reform_gap(year, month, day))
}

/// Number of days in the month. September 1752 has 19.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    let last_day = last_day_of_month(month, year);
    if year == REFORM_YEAR && month == REFORM_MONTH {
        last_day - REFORM_GAP_DAYS
    } else {
        last_day
    }
}

/// Number of days in the year: 365 or 366, and 355 for 1752.
pub fn days_in_year(year: i32) -> u32 {
    let days = if is_leap_year(year) { 366 } else { 365 };
    if year == REFORM_YEAR {
        days - REFORM_GAP_DAYS
    } else {
        days
    }
}

/// Weekday of January 1st, accumulated year by year from the anchor year.
pub fn weekday_of_jan1(year: i32) -> Weekday {
    let week = DAYS_IN_WEEK as i64;
    let start = i64::from(ANCHOR_WEEKDAY.num_days_from_sunday());

    let index = if year >= ANCHOR_YEAR {
        (ANCHOR_YEAR..year).fold(start, |wd, y| {
            (wd + i64::from(days_in_year(y))).rem_euclid(week)
        })
    } else {
        (year..ANCHOR_YEAR).fold(start, |wd, y| {
            (wd - i64::from(days_in_year(y))).rem_euclid(week)
        })
    };

    weekday_from_sunday(index as u32)
}

/// Weekday of the first day of `month` in `year`.
pub fn weekday_of_first(month: u32, year: i32) -> Weekday {
    let jan1 = weekday_of_jan1(year).num_days_from_sunday();
    let index = (1..month).fold(jan1, |wd, m| {
        (wd + days_in_month(m, year)) % DAYS_IN_WEEK as u32
    });
    weekday_from_sunday(index)
}

/// Map a 0-6 index (0 = Sunday) to a weekday.
pub fn weekday_from_sunday(index: u32) -> Weekday {
    match index % DAYS_IN_WEEK as u32 {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        _ => unreachable!(),
    }
}

impl MonthLayout {
    /// Build the calendar grid for a specific month.
    pub fn new(month: u32, year: i32) -> Self {
        let offset = weekday_of_first(month, year).num_days_from_sunday() as usize;

        let mut cells: Vec<Option<u32>> = Vec::with_capacity(6 * DAYS_IN_WEEK);

        // Empty cells before first day
        cells.extend(std::iter::repeat_n(None, offset));
        cells.extend(month_days(month, year).map(Some));

        // Complete the last week
        let tail = (DAYS_IN_WEEK - cells.len() % DAYS_IN_WEEK) % DAYS_IN_WEEK;
        cells.extend(std::iter::repeat_n(None, tail));

        MonthLayout { year, month, cells }
    }

    pub fn weeks(&self) -> Chunks<'_, Option<u32>> {
        self.cells.chunks(DAYS_IN_WEEK)
    }

    /// Number of non-blank cells.
    pub fn day_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Number of blank cells before day 1.
    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|cell| cell.is_none()).count()
    }
}

impl ColumnsMode {
    /// Resolve to a concrete number of months per row.
    pub fn months_per_row(self) -> usize {
        match self {
            ColumnsMode::Fixed(n) => n.max(1),
            ColumnsMode::Auto => {
                // 20 chars per month + gutter, clamp to 1-3 for readability
                let month_width = MONTH_WIDTH + GUTTER_WIDTH;
                if let Some(term_width) = get_terminal_width() {
                    (term_width / month_width).clamp(1, MAX_AUTO_COLUMNS)
                } else {
                    MAX_AUTO_COLUMNS
                }
            }
        }
    }
}

/// Get terminal width using terminal_size crate.
fn get_terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}
