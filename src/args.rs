//! Command-line argument parsing using clap.
//!
//! Arguments follow the classic cal convention: `[[month] year]`

use chrono::NaiveDate;
use clap::{Parser, ValueHint};

use crate::error::CalError;
use crate::types::{ColumnsMode, MAX_YEAR, MIN_YEAR};

#[derive(Parser, Debug)]
#[command(name = "cal")]
#[command(about = "Displays calendar for specified month or year", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Months per row in the year view (number or "auto" for terminal width).
    #[arg(
        short = 'c',
        long = "columns",
        help_heading = "Output options",
        value_name = "width"
    )]
    pub columns: Option<String>,

    /// `[[month] year]`: a lone value is a year (1-9999), two values are month (1-12) and year.
    #[arg(
        value_name = "args",
        allow_negative_numbers = true,
        value_hint = ValueHint::Other
    )]
    pub positionals: Vec<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Display a calendar with Portuguese month and weekday names.

Without any arguments, display the current month.

Examples:
  cal                Display current month
  cal 2024           Display year 2024
  cal 1 2024         Display January 2024
  cal -c 3 2024      Display year 2024, three months per row";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Months per row requested with `--columns`, one when absent.
    pub fn columns_mode(&self) -> Result<ColumnsMode, CalError> {
        match self.columns.as_deref() {
            None => Ok(ColumnsMode::default()),
            Some("auto") => Ok(ColumnsMode::Auto),
            Some(s) => match s.parse::<usize>() {
                Ok(n) if n > 0 => Ok(ColumnsMode::Fixed(n)),
                _ => Err(CalError::InvalidColumns(s.to_string())),
            },
        }
    }
}

/// What a validated command line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// No arguments: the month containing today.
    CurrentMonth,
    /// One argument: every month of the year.
    Year(i32),
    /// Two arguments: a single month.
    Month { month: u32, year: i32 },
}

/// Validate positional arguments and pick the display mode.
///
/// With two arguments the month is checked before the year, so an invalid
/// month is reported even when the year is invalid too.
pub fn parse_invocation<S: AsRef<str>>(args: &[S]) -> Result<Invocation, CalError> {
    match args {
        [] => Ok(Invocation::CurrentMonth),
        [year] => Ok(Invocation::Year(parse_year(year.as_ref())?)),
        [month, year] => {
            let month = parse_month(month.as_ref())?;
            let year = parse_year(year.as_ref())?;
            Ok(Invocation::Month { month, year })
        }
        _ => Err(CalError::Usage),
    }
}

/// Parse a month number (1-12).
pub fn parse_month(token: &str) -> Result<u32, CalError> {
    token
        .parse::<i32>()
        .ok()
        .filter(|month| (1..=12).contains(month))
        .map(|month| month as u32)
        .ok_or_else(|| CalError::InvalidMonth(token.to_string()))
}

/// Parse a year (1-9999).
pub fn parse_year(token: &str) -> Result<i32, CalError> {
    token
        .parse::<i32>()
        .ok()
        .filter(|year| (MIN_YEAR..=MAX_YEAR).contains(year))
        .ok_or_else(|| CalError::InvalidYear(token.to_string()))
}

/// Source of today's date for the zero-argument mode.
pub trait DateSource {
    fn today(&self) -> NaiveDate;
}

/// Local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl DateSource for SystemClock {
    fn today(&self) -> NaiveDate {
        get_today_date()
    }
}

/// A date that never changes.
#[derive(Debug, Clone, Copy)]
pub struct FixedDate(pub NaiveDate);

impl DateSource for FixedDate {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Get today's date, respecting CAL_TEST_TIME environment variable for testing.
pub fn get_today_date() -> NaiveDate {
    if let Ok(test_time) = std::env::var("CAL_TEST_TIME")
        && let Ok(date) = NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}
