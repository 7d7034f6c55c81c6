//! Type definitions and constants for calendar computation and formatting.

/// Lowest year accepted on the command line.
pub const MIN_YEAR: i32 = 1;
/// Highest year accepted on the command line.
pub const MAX_YEAR: i32 = 9999;

/// Last year counted with Julian leap rules.
pub const REFORM_YEAR: i32 = 1752;
// September 1752: days 3-13 were dropped when the reform took effect
pub const REFORM_MONTH: u32 = 9;
pub const REFORM_FIRST_DAY: u32 = 3;
pub const REFORM_LAST_DAY: u32 = 13;
pub const REFORM_GAP_DAYS: u32 = REFORM_LAST_DAY - REFORM_FIRST_DAY + 1;

/// January 1st of this year is the reference point for weekday accumulation.
pub const ANCHOR_YEAR: i32 = 2000;
pub const ANCHOR_WEEKDAY: chrono::Weekday = chrono::Weekday::Sat;

pub const DAYS_IN_WEEK: usize = 7;

// Constants for calendar formatting
pub const MONTH_WIDTH: usize = 20;
pub const GUTTER_WIDTH: usize = 2;
pub const MAX_AUTO_COLUMNS: usize = 3;

pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Two-letter weekday abbreviations, Sunday first.
pub const WEEKDAY_HEADER: &str = "Do Se Te Qa Qi Se Sa";

/// How many months share a row in the full-year layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnsMode {
    /// Fixed number of columns.
    Fixed(usize),
    /// Auto-detect from terminal width.
    Auto,
}

impl Default for ColumnsMode {
    fn default() -> Self {
        ColumnsMode::Fixed(1)
    }
}

/// Grid of one month: blank (`None`) or day cells, in whole weeks starting Sunday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLayout {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<Option<u32>>,
}
