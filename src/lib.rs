//! Calendar display utility with Portuguese month and weekday names.
//!
//! Features:
//! - Julian leap rules up to 1752, Gregorian rules afterwards
//! - September 1752 reform gap (days 3-13 are skipped)
//! - Single month, full year, or current month display

pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod router;
pub mod types;
