//! `RecurringHoliday` — a holiday identified by month and day only.

use chrono::{Datelike, NaiveDate};
use wd_core::errors::{Error, Result};

/// A holiday observed on the same month and day every year
/// (e.g. 17 May).
///
/// Ordering is by month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecurringHoliday {
    month: u32,
    day: u32,
}

impl RecurringHoliday {
    /// Create a recurring holiday.
    ///
    /// `day` must exist in `month` for at least one year, so 29 February is
    /// accepted and only matches in leap years.
    ///
    /// # Errors
    /// [`Error::InvalidHolidayDate`] if `month` is not in `1..=12` or `day`
    /// exceeds the longest length of that month.
    pub fn new(month: u32, day: u32) -> Result<Self> {
        match max_day(month) {
            Some(max) if (1..=max).contains(&day) => Ok(Self { month, day }),
            _ => Err(Error::InvalidHolidayDate { month, day }),
        }
    }

    /// The recurring holiday falling on the same month and day as `date`.
    pub fn of<D: Datelike>(date: &D) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    /// Month (1–12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of month (1–31).
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Return `true` if `date` falls on this month and day.
    pub fn matches<D: Datelike>(&self, date: &D) -> bool {
        date.month() == self.month && date.day() == self.day
    }

    /// The concrete date of this holiday in `year`, or `None` when the day
    /// does not exist that year (29 February outside leap years).
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

impl std::fmt::Display for RecurringHoliday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "--{:02}-{:02}", self.month, self.day)
    }
}

/// Longest possible length of `month`, counting leap years.
fn max_day(month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => Some(29),
        _ => None,
    }
}
