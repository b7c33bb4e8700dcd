//! `Calendar` trait and the weekends-only calendar.
//!
//! A calendar knows which dates are workdays and can step a date forward or
//! backward by a number of workdays.  Every stepping method scans one
//! calendar day at a time, so its cost grows with the number of days
//! traversed; holidays are irregular and admit no closed form.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::warn;
use wd_core::errors::{Error, Result};
use wd_core::Integer;

/// Longest run of consecutive non-workdays a scan will cross (about ten
/// years) before giving up with [`Error::NoWorkdayFound`].
pub const MAX_NON_WORKDAY_RUN: u32 = 3660;

/// A workday calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Weekends Only"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a workday in this calendar.
    fn is_workday(&self, date: NaiveDate) -> bool;

    /// Return `true` if `date` is not a workday.
    fn is_holiday(&self, date: NaiveDate) -> bool {
        !self.is_workday(date)
    }

    /// Return `true` if `date` falls on a Saturday or Sunday.
    fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Advance `date` by `n` workdays (`n < 0` retreats).
    ///
    /// Each calendar day stepped over counts only if it is a workday.  A zero
    /// count returns `date` unchanged, even when `date` itself is not a
    /// workday.
    ///
    /// # Errors
    /// [`Error::NoWorkdayFound`] when more than [`MAX_NON_WORKDAY_RUN`]
    /// consecutive non-workdays are crossed, [`Error::DateOutOfRange`] when
    /// the scan leaves the representable date range.
    fn advance_workdays(&self, mut date: NaiveDate, n: Integer) -> Result<NaiveDate> {
        let forward = n >= 0;
        let mut remaining = n.unsigned_abs();
        let mut run: u32 = 0;
        while remaining > 0 {
            date = step_day(date, forward)?;
            if self.is_workday(date) {
                remaining -= 1;
                run = 0;
            } else {
                run += 1;
                if run > MAX_NON_WORKDAY_RUN {
                    warn!(
                        calendar = self.name(),
                        %date,
                        limit = MAX_NON_WORKDAY_RUN,
                        "gave up scanning for a workday"
                    );
                    return Err(Error::NoWorkdayFound {
                        limit: MAX_NON_WORKDAY_RUN,
                    });
                }
            }
        }
        Ok(date)
    }

    /// Return the first workday strictly after `date`.
    fn next_workday(&self, date: NaiveDate) -> Result<NaiveDate> {
        self.advance_workdays(date, 1)
    }

    /// Return the last workday strictly before `date`.
    fn previous_workday(&self, date: NaiveDate) -> Result<NaiveDate> {
        self.advance_workdays(date, -1)
    }

    /// Count the workdays between `from` (exclusive) and `to` (inclusive).
    /// Returns a negative number if `to < from`.
    fn workdays_between(&self, from: NaiveDate, to: NaiveDate) -> i64 {
        if from == to {
            return 0;
        }
        let (sign, start, end) = if to > from { (1, from, to) } else { (-1, to, from) };
        let count = start
            .iter_days()
            .skip(1)
            .take_while(|d| *d <= end)
            .filter(|d| self.is_workday(*d))
            .count();
        sign * count as i64
    }

    /// List the workdays in the inclusive range `[from, to]`.
    fn workdays_in_range(&self, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        from.iter_days()
            .take_while(|d| *d <= to)
            .filter(|d| self.is_workday(*d))
            .collect()
    }
}

/// Move one calendar day forward or backward.
fn step_day(date: NaiveDate, forward: bool) -> Result<NaiveDate> {
    let next = if forward { date.succ_opt() } else { date.pred_opt() };
    next.ok_or_else(|| {
        let direction = if forward { "after" } else { "before" };
        Error::DateOutOfRange(format!("no calendar day {direction} {date}"))
    })
}

/// A calendar that treats only Saturdays and Sundays as non-workdays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_workday(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Every day is a holiday.
    #[derive(Debug)]
    struct NeverWorks;

    impl Calendar for NeverWorks {
        fn name(&self) -> &str {
            "Never"
        }

        fn is_workday(&self, _date: NaiveDate) -> bool {
            false
        }
    }

    #[test]
    fn weekends_only_saturday() {
        let cal = WeekendsOnly;
        // 2023-09-02 is a Saturday
        assert!(!cal.is_workday(date(2023, 9, 2)));
        assert!(cal.is_holiday(date(2023, 9, 3)));
        assert!(cal.is_workday(date(2023, 9, 4)));
    }

    #[test]
    fn advance_skips_weekend() {
        let cal = WeekendsOnly;
        // Friday 2023-09-01 + 1 → Monday 2023-09-04
        assert_eq!(cal.advance_workdays(date(2023, 9, 1), 1), Ok(date(2023, 9, 4)));
        assert_eq!(cal.advance_workdays(date(2023, 9, 4), -1), Ok(date(2023, 9, 1)));
        assert_eq!(cal.advance_workdays(date(2023, 9, 1), 6), Ok(date(2023, 9, 11)));
    }

    #[test]
    fn advance_zero_keeps_non_workday() {
        let cal = WeekendsOnly;
        let sat = date(2023, 9, 2);
        assert_eq!(cal.advance_workdays(sat, 0), Ok(sat));
    }

    #[test]
    fn next_and_previous_from_weekend() {
        let cal = WeekendsOnly;
        let sun = date(2023, 9, 3);
        assert_eq!(cal.next_workday(sun), Ok(date(2023, 9, 4)));
        assert_eq!(cal.previous_workday(sun), Ok(date(2023, 9, 1)));
    }

    #[test]
    fn workdays_between() {
        let cal = WeekendsOnly;
        let d1 = date(2023, 9, 4); // Monday
        let d2 = date(2023, 9, 8); // Friday
        // Tue, Wed, Thu, Fri = 4 workdays (d1 exclusive)
        assert_eq!(cal.workdays_between(d1, d2), 4);
        assert_eq!(cal.workdays_between(d2, d1), -4);
        assert_eq!(cal.workdays_between(d1, d1), 0);
    }

    #[test]
    fn workdays_in_range_skips_weekend() {
        let cal = WeekendsOnly;
        let days = cal.workdays_in_range(date(2023, 9, 1), date(2023, 9, 5));
        assert_eq!(days, vec![date(2023, 9, 1), date(2023, 9, 4), date(2023, 9, 5)]);
    }

    #[test]
    fn scan_gives_up_eventually() {
        let err = NeverWorks.advance_workdays(date(2023, 9, 1), 1).unwrap_err();
        assert_eq!(
            err,
            Error::NoWorkdayFound {
                limit: MAX_NON_WORKDAY_RUN
            }
        );
    }

    #[test]
    fn stepping_past_max_date_fails() {
        let err = WeekendsOnly.advance_workdays(NaiveDate::MAX, 1).unwrap_err();
        assert!(matches!(err, Error::DateOutOfRange(_)));
    }
}
