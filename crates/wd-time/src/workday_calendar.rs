//! `WorkdayCalendar` — offsets a date/time by a signed, possibly fractional,
//! number of workdays.
//!
//! Whole workdays are stepped one calendar day at a time, skipping weekends
//! and holidays while keeping the time of day.  The fractional remainder is
//! turned into minutes of the daily [`WorkWindow`] and absorbed window by
//! window: whatever does not fit before the window closes carries over to
//! the start of the next workday (or, going backward, to the close of the
//! previous one).

use crate::builder::WorkdayCalendarBuilder;
use crate::calendar::Calendar;
use crate::holiday_calendar::HolidayCalendar;
use crate::work_window::WorkWindow;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use tracing::{debug, trace};
use wd_core::errors::Result;
use wd_core::{ensure, Decimal, Integer};

/// A holiday calendar combined with a daily work window.
///
/// Configure it through [`WorkdayCalendar::builder`] or the `&mut self`
/// setters, then query it through `&self`; a configured calendar can be
/// shared between threads as is.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use wd_time::WorkdayCalendar;
///
/// let cal = WorkdayCalendar::builder()
///     .with_work_window(8, 0, 16, 0)
///     .with_recurring_holiday(5, 17)
///     .build()
///     .unwrap();
///
/// // Thursday 15:00 plus half a workday: one hour on Thursday, three on Friday.
/// let start = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap().and_hms_opt(15, 0, 0).unwrap();
/// let end = cal.get_workday_increment(start, 0.5).unwrap();
/// assert_eq!(end, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(11, 0, 0).unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkdayCalendar {
    window: WorkWindow,
    holidays: HolidayCalendar,
}

impl WorkdayCalendar {
    /// A calendar with the default 08:00–16:00 window and no holidays.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin building a calendar.
    pub fn builder() -> WorkdayCalendarBuilder {
        WorkdayCalendarBuilder::new()
    }

    pub(crate) fn from_parts(window: WorkWindow, holidays: HolidayCalendar) -> Self {
        Self { window, holidays }
    }

    /// The daily work window.
    pub fn work_window(&self) -> WorkWindow {
        self.window
    }

    /// The underlying holiday calendar.
    pub fn holiday_calendar(&self) -> &HolidayCalendar {
        &self.holidays
    }

    // ── Configuration ────────────────────────────────────────────────────────

    /// Replace the daily work window.
    ///
    /// # Errors
    /// [`wd_core::Error::InvalidConfiguration`] if start does not strictly
    /// precede stop; the current window is kept in that case.
    pub fn set_workday_window(
        &mut self,
        start_hour: u32,
        start_minute: u32,
        stop_hour: u32,
        stop_minute: u32,
    ) -> Result<()> {
        self.window = WorkWindow::new(start_hour, start_minute, stop_hour, stop_minute)?;
        debug!(window = %self.window, "work window set");
        Ok(())
    }

    /// Exclude `date` from the workdays. Adding the same date twice has no
    /// further effect.
    pub fn add_holiday(&mut self, date: NaiveDate) {
        if self.holidays.add_holiday(date) {
            debug!(%date, "holiday added");
        }
    }

    /// Undo [`add_holiday`](Self::add_holiday). Returns `false` if `date`
    /// was not a holiday.
    pub fn remove_holiday(&mut self, date: NaiveDate) -> bool {
        self.holidays.remove_holiday(date)
    }

    /// Exclude `month`/`day` in every year.
    ///
    /// # Errors
    /// [`wd_core::Error::InvalidHolidayDate`] if the pair never occurs in
    /// the Gregorian calendar.
    pub fn add_recurring_holiday(&mut self, month: u32, day: u32) -> Result<()> {
        if self.holidays.add_recurring_holiday(month, day)? {
            debug!(month, day, "recurring holiday added");
        }
        Ok(())
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// Offset `start` by `increment` workdays.
    ///
    /// The start time is first clamped into the work window on its own date.
    /// The increment is then split into a whole part, truncated toward zero,
    /// and a fractional remainder of the same sign; whole workdays are
    /// stepped first, then the fraction.
    ///
    /// # Errors
    /// [`wd_core::Error::Precondition`] if `increment` is not finite or its
    /// whole part does not fit an `i32`; any stepping error otherwise.
    pub fn get_workday_increment(
        &self,
        start: NaiveDateTime,
        increment: Decimal,
    ) -> Result<NaiveDateTime> {
        ensure!(increment.is_finite(), "increment must be finite, got {increment}");
        let whole = increment.trunc();
        ensure!(
            whole >= Integer::MIN as Decimal && whole <= Integer::MAX as Decimal,
            "increment {increment} exceeds the supported number of workdays"
        );
        let fraction = increment - whole;

        let clamped = self.window.clamp(start);
        let stepped = self.add_workdays(clamped, whole as Integer)?;
        let result = self.add_fractional_workday(stepped, fraction)?;
        debug!(
            %start,
            %clamped,
            whole,
            fraction,
            %result,
            "workday increment"
        );
        Ok(result)
    }

    /// Step `date` by `days` whole workdays, keeping its time of day.
    pub fn add_workdays(&self, date: NaiveDateTime, days: Integer) -> Result<NaiveDateTime> {
        let day = self.advance_workdays(date.date(), days)?;
        Ok(day.and_time(date.time()))
    }

    /// Step `date` by a fraction of a workday.
    ///
    /// `fraction × window length` is rounded to whole minutes (ties to even).
    /// A zero result leaves `date` untouched; otherwise `date` is clamped
    /// into the window and the minutes are consumed window by window.  A
    /// forward step never ends exactly on the window's stop: filling the
    /// rest of a day lands on the next workday's start.
    ///
    /// Minutes that fit before the window closes stay on `date`'s own day,
    /// even when that day is not a workday; only the overflow moves to a
    /// workday.
    ///
    /// # Errors
    /// [`wd_core::Error::Precondition`] unless `fraction` is finite and
    /// strictly between -1 and 1; any stepping error otherwise.
    pub fn add_fractional_workday(
        &self,
        date: NaiveDateTime,
        fraction: Decimal,
    ) -> Result<NaiveDateTime> {
        ensure!(
            fraction.is_finite() && fraction.abs() < 1.0,
            "fraction must lie strictly between -1 and 1, got {fraction}"
        );
        let minutes = self.window.minutes_for_fraction(fraction);
        if minutes == 0 {
            return Ok(date);
        }
        let current = self.window.clamp(date);
        let remaining = Duration::minutes(minutes.abs());
        if minutes > 0 {
            self.absorb_forward(current, remaining)
        } else {
            self.absorb_backward(current, remaining)
        }
    }

    fn absorb_forward(
        &self,
        mut current: NaiveDateTime,
        mut remaining: Duration,
    ) -> Result<NaiveDateTime> {
        while remaining > Duration::zero() {
            let available = self.window.stop() - current.time();
            if remaining < available {
                return Ok(current + remaining);
            }
            remaining = remaining - available;
            let next = self.next_workday(current.date())?;
            current = next.and_time(self.window.start());
            trace!(%current, left = remaining.num_minutes(), "rolled into next workday");
        }
        Ok(current)
    }

    fn absorb_backward(
        &self,
        mut current: NaiveDateTime,
        mut remaining: Duration,
    ) -> Result<NaiveDateTime> {
        while remaining > Duration::zero() {
            let available = current.time() - self.window.start();
            if remaining <= available {
                return Ok(current - remaining);
            }
            remaining = remaining - available;
            let previous = self.previous_workday(current.date())?;
            current = previous.and_time(self.window.stop());
            trace!(%current, left = remaining.num_minutes(), "rolled into previous workday");
        }
        Ok(current)
    }
}

impl Calendar for WorkdayCalendar {
    fn name(&self) -> &str {
        self.holidays.name()
    }

    fn is_workday(&self, date: NaiveDate) -> bool {
        self.holidays.is_workday(date)
    }
}
