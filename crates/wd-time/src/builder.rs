//! Builder for [`WorkdayCalendar`].
//!
//! Collects the work window and holidays, then validates everything at
//! once in [`WorkdayCalendarBuilder::build`].

use crate::holiday_calendar::HolidayCalendar;
use crate::work_window::WorkWindow;
use crate::workday_calendar::WorkdayCalendar;
use chrono::NaiveDate;
use wd_core::errors::Result;

/// Builder for [`WorkdayCalendar`].
#[derive(Debug, Clone, Default)]
pub struct WorkdayCalendarBuilder {
    name: Option<String>,
    window: Option<(u32, u32, u32, u32)>,
    holidays: Vec<NaiveDate>,
    recurring: Vec<(u32, u32)>,
}

impl WorkdayCalendarBuilder {
    /// Begin building a calendar (08:00–16:00, no holidays).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the calendar name reported by [`Calendar::name`](crate::Calendar::name).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the daily work window.
    pub fn with_work_window(
        mut self,
        start_hour: u32,
        start_minute: u32,
        stop_hour: u32,
        stop_minute: u32,
    ) -> Self {
        self.window = Some((start_hour, start_minute, stop_hour, stop_minute));
        self
    }

    /// Add a one-off holiday.
    pub fn with_holiday(mut self, date: NaiveDate) -> Self {
        self.holidays.push(date);
        self
    }

    /// Add several one-off holidays.
    pub fn with_holidays(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.holidays.extend(dates);
        self
    }

    /// Add a holiday recurring every year on `month`/`day`.
    pub fn with_recurring_holiday(mut self, month: u32, day: u32) -> Self {
        self.recurring.push((month, day));
        self
    }

    /// Build the `WorkdayCalendar`.
    ///
    /// # Errors
    /// The first configuration error: an invalid work window
    /// ([`wd_core::Error::InvalidConfiguration`]) or recurring holiday
    /// ([`wd_core::Error::InvalidHolidayDate`]).
    pub fn build(self) -> Result<WorkdayCalendar> {
        let window = match self.window {
            Some((sh, sm, eh, em)) => WorkWindow::new(sh, sm, eh, em)?,
            None => WorkWindow::default(),
        };

        let mut holidays = match self.name {
            Some(name) => HolidayCalendar::new(name),
            None => HolidayCalendar::default(),
        };
        for date in self.holidays {
            holidays.add_holiday(date);
        }
        for (month, day) in self.recurring {
            holidays.add_recurring_holiday(month, day)?;
        }

        Ok(WorkdayCalendar::from_parts(window, holidays))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Calendar;
    use wd_core::Error;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn defaults() {
        let cal = WorkdayCalendarBuilder::new().build().unwrap();
        assert_eq!(cal.work_window(), WorkWindow::default());
        assert_eq!(cal.holiday_calendar().holiday_count(), 0);
        assert_eq!(cal.name(), "Workday");
    }

    #[test]
    fn collects_everything() {
        let cal = WorkdayCalendarBuilder::new()
            .with_name("Oslo office")
            .with_work_window(7, 30, 15, 30)
            .with_holiday(date(2024, 3, 28))
            .with_holidays([date(2024, 3, 29), date(2024, 4, 1), date(2024, 3, 29)])
            .with_recurring_holiday(5, 17)
            .build()
            .unwrap();

        assert_eq!(cal.name(), "Oslo office");
        assert_eq!(cal.work_window().to_string(), "07:30-15:30");
        assert_eq!(cal.holiday_calendar().holiday_count(), 3);
        assert_eq!(cal.holiday_calendar().recurring_holiday_count(), 1);
        assert!(!cal.is_workday(date(2024, 3, 28)));
        assert!(!cal.is_workday(date(2024, 5, 17)));
    }

    #[test]
    fn rejects_bad_window() {
        let err = WorkdayCalendarBuilder::new()
            .with_work_window(16, 0, 8, 0)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn rejects_bad_recurring_holiday() {
        let err = WorkdayCalendarBuilder::new()
            .with_recurring_holiday(2, 30)
            .build()
            .unwrap_err();
        assert_eq!(err, Error::InvalidHolidayDate { month: 2, day: 30 });
    }
}
