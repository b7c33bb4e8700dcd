//! Holiday calendar — weekends plus user-defined one-off and recurring
//! holidays.

use crate::calendar::Calendar;
use crate::holiday::RecurringHoliday;
use chrono::NaiveDate;
use std::collections::HashSet;
use wd_core::errors::Result;

/// Name of a calendar built without an explicit one.
pub(crate) const DEFAULT_NAME: &str = "Workday";

/// A calendar where holidays are added manually at run time.
///
/// Saturdays and Sundays are always non-workdays.  On top of that a date is
/// excluded if it is one of the one-off holidays or if its month and day
/// match a recurring holiday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    name: String,
    holidays: HashSet<NaiveDate>,
    recurring: HashSet<RecurringHoliday>,
}

impl HolidayCalendar {
    /// Create a new holiday calendar with the given name and no holidays.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: HashSet::new(),
            recurring: HashSet::new(),
        }
    }

    /// Add a one-off holiday. Returns `false` if it was already present.
    pub fn add_holiday(&mut self, date: NaiveDate) -> bool {
        self.holidays.insert(date)
    }

    /// Remove a previously added one-off holiday.
    pub fn remove_holiday(&mut self, date: NaiveDate) -> bool {
        self.holidays.remove(&date)
    }

    /// Add a holiday observed every year on `month`/`day`.
    ///
    /// # Errors
    /// [`wd_core::Error::InvalidHolidayDate`] if the pair is not a real
    /// calendar day.
    pub fn add_recurring_holiday(&mut self, month: u32, day: u32) -> Result<bool> {
        let holiday = RecurringHoliday::new(month, day)?;
        Ok(self.recurring.insert(holiday))
    }

    /// Return the number of one-off holidays.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Return the number of recurring holidays.
    pub fn recurring_holiday_count(&self) -> usize {
        self.recurring.len()
    }

    /// One-off holidays in ascending order.
    pub fn holidays(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.holidays.iter().copied().collect();
        dates.sort_unstable();
        dates
    }

    /// Recurring holidays in calendar order.
    pub fn recurring_holidays(&self) -> Vec<RecurringHoliday> {
        let mut rules: Vec<RecurringHoliday> = self.recurring.iter().copied().collect();
        rules.sort_unstable();
        rules
    }
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_workday(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date)
            && !self.holidays.contains(&date)
            && !self.recurring.contains(&RecurringHoliday::of(&date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wd_core::Error;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_calendar_is_weekends_only() {
        let cal = HolidayCalendar::new("Test");
        assert_eq!(cal.name(), "Test");
        // Monday is a workday
        assert!(cal.is_workday(date(2024, 1, 8)));
        // Saturday is not
        assert!(!cal.is_workday(date(2024, 1, 6)));
    }

    #[test]
    fn add_and_remove_holiday() {
        let mut cal = HolidayCalendar::new("Custom");
        let holiday = date(2024, 3, 15); // Friday
        assert!(cal.is_workday(holiday));

        assert!(cal.add_holiday(holiday));
        assert!(!cal.is_workday(holiday));
        assert_eq!(cal.holiday_count(), 1);

        // idempotent
        assert!(!cal.add_holiday(holiday));
        assert_eq!(cal.holiday_count(), 1);

        assert!(cal.remove_holiday(holiday));
        assert!(cal.is_workday(holiday));
        assert_eq!(cal.holiday_count(), 0);
    }

    #[test]
    fn recurring_holiday_every_year() {
        let mut cal = HolidayCalendar::default();
        assert_eq!(cal.add_recurring_holiday(5, 17), Ok(true));
        assert_eq!(cal.add_recurring_holiday(5, 17), Ok(false));
        assert_eq!(cal.recurring_holiday_count(), 1);

        assert!(!cal.is_workday(date(2023, 5, 17))); // Wednesday
        assert!(!cal.is_workday(date(2024, 5, 17))); // Friday
        assert!(cal.is_workday(date(2024, 5, 16)));
    }

    #[test]
    fn invalid_recurring_holiday_is_rejected() {
        let mut cal = HolidayCalendar::default();
        assert_eq!(
            cal.add_recurring_holiday(13, 1),
            Err(Error::InvalidHolidayDate { month: 13, day: 1 })
        );
        assert_eq!(cal.recurring_holiday_count(), 0);
    }

    #[test]
    fn listings_are_sorted() {
        let mut cal = HolidayCalendar::default();
        cal.add_holiday(date(2025, 1, 1));
        cal.add_holiday(date(2024, 12, 25));
        cal.add_holiday(date(2024, 12, 26));
        cal.add_recurring_holiday(12, 24).unwrap();
        cal.add_recurring_holiday(5, 17).unwrap();

        assert_eq!(
            cal.holidays(),
            vec![date(2024, 12, 25), date(2024, 12, 26), date(2025, 1, 1)]
        );
        let rules: Vec<(u32, u32)> = cal
            .recurring_holidays()
            .iter()
            .map(|r| (r.month(), r.day()))
            .collect();
        assert_eq!(rules, vec![(5, 17), (12, 24)]);
    }
}
