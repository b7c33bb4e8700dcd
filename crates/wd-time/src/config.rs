//! Plain configuration values for [`WorkdayCalendar`].
//!
//! [`WorkdayConfig`] is a serde-friendly mirror of a calendar's settings.
//! Deserializing one performs no checks; converting it into a calendar runs
//! the same validation as the builder.

use crate::calendar::Calendar;
use crate::holiday_calendar::DEFAULT_NAME;
use crate::workday_calendar::WorkdayCalendar;
use chrono::{NaiveDate, Timelike};
use serde::{Deserialize, Serialize};
use wd_core::errors::{Error, Result};

/// Daily work window as raw hours and minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Hour work starts (0–23).
    pub start_hour: u32,
    /// Minute work starts (0–59).
    pub start_minute: u32,
    /// Hour work stops (0–23).
    pub stop_hour: u32,
    /// Minute work stops (0–59).
    pub stop_minute: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            start_hour: 8,
            start_minute: 0,
            stop_hour: 16,
            stop_minute: 0,
        }
    }
}

/// Month/day pair of a recurring holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringHolidayConfig {
    /// Month (1–12).
    pub month: u32,
    /// Day of month.
    pub day: u32,
}

/// Complete calendar configuration.
///
/// ```
/// use wd_time::{WorkdayCalendar, WorkdayConfig};
///
/// let cfg: WorkdayConfig = serde_json::from_str(r#"{
///     "work_window": { "start_hour": 8, "start_minute": 0, "stop_hour": 16, "stop_minute": 0 },
///     "holidays": ["2004-05-27"],
///     "recurring_holidays": [{ "month": 5, "day": 17 }]
/// }"#).unwrap();
/// let cal = WorkdayCalendar::try_from(&cfg).unwrap();
/// assert_eq!(cal.to_config(), cfg);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkdayConfig {
    /// Calendar name; `None` keeps the default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Daily work window.
    #[serde(default)]
    pub work_window: WindowConfig,
    /// One-off holidays (`YYYY-MM-DD`).
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
    /// Holidays observed every year.
    #[serde(default)]
    pub recurring_holidays: Vec<RecurringHolidayConfig>,
}

impl WorkdayCalendar {
    /// Build a calendar from a configuration value.
    ///
    /// # Errors
    /// Same as [`WorkdayCalendarBuilder::build`](crate::WorkdayCalendarBuilder::build).
    pub fn from_config(config: &WorkdayConfig) -> Result<Self> {
        let w = config.work_window;
        let mut builder = WorkdayCalendar::builder()
            .with_work_window(w.start_hour, w.start_minute, w.stop_hour, w.stop_minute)
            .with_holidays(config.holidays.iter().copied());
        if let Some(name) = &config.name {
            builder = builder.with_name(name.clone());
        }
        for rule in &config.recurring_holidays {
            builder = builder.with_recurring_holiday(rule.month, rule.day);
        }
        builder.build()
    }

    /// Export the configuration. Holidays come out sorted.
    pub fn to_config(&self) -> WorkdayConfig {
        let window = self.work_window();
        WorkdayConfig {
            name: (self.name() != DEFAULT_NAME).then(|| self.name().to_string()),
            work_window: WindowConfig {
                start_hour: window.start().hour(),
                start_minute: window.start().minute(),
                stop_hour: window.stop().hour(),
                stop_minute: window.stop().minute(),
            },
            holidays: self.holiday_calendar().holidays(),
            recurring_holidays: self
                .holiday_calendar()
                .recurring_holidays()
                .into_iter()
                .map(|r| RecurringHolidayConfig {
                    month: r.month(),
                    day: r.day(),
                })
                .collect(),
        }
    }
}

impl TryFrom<&WorkdayConfig> for WorkdayCalendar {
    type Error = Error;

    fn try_from(config: &WorkdayConfig) -> Result<Self> {
        Self::from_config(config)
    }
}

impl From<&WorkdayCalendar> for WorkdayConfig {
    fn from(calendar: &WorkdayCalendar) -> Self {
        calendar.to_config()
    }
}
