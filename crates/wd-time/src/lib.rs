//! # wd-time
//!
//! Work window, holiday calendar, and workday increment types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Builder for `WorkdayCalendar`.
pub mod builder;

/// Calendar trait and the weekends-only calendar.
pub mod calendar;

/// Serde-friendly configuration values.
pub mod config;

/// `RecurringHoliday` — a month/day observed every year.
pub mod holiday;

/// Calendar with user-defined one-off and recurring holidays.
pub mod holiday_calendar;

/// `WorkWindow` — the daily work hours.
pub mod work_window;

/// `WorkdayCalendar` — whole and fractional workday arithmetic.
pub mod workday_calendar;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use builder::WorkdayCalendarBuilder;
pub use calendar::{Calendar, WeekendsOnly, MAX_NON_WORKDAY_RUN};
pub use config::{RecurringHolidayConfig, WindowConfig, WorkdayConfig};
pub use holiday::RecurringHoliday;
pub use holiday_calendar::HolidayCalendar;
pub use work_window::WorkWindow;
pub use workday_calendar::WorkdayCalendar;
