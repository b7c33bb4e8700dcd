//! # workday
//!
//! Offset a date/time by a signed, possibly fractional, number of workdays.
//!
//! A workday is a date that is neither a Saturday nor a Sunday, nor one of
//! the configured holidays.  Work only happens inside a daily window, so
//! half a workday starting one hour before closing time finishes three
//! hours into the next workday.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `wd-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! workday = "0.1"
//! ```
//!
//! ```rust
//! use chrono::NaiveDate;
//! use workday::prelude::*;
//!
//! let mut cal = WorkdayCalendar::new();
//! cal.set_workday_window(8, 0, 16, 0)?;
//! cal.add_recurring_holiday(5, 17)?;
//! cal.add_holiday(NaiveDate::from_ymd_opt(2004, 5, 27).unwrap());
//!
//! let start = NaiveDate::from_ymd_opt(2004, 5, 24).unwrap().and_hms_opt(19, 3, 0).unwrap();
//! let end = cal.get_workday_increment(start, 44.723656)?;
//! assert_eq!(end, NaiveDate::from_ymd_opt(2004, 7, 27).unwrap().and_hms_opt(13, 47, 0).unwrap());
//! # Ok::<(), workday::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and primitive aliases.
pub use wd_core as core;

/// Work window, holiday calendars, and workday arithmetic.
pub use wd_time as time;

/// The types needed for everyday use.
pub mod prelude {
    pub use wd_core::{Error, Result};
    pub use wd_time::{
        Calendar, HolidayCalendar, RecurringHoliday, WorkWindow, WorkdayCalendar,
        WorkdayCalendarBuilder, WorkdayConfig,
    };
}
