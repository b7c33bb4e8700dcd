//! `WorkWindow` — the daily time-of-day interval in which work happens.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use wd_core::errors::{Error, Result};
use wd_core::{Decimal, Minutes};

/// The daily work window `[start, stop)`.
///
/// Both ends are whole minutes within the same day and `start` is strictly
/// before `stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkWindow {
    start: NaiveTime,
    stop: NaiveTime,
}

impl WorkWindow {
    /// Create a work window from start and stop hours/minutes.
    ///
    /// # Errors
    /// [`Error::InvalidConfiguration`] if either end is not a time of day
    /// or `start` does not precede `stop`.
    pub fn new(start_hour: u32, start_minute: u32, stop_hour: u32, stop_minute: u32) -> Result<Self> {
        let start = time_of_day(start_hour, start_minute)?;
        let stop = time_of_day(stop_hour, stop_minute)?;
        if start >= stop {
            return Err(Error::InvalidConfiguration(format!(
                "work window start {} must precede stop {}",
                start.format("%H:%M"),
                stop.format("%H:%M")
            )));
        }
        Ok(Self { start, stop })
    }

    /// First minute of work each day.
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// End of work each day (exclusive).
    pub fn stop(&self) -> NaiveTime {
        self.stop
    }

    /// Length of one workday.
    pub fn length(&self) -> Duration {
        self.stop - self.start
    }

    /// Length of one workday in minutes.
    pub fn length_minutes(&self) -> Minutes {
        self.length().num_minutes()
    }

    /// Return `true` if `time` lies in `[start, stop)`.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time < self.stop
    }

    /// Snap `date`'s time of day into the window on the same date.
    ///
    /// Times before `start` become `start`, times after `stop` become
    /// `stop`; times exactly on either boundary are left alone.
    pub fn clamp(&self, date: NaiveDateTime) -> NaiveDateTime {
        let time = date.time();
        if time < self.start {
            date.date().and_time(self.start)
        } else if time > self.stop {
            date.date().and_time(self.stop)
        } else {
            date
        }
    }

    /// Convert a fraction of a workday to whole minutes.
    ///
    /// Rounds to the nearest minute with ties to even, so half a minute
    /// rounds to the even neighbour (`0.5 → 0`, `1.5 → 2`).
    pub fn minutes_for_fraction(&self, fraction: Decimal) -> Minutes {
        (fraction * self.length_minutes() as Decimal).round_ties_even() as Minutes
    }
}

impl Default for WorkWindow {
    /// 08:00–16:00.
    fn default() -> Self {
        Self::new(8, 0, 16, 0).expect("08:00-16:00 is a valid work window")
    }
}

impl std::fmt::Display for WorkWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start.format("%H:%M"), self.stop.format("%H:%M"))
    }
}

fn time_of_day(hour: u32, minute: u32) -> Result<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
        Error::InvalidConfiguration(format!("{hour:02}:{minute:02} is not a time of day"))
    })
}
