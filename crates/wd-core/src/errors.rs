//! Error types for workday-rs.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  Argument checks go
//! through the [`ensure!`](crate::ensure) convenience macro.

use thiserror::Error;

/// The top-level error type used throughout workday-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// The daily work window is malformed (e.g. start not before stop).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A recurring holiday does not name a real month/day.
    #[error("invalid recurring holiday: month {month}, day {day}")]
    InvalidHolidayDate {
        /// Month as supplied (expected 1–12).
        month: u32,
        /// Day as supplied (expected 1–31 depending on month).
        day: u32,
    },

    /// Too many consecutive non-workdays were scanned without finding a
    /// workday.
    #[error("no workday found within {limit} consecutive calendar days")]
    NoWorkdayFound {
        /// Number of calendar days scanned before giving up.
        limit: u32,
    },

    /// Date arithmetic left the representable range.
    #[error("date out of range: {0}")]
    DateOutOfRange(String),
}

/// Shorthand `Result` type used throughout workday-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use wd_core::{ensure, errors::Error};
/// fn finite(x: f64) -> wd_core::errors::Result<f64> {
///     ensure!(x.is_finite(), "x must be finite, got {x}");
///     Ok(x)
/// }
/// assert!(finite(1.5).is_ok());
/// assert!(matches!(finite(f64::NAN), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
