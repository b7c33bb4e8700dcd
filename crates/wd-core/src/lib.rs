//! # wd-core
//!
//! Core error definitions and type aliases for workday-rs.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace: the error hierarchy, the `ensure!` macro, and a few
//! primitive aliases.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Decimal number used for workday increments (e.g. `1.5` workdays).
pub type Decimal = f64;

/// Integer type used for whole-workday counts.
pub type Integer = i32;

/// Length of time measured in whole minutes.
pub type Minutes = i64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
