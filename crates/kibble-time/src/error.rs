//! Errors raised by the scheduling core.

use thiserror::Error;

/// Error produced by scheduling operations.
///
/// Every failure mode is explicit. In particular an unresolvable
/// timezone is always an error; nothing in this crate substitutes a
/// default zone on its own.
#[derive(Error, Debug)]
pub enum TimeError {
    #[error("Unknown timezone: {0}")]
    UnknownTimeZone(String),

    #[error("Invalid civil date: {0}")]
    InvalidCivilDate(String),

    #[error("Invalid civil time: {0}")]
    InvalidCivilTime(String),

    #[error("Invalid recurrence rule: {0}")]
    InvalidRecurrenceRule(String),

    #[error("Invalid instant: {0}")]
    InvalidInstant(String),
}

pub type TimeResult<T> = std::result::Result<T, TimeError>;
