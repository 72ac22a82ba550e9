//! Absolute instants and instant ranges.

use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// An absolute, timezone-independent point in time.
///
/// This is what gets stored and compared; civil wall-clock values only
/// exist at the edges. Instants are totally ordered and their
/// canonical storage form is the ISO-8601 UTC string
/// `YYYY-MM-DDTHH:MM:SSZ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Instant(DateTime<Utc>);

impl Instant {
    /// Wraps a UTC datetime.
    #[must_use]
    pub const fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }

    /// Returns the instant as a UTC datetime.
    #[must_use]
    pub const fn as_utc(self) -> DateTime<Utc> {
        self.0
    }

    /// Parses the canonical storage form. Offset suffixes other than
    /// `Z` are accepted and normalized to UTC.
    ///
    /// ## Errors
    /// Returns `InvalidInstant` for anything that is not an ISO-8601
    /// datetime with an offset.
    #[expect(
        clippy::map_err_ignore,
        reason = "Parse errors carry no more information than the rejected input itself"
    )]
    pub fn from_storage(s: &str) -> Result<Self, TimeError> {
        DateTime::parse_from_rfc3339(s)
            .map(|datetime| Self(datetime.with_timezone(&Utc)))
            .map_err(|_| TimeError::InvalidInstant(s.to_string()))
    }

    /// Formats the canonical storage form.
    #[must_use]
    pub fn to_storage(self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl Sub for Instant {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Duration {
        self.0 - rhs.0
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_storage())
    }
}

impl FromStr for Instant {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_storage(s)
    }
}

impl TryFrom<String> for Instant {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_storage(&value)
    }
}

impl From<Instant> for String {
    fn from(instant: Instant) -> Self {
        instant.to_storage()
    }
}

/// A half-open instant interval `[start, end)`.
///
/// The shape of every windowed query in this crate: local calendar
/// days and recurrence expansion windows both use it, so adjacent
/// windows tile the timeline without double-counting a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstantRange {
    /// Inclusive lower bound.
    pub start: Instant,
    /// Exclusive upper bound.
    pub end: Instant,
}

impl InstantRange {
    /// Creates a half-open range; `end` is the exclusive bound.
    #[must_use]
    pub const fn new(start: Instant, end: Instant) -> Self {
        Self { start, end }
    }

    /// Whether the instant falls inside `[start, end)`.
    #[must_use]
    pub fn contains(&self, instant: Instant) -> bool {
        self.start <= instant && instant < self.end
    }

    /// The length of the range.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end.0 - self.start.0
    }
}
