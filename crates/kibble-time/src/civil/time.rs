//! Civil wall-clock times.

#![expect(
    clippy::map_err_ignore,
    reason = "Parse errors carry no more information than the rejected input itself"
)]

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// A wall-clock time of day at minute granularity ("08:30").
///
/// Scheduling in the product is minute-grained, so seconds are not
/// representable here at all. The boundary string form is `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CivilTime {
    time: NaiveTime,
}

impl CivilTime {
    /// Local midnight, the nominal start of every civil day.
    pub const MIDNIGHT: Self = Self {
        time: NaiveTime::MIN,
    };

    /// Creates a time from an hour (0-23) and minute (0-59).
    ///
    /// ## Errors
    /// Returns `InvalidCivilTime` if either component is out of range.
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeError> {
        NaiveTime::from_hms_opt(u32::from(hour), u32::from(minute), 0)
            .map(|time| Self { time })
            .ok_or_else(|| TimeError::InvalidCivilTime(format!("{hour:02}:{minute:02}")))
    }

    /// Truncates a `chrono` time to minute granularity.
    #[must_use]
    pub fn from_naive(time: NaiveTime) -> Self {
        NaiveTime::from_hms_opt(time.hour(), time.minute(), 0)
            .map_or(Self::MIDNIGHT, |time| Self { time })
    }

    /// Returns the backing `chrono` time; seconds are always zero.
    #[must_use]
    pub const fn as_naive(self) -> NaiveTime {
        self.time
    }

    /// Hour component (0-23).
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Hours are 0-23, truncation to u8 is safe"
    )]
    pub fn hour(self) -> u8 {
        self.time.hour() as u8
    }

    /// Minute component (0-59).
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Minutes are 0-59, truncation to u8 is safe"
    )]
    pub fn minute(self) -> u8 {
        self.time.minute() as u8
    }
}

impl fmt::Display for CivilTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = self.time.hour();
        let minute = self.time.minute();
        write!(f, "{hour:02}:{minute:02}")
    }
}

impl FromStr for CivilTime {
    type Err = TimeError;

    /// Parses the boundary form `HH:MM` (both components padded).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || TimeError::InvalidCivilTime(s.to_string());

        let (hour_part, minute_part) = s.split_once(':').ok_or_else(err)?;
        if hour_part.len() != 2 || minute_part.len() != 2 {
            return Err(err());
        }

        let hour = hour_part.parse::<u8>().map_err(|_| err())?;
        let minute = minute_part.parse::<u8>().map_err(|_| err())?;

        Self::new(hour, minute)
    }
}

impl TryFrom<String> for CivilTime {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CivilTime> for String {
    fn from(time: CivilTime) -> Self {
        time.to_string()
    }
}
