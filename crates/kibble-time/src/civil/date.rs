//! Civil calendar dates and weekdays.

#![expect(
    clippy::map_err_ignore,
    reason = "Parse errors carry no more information than the rejected input itself"
)]

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;

// The boundary string form fixes years at four digits.
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// A calendar date with no timezone attached ("February 4th, 2026").
///
/// Structurally valid from construction: month lengths, leap years and
/// the year range 1-9999 are checked once, so later calendar
/// arithmetic never sees an impossible date and every date renders as
/// the boundary string form `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CivilDate {
    date: NaiveDate,
}

impl CivilDate {
    /// Creates a date from a year (1-9999), month (1-12) and day
    /// (1-31).
    ///
    /// ## Errors
    /// Returns `InvalidCivilDate` if the components do not name a real
    /// calendar day in the supported year range, such as April 31st or
    /// February 29th outside a leap year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, TimeError> {
        let err = || TimeError::InvalidCivilDate(format!("{year:04}-{month:02}-{day:02}"));

        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(err());
        }

        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .map(|date| Self { date })
            .ok_or_else(err)
    }

    /// Wraps an already-validated `chrono` date. Callers keep it inside
    /// the four-digit year range.
    #[must_use]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Returns the backing `chrono` date.
    #[must_use]
    pub const fn as_naive(self) -> NaiveDate {
        self.date
    }

    /// Year component.
    #[must_use]
    pub fn year(self) -> i32 {
        self.date.year()
    }

    /// Month component (1-12).
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Months are 1-12, truncation to u8 is safe"
    )]
    pub fn month(self) -> u8 {
        self.date.month() as u8
    }

    /// Day-of-month component (1-31).
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Days of month are 1-31, truncation to u8 is safe"
    )]
    pub fn day(self) -> u8 {
        self.date.day() as u8
    }

    /// Day of the week this date falls on.
    #[must_use]
    pub fn weekday(self) -> Weekday {
        Weekday::from(self.date.weekday())
    }

    /// The next calendar day. Saturates at the supported ceiling.
    #[must_use]
    pub fn next_day(self) -> Self {
        self.date
            .succ_opt()
            .filter(|date| date.year() <= MAX_YEAR)
            .map_or(self, |date| Self { date })
    }

    /// The previous calendar day. Saturates at the supported floor.
    #[must_use]
    pub fn prev_day(self) -> Self {
        self.date
            .pred_opt()
            .filter(|date| date.year() >= MIN_YEAR)
            .map_or(self, |date| Self { date })
    }

    /// The date `days` days later; negative steps backward. Saturates
    /// at the supported calendar bounds.
    #[must_use]
    pub fn plus_days(self, days: i64) -> Self {
        self.date
            .checked_add_signed(Duration::days(days))
            .filter(|date| (MIN_YEAR..=MAX_YEAR).contains(&date.year()))
            .map_or(self, |date| Self { date })
    }

    /// Number of whole days from `earlier` to `self` (negative if
    /// `earlier` is actually later).
    #[must_use]
    pub fn days_since(self, earlier: Self) -> i64 {
        (self.date - earlier.date).num_days()
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.date.year();
        let month = self.date.month();
        let day = self.date.day();
        write!(f, "{year:04}-{month:02}-{day:02}")
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parses the boundary form `YYYY-MM-DD` (four-digit year, padded
    /// month and day).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || TimeError::InvalidCivilDate(s.to_string());

        let (year_part, rest) = s.split_once('-').ok_or_else(err)?;
        let (month_part, day_part) = rest.split_once('-').ok_or_else(err)?;
        if year_part.len() != 4 || month_part.len() != 2 || day_part.len() != 2 {
            return Err(err());
        }

        let year = year_part.parse::<i32>().map_err(|_| err())?;
        let month = month_part.parse::<u8>().map_err(|_| err())?;
        let day = day_part.parse::<u8>().map_err(|_| err())?;

        Self::new(year, month, day)
    }
}

impl TryFrom<String> for CivilDate {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CivilDate> for String {
    fn from(date: CivilDate) -> Self {
        date.to_string()
    }
}

/// Day of the week, ISO numbered: Monday is 1 through Sunday is 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Returns the short English name of the weekday.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
            Self::Sunday => "Sun",
        }
    }

    /// Converts an ISO weekday number (1 = Monday through 7 = Sunday).
    #[must_use]
    pub const fn from_iso(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            7 => Some(Self::Sunday),
            _ => None,
        }
    }

    /// Returns the ISO weekday number (1 = Monday through 7 = Sunday).
    #[must_use]
    pub const fn iso_number(self) -> u8 {
        match self {
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
            Self::Sunday => 7,
        }
    }

    /// Returns all weekdays in ISO order.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
