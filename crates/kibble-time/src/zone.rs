//! Timezone resolution against the embedded IANA table.
//!
//! Wall clocks are not a function of absolute time: a fall-back
//! transition repeats an interval of wall time and a spring-forward
//! skips one. [`resolve`] classifies a civil date/time accordingly and
//! reports the UTC offsets involved, leaving the choice of policy to
//! the caller.

#![expect(
    clippy::map_err_ignore,
    reason = "The zone parser's error carries no more information than the identifier itself"
)]

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, LocalResult, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;

use crate::civil::{CivilDate, CivilTime, TimeZoneId};
use crate::error::TimeError;

/// A UTC offset in effect at some instant (e.g. +0300, -0500).
///
/// Stored as total seconds east of UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtcOffset {
    seconds: i32,
}

impl UtcOffset {
    /// The zero offset.
    pub const UTC: Self = Self { seconds: 0 };

    /// Creates an offset from total seconds east of UTC (negative is
    /// west).
    #[must_use]
    pub const fn from_seconds(seconds: i32) -> Self {
        Self { seconds }
    }

    /// Returns the offset as total seconds east of UTC.
    #[must_use]
    pub const fn as_seconds(self) -> i32 {
        self.seconds
    }

    /// Hours component (may be negative).
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Zone offsets are bounded to a day, truncation to i8 is safe"
    )]
    pub const fn hours(self) -> i8 {
        (self.seconds / 3600) as i8
    }

    /// Minutes component (always positive; half-hour and quarter-hour
    /// zones exist).
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "The minutes component is always 0-59, truncation and sign loss to u8 are safe"
    )]
    pub const fn minutes(self) -> u8 {
        ((self.seconds.abs() % 3600) / 60) as u8
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.seconds >= 0 { '+' } else { '-' };
        let hours = self.seconds.abs() / 3600;
        let minutes = (self.seconds.abs() % 3600) / 60;
        write!(f, "{sign}{hours:02}{minutes:02}")
    }
}

/// How a civil date/time maps onto absolute time in one zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneDisposition {
    /// Exactly one offset applies; the common case.
    Unique(UtcOffset),

    /// The wall time occurs twice (fall-back transition).
    Ambiguous {
        /// Offset of the first occurrence in absolute time.
        earlier: UtcOffset,
        /// Offset of the second occurrence.
        later: UtcOffset,
    },

    /// The wall time never occurs (spring-forward transition).
    Skipped {
        /// Offset in effect just before the gap.
        preceding: UtcOffset,
        /// Offset in effect from the gap onward.
        following: UtcOffset,
    },
}

impl ZoneDisposition {
    /// Whether exactly one offset applies.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Unique(_))
    }

    /// Whether the wall time occurs twice.
    #[must_use]
    pub const fn is_ambiguous(self) -> bool {
        matches!(self, Self::Ambiguous { .. })
    }

    /// Whether the wall time never occurs.
    #[must_use]
    pub const fn is_skipped(self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

/// Resolves a timezone identifier against the embedded IANA table.
pub(crate) fn lookup(zone: &TimeZoneId) -> Result<Tz, TimeError> {
    Tz::from_str(zone.as_str())
        .map_err(|_| TimeError::UnknownTimeZone(zone.as_str().to_string()))
}

/// ## Summary
/// Classifies a civil date/time in a zone as [`ZoneDisposition::Unique`],
/// [`ZoneDisposition::Ambiguous`] or [`ZoneDisposition::Skipped`],
/// reporting the UTC offset(s) involved.
///
/// Pure function over the embedded, immutable IANA table; safe to call
/// from any thread without coordination.
///
/// ## Errors
/// Returns `UnknownTimeZone` if the identifier names no known zone.
pub fn resolve(
    date: CivilDate,
    time: CivilTime,
    zone: &TimeZoneId,
) -> Result<ZoneDisposition, TimeError> {
    let tz = lookup(zone)?;
    let local = NaiveDateTime::new(date.as_naive(), time.as_naive());

    Ok(match tz.from_local_datetime(&local) {
        LocalResult::Single(only) => ZoneDisposition::Unique(offset_of(&only)),
        LocalResult::Ambiguous(first, second) => ZoneDisposition::Ambiguous {
            earlier: offset_of(&first),
            later: offset_of(&second),
        },
        LocalResult::None => {
            let (preceding, following) = gap_offsets(tz, local);
            ZoneDisposition::Skipped {
                preceding,
                following,
            }
        }
    })
}

fn offset_of(datetime: &chrono::DateTime<Tz>) -> UtcOffset {
    UtcOffset::from_seconds(datetime.offset().fix().local_minus_utc())
}

/// Recovers the two offsets bounding a DST gap.
///
/// Reading the wall time under one side's offset lands on the other
/// side of the transition, so two readings yield both offsets. A gap
/// only exists where the total offset increases, hence the smaller
/// offset is the preceding one.
fn gap_offsets(tz: Tz, local: NaiveDateTime) -> (UtcOffset, UtcOffset) {
    let rough = tz.offset_from_utc_datetime(&local).fix().local_minus_utc();
    let one = tz
        .offset_from_utc_datetime(&(local - Duration::seconds(i64::from(rough))))
        .fix()
        .local_minus_utc();
    let other = tz
        .offset_from_utc_datetime(&(local - Duration::seconds(i64::from(one))))
        .fix()
        .local_minus_utc();

    (
        UtcOffset::from_seconds(one.min(other)),
        UtcOffset::from_seconds(one.max(other)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CivilDate {
        CivilDate::new(year, month, day).unwrap()
    }

    fn time(hour: u8, minute: u8) -> CivilTime {
        CivilTime::new(hour, minute).unwrap()
    }

    #[test]
    fn utc_offset_display() {
        assert_eq!(UtcOffset::from_seconds(5 * 3600 + 30 * 60).to_string(), "+0530");
        assert_eq!(UtcOffset::from_seconds(-8 * 3600).to_string(), "-0800");
        assert_eq!(UtcOffset::UTC.to_string(), "+0000");
    }

    #[test]
    fn utc_offset_components() {
        let offset = UtcOffset::from_seconds(-(5 * 3600 + 45 * 60));
        assert_eq!(offset.hours(), -5);
        assert_eq!(offset.minutes(), 45);
        assert_eq!(offset.as_seconds(), -20700);
    }

    #[test]
    fn test_unknown_zone_is_an_error() {
        let err = resolve(date(2026, 1, 15), time(10, 0), &TimeZoneId::new("Mars/Olympus"))
            .unwrap_err();
        assert!(matches!(err, TimeError::UnknownTimeZone(_)));
        assert_eq!(err.to_string(), "Unknown timezone: Mars/Olympus");
    }

    #[test]
    fn test_fallback_zone_resolves() {
        let disposition =
            resolve(date(2026, 1, 15), time(10, 0), &TimeZoneId::fallback()).unwrap();
        assert_eq!(disposition, ZoneDisposition::Unique(UtcOffset::UTC));
    }

    #[test]
    fn test_ordinary_time_is_unique() {
        let zone = TimeZoneId::new("America/New_York");

        let winter = resolve(date(2026, 1, 15), time(10, 0), &zone).unwrap();
        assert_eq!(
            winter,
            ZoneDisposition::Unique(UtcOffset::from_seconds(-5 * 3600))
        );

        let summer = resolve(date(2026, 7, 15), time(10, 0), &zone).unwrap();
        assert_eq!(
            summer,
            ZoneDisposition::Unique(UtcOffset::from_seconds(-4 * 3600))
        );
    }

    #[test]
    fn test_fall_back_is_ambiguous() {
        // New York repeats 01:00-01:59 on 2026-11-01.
        let zone = TimeZoneId::new("America/New_York");
        let disposition = resolve(date(2026, 11, 1), time(1, 30), &zone).unwrap();

        assert!(disposition.is_ambiguous());
        assert_eq!(
            disposition,
            ZoneDisposition::Ambiguous {
                earlier: UtcOffset::from_seconds(-4 * 3600),
                later: UtcOffset::from_seconds(-5 * 3600),
            }
        );
    }

    #[test]
    fn test_spring_forward_is_skipped() {
        // New York skips 02:00-02:59 on 2026-03-08.
        let zone = TimeZoneId::new("America/New_York");
        let disposition = resolve(date(2026, 3, 8), time(2, 30), &zone).unwrap();

        assert!(disposition.is_skipped());
        assert_eq!(
            disposition,
            ZoneDisposition::Skipped {
                preceding: UtcOffset::from_seconds(-5 * 3600),
                following: UtcOffset::from_seconds(-4 * 3600),
            }
        );
    }

    #[test]
    fn test_half_hour_gap() {
        // Lord Howe Island moves 30 minutes, from +1030 to +1100, on
        // 2026-10-04 at 02:00.
        let zone = TimeZoneId::new("Australia/Lord_Howe");
        let disposition = resolve(date(2026, 10, 4), time(2, 15), &zone).unwrap();

        assert_eq!(
            disposition,
            ZoneDisposition::Skipped {
                preceding: UtcOffset::from_seconds(10 * 3600 + 30 * 60),
                following: UtcOffset::from_seconds(11 * 3600),
            }
        );
    }

    #[test]
    fn test_transition_edges_are_unique() {
        let zone = TimeZoneId::new("America/New_York");

        // The minute before the gap and the first minute after it.
        assert!(resolve(date(2026, 3, 8), time(1, 59), &zone).unwrap().is_unique());
        assert!(resolve(date(2026, 3, 8), time(3, 0), &zone).unwrap().is_unique());

        // 02:00 on the fall-back day is past the repeated hour.
        assert!(resolve(date(2026, 11, 1), time(2, 0), &zone).unwrap().is_unique());
    }
}
