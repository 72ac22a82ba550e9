//! Conversion between civil wall-clock values and absolute instants.

use chrono::{Duration, NaiveDateTime, TimeZone, Utc};

use crate::civil::{CivilDate, CivilTime, TimeZoneId};
use crate::error::TimeError;
use crate::instant::Instant;
use crate::zone::{self, ZoneDisposition};

/// Policy for wall times that occur twice during a fall-back.
///
/// The default takes the first occurrence, which keeps "08:00 every
/// day" meaning the first 08:00 the user's clock shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AmbiguousPolicy {
    /// Use the earlier offset, i.e. the first time the wall clock
    /// shows the value.
    #[default]
    Earlier,
    /// Use the later offset, i.e. the second time the wall clock shows
    /// the value.
    Later,
}

/// ## Summary
/// Converts a civil date/time in a zone to the instant to store.
///
/// The DST cases are handled explicitly:
/// - an ambiguous wall time (fall-back) follows `policy`;
/// - a skipped wall time (spring-forward) advances by the length of
///   the gap, landing on the first valid wall time at or after the
///   nominal one. Interpreting the nominal time under the pre-gap
///   offset yields exactly that instant.
///
/// ## Errors
/// Returns `UnknownTimeZone` if the identifier names no known zone,
/// and `InvalidInstant` if the result would fall outside the
/// representable timeline.
pub fn civil_to_instant(
    date: CivilDate,
    time: CivilTime,
    zone: &TimeZoneId,
    policy: AmbiguousPolicy,
) -> Result<Instant, TimeError> {
    let offset = match zone::resolve(date, time, zone)? {
        ZoneDisposition::Unique(offset) => offset,
        ZoneDisposition::Ambiguous { earlier, later } => match policy {
            AmbiguousPolicy::Earlier => earlier,
            AmbiguousPolicy::Later => later,
        },
        ZoneDisposition::Skipped { preceding, .. } => preceding,
    };

    let local = NaiveDateTime::new(date.as_naive(), time.as_naive());
    let utc = local
        .checked_sub_signed(Duration::seconds(i64::from(offset.as_seconds())))
        .ok_or_else(|| TimeError::InvalidInstant(format!("{date}T{time} in {zone}")))?;

    Ok(Instant::from_utc(Utc.from_utc_datetime(&utc)))
}

/// ## Summary
/// Converts a stored instant to the civil date and time a wall clock
/// in `zone` shows at that moment.
///
/// Always single-valued: every instant has exactly one civil reading
/// per zone, whatever transitions surround it. Seconds are truncated;
/// instants produced by this crate are minute-aligned already.
///
/// ## Errors
/// Returns `UnknownTimeZone` if the identifier names no known zone.
pub fn instant_to_civil(
    instant: Instant,
    zone: &TimeZoneId,
) -> Result<(CivilDate, CivilTime), TimeError> {
    let tz = zone::lookup(zone)?;
    let local = instant.as_utc().with_timezone(&tz).naive_local();

    Ok((
        CivilDate::from_naive(local.date()),
        CivilTime::from_naive(local.time()),
    ))
}
