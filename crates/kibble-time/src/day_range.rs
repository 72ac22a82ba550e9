//! Local calendar-day instant ranges.

use crate::civil::{CivilDate, CivilTime, TimeZoneId};
use crate::convert::{AmbiguousPolicy, civil_to_instant};
use crate::error::TimeError;
use crate::instant::InstantRange;

/// ## Summary
/// Computes the half-open instant interval covering calendar day
/// `date` in `zone`: from local midnight up to, but excluding, the
/// next local midnight.
///
/// This is the one correct way to decide which stored instants belong
/// to a user's calendar day. A fixed-offset approximation misfiles
/// items near midnight, and on transition days the true interval is
/// genuinely shorter or longer than 24 hours. In zones that transition
/// at midnight, midnight itself can be skipped or repeated; the
/// default conversion policy applies to the boundary then.
///
/// ## Errors
/// Returns `UnknownTimeZone` if the identifier names no known zone.
pub fn local_day_range(date: CivilDate, zone: &TimeZoneId) -> Result<InstantRange, TimeError> {
    let start = civil_to_instant(date, CivilTime::MIDNIGHT, zone, AmbiguousPolicy::default())?;
    let end = civil_to_instant(
        date.next_day(),
        CivilTime::MIDNIGHT,
        zone,
        AmbiguousPolicy::default(),
    )?;

    Ok(InstantRange::new(start, end))
}
