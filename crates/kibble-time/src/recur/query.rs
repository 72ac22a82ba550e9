//! Next and previous occurrence queries.
//!
//! Schedule-adherence checks are the main caller: "when is the next
//! feeding, and when should the last one have happened?". Rules can be
//! open-ended, so the search widens in week-sized steps instead of
//! expanding an unbounded range, and gives up after about two years.

use crate::civil::CivilTime;
use crate::convert::instant_to_civil;
use crate::error::TimeError;
use crate::instant::Instant;
use crate::recur::expand::window_instants;
use crate::recur::rule::RecurrenceRule;

/// Width of one search step, in local days.
const SEARCH_STEP_DAYS: i64 = 7;

/// How far the widening search is willing to look, in local days.
/// A rule with no occurrence inside the cap reports `None`.
const SEARCH_CAP_DAYS: i64 = 730;

/// ## Summary
/// Finds the first occurrence strictly after `after`, if one exists
/// within the searchable range.
///
/// The search starts at the later of `after`'s local day and the
/// rule's start date, and stops early once the rule's end date passes.
/// Sparse rules whose next firing lies beyond the cap report `None`.
///
/// ## Errors
/// Returns `UnknownTimeZone` if the rule's zone identifier names no
/// known zone.
pub fn next_occurrence(
    rule: &RecurrenceRule,
    after: Instant,
    default_time: CivilTime,
) -> Result<Option<Instant>, TimeError> {
    let (anchor, _) = instant_to_civil(after, rule.timezone())?;

    let mut chunk_lo = anchor.max(rule.start_date());
    for _ in 0..=SEARCH_CAP_DAYS / SEARCH_STEP_DAYS {
        if rule.end_date().is_some_and(|end| chunk_lo > end) {
            return Ok(None);
        }

        let chunk_hi = chunk_lo.plus_days(SEARCH_STEP_DAYS - 1);
        let found = window_instants(rule, chunk_lo, chunk_hi, default_time)?
            .into_iter()
            .find(|instant| *instant > after);
        if found.is_some() {
            return Ok(found);
        }

        chunk_lo = chunk_lo.plus_days(SEARCH_STEP_DAYS);
    }

    tracing::debug!(after = %after, "no next occurrence within the search cap");
    Ok(None)
}

/// ## Summary
/// Finds the last occurrence strictly before `before`, if one exists
/// within the searchable range.
///
/// The search starts at the earlier of `before`'s local day and the
/// rule's end date, and stops early once the rule's start date passes.
/// Sparse rules whose previous firing lies beyond the cap report
/// `None`.
///
/// ## Errors
/// Returns `UnknownTimeZone` if the rule's zone identifier names no
/// known zone.
pub fn previous_occurrence(
    rule: &RecurrenceRule,
    before: Instant,
    default_time: CivilTime,
) -> Result<Option<Instant>, TimeError> {
    let (anchor, _) = instant_to_civil(before, rule.timezone())?;

    let mut chunk_hi = rule.end_date().map_or(anchor, |end| anchor.min(end));
    for _ in 0..=SEARCH_CAP_DAYS / SEARCH_STEP_DAYS {
        if chunk_hi < rule.start_date() {
            return Ok(None);
        }

        let chunk_lo = chunk_hi.plus_days(-(SEARCH_STEP_DAYS - 1));
        let found = window_instants(rule, chunk_lo, chunk_hi, default_time)?
            .into_iter()
            .rev()
            .find(|instant| *instant < before);
        if found.is_some() {
            return Ok(found);
        }

        chunk_hi = chunk_hi.plus_days(-SEARCH_STEP_DAYS);
    }

    tracing::debug!(before = %before, "no previous occurrence within the search cap");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use crate::civil::{CivilDate, TimeZoneId};
    use crate::recur::rule::Frequency;

    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CivilDate {
        CivilDate::new(year, month, day).unwrap()
    }

    fn time(hour: u8, minute: u8) -> CivilTime {
        CivilTime::new(hour, minute).unwrap()
    }

    fn instant(s: &str) -> Instant {
        Instant::from_storage(s).unwrap()
    }

    fn daily_utc(start: CivilDate, end: Option<CivilDate>) -> RecurrenceRule {
        RecurrenceRule::new(Frequency::Daily, TimeZoneId::fallback(), start, end).unwrap()
    }

    #[test]
    fn test_next_is_strict() {
        let rule = daily_utc(date(2026, 2, 1), None);

        // Anchoring exactly on a firing returns the one after it.
        let next = next_occurrence(&rule, instant("2026-02-02T09:00:00Z"), time(9, 0)).unwrap();
        assert_eq!(next, Some(instant("2026-02-03T09:00:00Z")));
    }

    #[test]
    fn test_previous_is_strict() {
        let rule = daily_utc(date(2026, 2, 1), None);

        let previous =
            previous_occurrence(&rule, instant("2026-02-02T09:00:00Z"), time(9, 0)).unwrap();
        assert_eq!(previous, Some(instant("2026-02-01T09:00:00Z")));
    }

    #[test]
    fn test_next_beyond_the_end_date() {
        let rule = daily_utc(date(2026, 2, 1), Some(date(2026, 2, 10)));

        let next = next_occurrence(&rule, instant("2026-03-01T00:00:00Z"), time(9, 0)).unwrap();
        assert_eq!(next, None);
    }

    #[test]
    fn test_next_reaches_a_future_start() {
        // The rule only becomes active ten years out; the search skips
        // ahead instead of burning its cap on empty weeks.
        let rule = daily_utc(date(2036, 3, 1), None);

        let next = next_occurrence(&rule, instant("2026-02-02T00:00:00Z"), time(9, 0)).unwrap();
        assert_eq!(next, Some(instant("2036-03-01T09:00:00Z")));
    }

    #[test]
    fn test_previous_reaches_back_to_the_end_date() {
        let rule = daily_utc(date(2026, 2, 1), Some(date(2026, 2, 10)));

        let previous =
            previous_occurrence(&rule, instant("2031-01-01T00:00:00Z"), time(9, 0)).unwrap();
        assert_eq!(previous, Some(instant("2026-02-10T09:00:00Z")));
    }

    #[test]
    fn test_sparse_rules_hit_the_cap() {
        let rule = RecurrenceRule::new(
            Frequency::CustomInterval { every_n_days: 3000 },
            TimeZoneId::fallback(),
            date(2026, 1, 1),
            None,
        )
        .unwrap();

        // The firing after 2026-01-01 is more than eight years out.
        let next = next_occurrence(&rule, instant("2026-01-02T00:00:00Z"), time(9, 0)).unwrap();
        assert_eq!(next, None);
    }
}
