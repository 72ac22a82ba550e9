//! Expansion of recurrence rules into occurrence instants.

use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use crate::civil::{CivilDate, CivilTime};
use crate::convert::{AmbiguousPolicy, civil_to_instant, instant_to_civil};
use crate::error::TimeError;
use crate::instant::{Instant, InstantRange};
use crate::recur::occurrence::Occurrence;
use crate::recur::rule::{Frequency, RecurrenceRule};

/// ## Summary
/// Expands a rule into every occurrence instant inside `window`.
///
/// Candidate days are generated in the rule's local civil calendar and
/// each (day, wall time) pair converts under the default fall-back
/// policy, so occurrences keep their wall-clock time across DST
/// transitions. The result is ascending, deduplicated and filtered to
/// the half-open window; the same inputs always reproduce it exactly.
///
/// `default_time` supplies the wall-clock time for frequencies that do
/// not carry their own (`TimesPerDay` ignores it).
///
/// ## Errors
/// Returns `UnknownTimeZone` if the rule's zone identifier names no
/// known zone.
pub fn expand(
    rule: &RecurrenceRule,
    default_time: CivilTime,
    window: &InstantRange,
) -> Result<Vec<Instant>, TimeError> {
    if window.end <= window.start {
        return Ok(Vec::new());
    }

    let (window_lo, _) = instant_to_civil(window.start, rule.timezone())?;
    let (window_hi, _) = instant_to_civil(window.end, rule.timezone())?;

    let mut instants = window_instants(rule, window_lo, window_hi, default_time)?;
    instants.retain(|instant| window.contains(*instant));
    tracing::trace!(zone = %rule.timezone(), occurrences = instants.len(), "expanded window");

    Ok(instants)
}

/// ## Summary
/// Expands a rule into [`Occurrence`] records carrying the owning
/// rule's id, in the same order [`expand`] produces instants.
///
/// ## Errors
/// Returns `UnknownTimeZone` if the rule's zone identifier names no
/// known zone.
pub fn expand_occurrences(
    rule: &RecurrenceRule,
    rule_id: Uuid,
    default_time: CivilTime,
    window: &InstantRange,
) -> Result<Vec<Occurrence>, TimeError> {
    Ok(expand(rule, default_time, window)?
        .into_iter()
        .map(|instant| Occurrence::new(instant, rule_id))
        .collect())
}

/// Converts every qualifying day in the civil window `[lo, hi]` to
/// instants, sorted ascending and deduplicated.
pub(crate) fn window_instants(
    rule: &RecurrenceRule,
    lo: CivilDate,
    hi: CivilDate,
    default_time: CivilTime,
) -> Result<Vec<Instant>, TimeError> {
    let default_times = [default_time];
    let times: &[CivilTime] = if let Frequency::TimesPerDay { times } = rule.frequency() {
        times
    } else {
        &default_times
    };

    let mut instants = Vec::new();
    for date in candidate_dates(rule, lo, hi) {
        for &time in times {
            instants.push(civil_to_instant(
                date,
                time,
                rule.timezone(),
                AmbiguousPolicy::default(),
            )?);
        }
    }

    instants.sort_unstable();
    instants.dedup();

    Ok(instants)
}

/// Qualifying civil days in `[lo, hi]`, intersected with the rule's
/// own active range.
fn candidate_dates(rule: &RecurrenceRule, lo: CivilDate, hi: CivilDate) -> Vec<CivilDate> {
    let lo = lo.max(rule.start_date());
    let hi = rule.end_date().map_or(hi, |end| hi.min(end));
    if hi < lo {
        return Vec::new();
    }

    match rule.frequency() {
        Frequency::Daily | Frequency::TimesPerDay { .. } => every_date(lo, hi),
        Frequency::Weekly { days_of_week } => every_date(lo, hi)
            .into_iter()
            .filter(|date| days_of_week.contains(&date.weekday()))
            .collect(),
        Frequency::Monthly { day_of_month } => monthly_dates(*day_of_month, lo, hi),
        Frequency::CustomInterval { every_n_days } => {
            interval_dates(rule.start_date(), i64::from(*every_n_days), lo, hi)
        }
    }
}

/// Every civil date in the inclusive range.
fn every_date(lo: CivilDate, hi: CivilDate) -> Vec<CivilDate> {
    lo.as_naive()
        .iter_days()
        .take_while(|date| *date <= hi.as_naive())
        .map(CivilDate::from_naive)
        .collect()
}

/// The (clamped) nominal day in each month the range touches.
fn monthly_dates(day_of_month: u8, lo: CivilDate, hi: CivilDate) -> Vec<CivilDate> {
    let mut dates = Vec::new();
    let mut year = lo.year();
    let mut month = u32::from(lo.month());

    while NaiveDate::from_ymd_opt(year, month, 1).is_some_and(|first| first <= hi.as_naive()) {
        // Months shorter than the nominal day clamp to their last day.
        let day = u32::from(day_of_month).min(days_in_month(year, month));
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day).map(CivilDate::from_naive)
            && date >= lo
            && date <= hi
        {
            dates.push(date);
        }

        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }

    dates
}

/// Dates at `start + k * step` days that fall inside `[lo, hi]`.
///
/// The phase is anchored to the rule's start date, never to the query
/// window, so the same rule yields the same days whatever window is
/// asked about.
fn interval_dates(start: CivilDate, step: i64, lo: CivilDate, hi: CivilDate) -> Vec<CivilDate> {
    let gap = lo.days_since(start);
    // Ceiling division; both operands are strictly positive here.
    let first_step = if gap <= 0 { 0 } else { (gap + step - 1) / step };

    let mut dates = Vec::new();
    let mut date = start.plus_days(first_step * step);
    while date <= hi {
        dates.push(date);
        let next = date.plus_days(step);
        if next <= date {
            break;
        }
        date = next;
    }

    dates
}

/// Returns the number of days in a month.
fn days_in_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .or_else(|| NaiveDate::from_ymd_opt(year + 1, 1, 1))
        .map_or(31, |d| d.pred_opt().map_or(31, |p| p.day()))
}
