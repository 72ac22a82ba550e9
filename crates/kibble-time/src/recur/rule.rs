//! Recurrence rules and their construction-time invariants.

use std::collections::BTreeSet;

use crate::civil::{CivilDate, CivilTime, TimeZoneId, Weekday};
use crate::error::TimeError;

/// How often a rule fires within its active date range.
///
/// All frequencies are evaluated in the rule's own civil calendar, so
/// a firing keeps its wall-clock time across DST transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frequency {
    /// Every civil day.
    Daily,
    /// Days whose weekday is in the set.
    Weekly {
        /// Qualifying days of the week; never empty.
        days_of_week: BTreeSet<Weekday>,
    },
    /// One day each month, clamped to the month's last day when the
    /// month is shorter than the nominal day.
    Monthly {
        /// Nominal day of month (1-31).
        day_of_month: u8,
    },
    /// Every `every_n_days` days counted from the rule's start date,
    /// regardless of any query window.
    CustomInterval {
        /// Step in days; at least 1.
        every_n_days: u32,
    },
    /// Several firings per day at fixed wall-clock times.
    TimesPerDay {
        /// Distinct times in ascending order; never empty.
        times: Vec<CivilTime>,
    },
}

impl Frequency {
    /// Weekly frequency over the given days.
    #[must_use]
    pub fn weekly<I: IntoIterator<Item = Weekday>>(days: I) -> Self {
        Self::Weekly {
            days_of_week: days.into_iter().collect(),
        }
    }
}

/// A user-owned schedule for recurring items such as feedings,
/// medication doses or recurring calendar events.
///
/// Structurally valid from construction; expansion can assume every
/// invariant holds. Only the rule is ever persisted, occurrences are
/// recomputed from it on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    frequency: Frequency,
    timezone: TimeZoneId,
    start_date: CivilDate,
    end_date: Option<CivilDate>,
}

impl RecurrenceRule {
    /// ## Summary
    /// Creates a rule, enforcing its cross-field invariants.
    /// `TimesPerDay` times are normalized to ascending order.
    ///
    /// ## Errors
    /// Returns `InvalidRecurrenceRule` when:
    /// - `end_date` precedes `start_date`
    /// - `Weekly` has an empty day set
    /// - `Monthly` names a day outside 1-31
    /// - `CustomInterval` has a step of zero
    /// - `TimesPerDay` has no times, or repeats one
    pub fn new(
        frequency: Frequency,
        timezone: TimeZoneId,
        start_date: CivilDate,
        end_date: Option<CivilDate>,
    ) -> Result<Self, TimeError> {
        if let Some(end) = end_date
            && end < start_date
        {
            return Err(TimeError::InvalidRecurrenceRule(format!(
                "end date {end} precedes start date {start_date}"
            )));
        }

        let frequency = match frequency {
            Frequency::Weekly { days_of_week } if days_of_week.is_empty() => {
                return Err(TimeError::InvalidRecurrenceRule(
                    "weekly rule with no days of week".to_string(),
                ));
            }
            Frequency::Monthly { day_of_month } if !(1..=31).contains(&day_of_month) => {
                return Err(TimeError::InvalidRecurrenceRule(format!(
                    "day of month {day_of_month} outside 1-31"
                )));
            }
            Frequency::CustomInterval { every_n_days: 0 } => {
                return Err(TimeError::InvalidRecurrenceRule(
                    "custom interval with a step of zero days".to_string(),
                ));
            }
            Frequency::TimesPerDay { mut times } => {
                if times.is_empty() {
                    return Err(TimeError::InvalidRecurrenceRule(
                        "times-per-day rule with no times".to_string(),
                    ));
                }
                times.sort_unstable();
                if times.windows(2).any(|pair| pair[0] == pair[1]) {
                    return Err(TimeError::InvalidRecurrenceRule(
                        "times-per-day rule with duplicate times".to_string(),
                    ));
                }
                Frequency::TimesPerDay { times }
            }
            valid => valid,
        };

        Ok(Self {
            frequency,
            timezone,
            start_date,
            end_date,
        })
    }

    /// The firing pattern.
    #[must_use]
    pub const fn frequency(&self) -> &Frequency {
        &self.frequency
    }

    /// Zone whose civil calendar the rule is evaluated in.
    #[must_use]
    pub const fn timezone(&self) -> &TimeZoneId {
        &self.timezone
    }

    /// First day the rule is active.
    #[must_use]
    pub const fn start_date(&self) -> CivilDate {
        self.start_date
    }

    /// Last day the rule is active (inclusive), if bounded.
    #[must_use]
    pub const fn end_date(&self) -> Option<CivilDate> {
        self.end_date
    }
}
