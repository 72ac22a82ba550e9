//! Table of recurrence expansion cases.
//!
//! Every case expands one rule over one window and checks the exact
//! occurrence instants (or just their count). Expected values are
//! written out by hand from the zone's offset table.

use kibble_time::{CivilTime, Frequency, Weekday};

pub struct RecurrenceCase {
    pub name: &'static str,
    pub frequency: Frequency,
    pub timezone: &'static str,
    pub start_date: &'static str,
    pub end_date: Option<&'static str>,
    pub default_time: &'static str,
    pub window_start: &'static str,
    pub window_end: &'static str,
    pub expected: Option<&'static [&'static str]>,
    pub expected_len: Option<usize>,
}

fn wall(hour: u8, minute: u8) -> CivilTime {
    CivilTime::new(hour, minute).expect("case table times are valid")
}

#[expect(clippy::too_many_lines, reason = "Data table")]
pub fn recurrence_cases() -> Vec<RecurrenceCase> {
    vec![
        RecurrenceCase {
            name: "daily_basic",
            frequency: Frequency::Daily,
            timezone: "Europe/Istanbul",
            start_date: "2026-02-02",
            end_date: None,
            default_time: "09:00",
            // Local midnight to local midnight, three days.
            window_start: "2026-02-01T21:00:00Z",
            window_end: "2026-02-04T21:00:00Z",
            expected: Some(&[
                "2026-02-02T06:00:00Z",
                "2026-02-03T06:00:00Z",
                "2026-02-04T06:00:00Z",
            ]),
            expected_len: None,
        },
        RecurrenceCase {
            name: "weekly_mon_wed_fri",
            frequency: Frequency::weekly([
                Weekday::Monday,
                Weekday::Wednesday,
                Weekday::Friday,
            ]),
            timezone: "Europe/Istanbul",
            start_date: "2026-02-02",
            end_date: None,
            default_time: "09:00",
            // Two local weeks starting Monday 2026-02-02.
            window_start: "2026-02-01T21:00:00Z",
            window_end: "2026-02-15T21:00:00Z",
            expected: Some(&[
                "2026-02-02T06:00:00Z",
                "2026-02-04T06:00:00Z",
                "2026-02-06T06:00:00Z",
                "2026-02-09T06:00:00Z",
                "2026-02-11T06:00:00Z",
                "2026-02-13T06:00:00Z",
            ]),
            expected_len: Some(6),
        },
        RecurrenceCase {
            name: "monthly_clamp_april",
            frequency: Frequency::Monthly { day_of_month: 31 },
            timezone: "Europe/Istanbul",
            start_date: "2026-01-01",
            end_date: None,
            default_time: "12:00",
            window_start: "2025-12-31T21:00:00Z",
            window_end: "2026-04-30T21:00:00Z",
            expected: Some(&[
                "2026-01-31T09:00:00Z",
                "2026-02-28T09:00:00Z",
                "2026-03-31T09:00:00Z",
                "2026-04-30T09:00:00Z",
            ]),
            expected_len: None,
        },
        RecurrenceCase {
            name: "interval_midwindow_phase",
            frequency: Frequency::CustomInterval { every_n_days: 3 },
            timezone: "Europe/Istanbul",
            start_date: "2026-02-02",
            end_date: None,
            default_time: "07:00",
            // The window opens between firings; the phase stays
            // anchored to the start date (02, 05, 08, 11, ...).
            window_start: "2026-02-03T21:00:00Z",
            window_end: "2026-02-12T21:00:00Z",
            expected: Some(&[
                "2026-02-05T04:00:00Z",
                "2026-02-08T04:00:00Z",
                "2026-02-11T04:00:00Z",
            ]),
            expected_len: None,
        },
        RecurrenceCase {
            name: "times_per_day_bounded",
            frequency: Frequency::TimesPerDay {
                times: vec![wall(8, 0), wall(12, 30), wall(18, 0)],
            },
            timezone: "Europe/Istanbul",
            start_date: "2026-02-02",
            end_date: Some("2026-02-03"),
            default_time: "00:00",
            // The window runs past the end date; nothing fires on the
            // 4th.
            window_start: "2026-02-01T21:00:00Z",
            window_end: "2026-02-04T21:00:00Z",
            expected: Some(&[
                "2026-02-02T05:00:00Z",
                "2026-02-02T09:30:00Z",
                "2026-02-02T15:00:00Z",
                "2026-02-03T05:00:00Z",
                "2026-02-03T09:30:00Z",
                "2026-02-03T15:00:00Z",
            ]),
            expected_len: Some(6),
        },
        RecurrenceCase {
            name: "weekly_across_spring_forward",
            frequency: Frequency::weekly([Weekday::Sunday]),
            timezone: "America/New_York",
            start_date: "2026-03-01",
            end_date: None,
            default_time: "08:00",
            window_start: "2026-03-01T05:00:00Z",
            window_end: "2026-03-16T04:00:00Z",
            // 08:00 on the wall every Sunday; the UTC reading shifts
            // an hour at the transition.
            expected: Some(&[
                "2026-03-01T13:00:00Z",
                "2026-03-08T12:00:00Z",
                "2026-03-15T12:00:00Z",
            ]),
            expected_len: None,
        },
        RecurrenceCase {
            name: "fall_back_first_occurrence",
            frequency: Frequency::TimesPerDay {
                times: vec![wall(1, 30)],
            },
            timezone: "America/New_York",
            start_date: "2026-10-31",
            end_date: None,
            default_time: "00:00",
            window_start: "2026-10-31T04:00:00Z",
            window_end: "2026-11-03T05:00:00Z",
            // 01:30 exists twice on 2026-11-01; expansion keeps the
            // first pass of the wall clock.
            expected: Some(&[
                "2026-10-31T05:30:00Z",
                "2026-11-01T05:30:00Z",
                "2026-11-02T06:30:00Z",
            ]),
            expected_len: None,
        },
        RecurrenceCase {
            name: "window_after_end",
            frequency: Frequency::Daily,
            timezone: "Europe/Istanbul",
            start_date: "2026-01-01",
            end_date: Some("2026-01-10"),
            default_time: "09:00",
            window_start: "2026-01-31T21:00:00Z",
            window_end: "2026-02-28T21:00:00Z",
            expected: Some(&[]),
            expected_len: Some(0),
        },
        RecurrenceCase {
            name: "daily_full_year",
            frequency: Frequency::Daily,
            timezone: "Europe/Istanbul",
            start_date: "2026-01-01",
            end_date: None,
            default_time: "06:30",
            window_start: "2025-12-31T21:00:00Z",
            window_end: "2026-12-31T21:00:00Z",
            expected: None,
            expected_len: Some(365),
        },
    ]
}
