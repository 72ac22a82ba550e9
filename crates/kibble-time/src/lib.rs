//! Timezone-correct scheduling for the Kibble pet-care suite.
//!
//! Feeding schedules, medication reminders and calendar views all need
//! to move between the wall-clock values users see and the absolute
//! instants the store keeps. This crate is that boundary:
//!
//! - civil value types ([`CivilDate`], [`CivilTime`], [`TimeZoneId`])
//!   that are structurally valid from construction
//! - zone resolution ([`resolve`]) classifying a wall time as unique,
//!   ambiguous or skipped ([`ZoneDisposition`])
//! - conversion in both directions ([`civil_to_instant`],
//!   [`instant_to_civil`]) with an explicit fall-back policy
//! - local calendar-day instant ranges ([`local_day_range`]) for
//!   "what happens on this day" queries
//! - recurrence expansion and adherence queries ([`expand`],
//!   [`next_occurrence`], [`previous_occurrence`])
//!
//! Every operation takes its zone explicitly and reads no ambient
//! state. The embedded IANA table is the only shared data and it is
//! immutable, so everything here can be called from any thread.

pub mod civil;
pub mod convert;
pub mod day_range;
pub mod error;
pub mod instant;
pub mod recur;
pub mod zone;

pub use civil::{CivilDate, CivilTime, TimeZoneId, Weekday};
pub use convert::{AmbiguousPolicy, civil_to_instant, instant_to_civil};
pub use day_range::local_day_range;
pub use error::{TimeError, TimeResult};
pub use instant::{Instant, InstantRange};
pub use recur::{
    Frequency, Occurrence, RecurrenceRule, expand, expand_occurrences, next_occurrence,
    previous_occurrence,
};
pub use zone::{UtcOffset, ZoneDisposition, resolve};
