//! Recurrence rules and their expansion into concrete occurrences.
//!
//! Rules fire in their own zone's civil calendar. A "daily at 08:00"
//! feeding stays at 08:00 on the owner's wall clock through every DST
//! transition, while the stored instants shift accordingly.

mod expand;
mod occurrence;
mod query;
mod rule;

pub use expand::{expand, expand_occurrences};
pub use occurrence::Occurrence;
pub use query::{next_occurrence, previous_occurrence};
pub use rule::{Frequency, RecurrenceRule};
