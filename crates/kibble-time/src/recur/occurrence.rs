//! Concrete occurrences generated from rules.

use uuid::Uuid;

use crate::instant::Instant;

/// One concrete firing of a recurrence rule.
///
/// Derived data: occurrences are recomputed from their rule on demand
/// and carry the owning rule's id so schedule views and reminder
/// delivery can trace them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    /// When the occurrence fires.
    pub instant: Instant,
    /// The rule that generated it.
    pub rule_id: Uuid,
}

impl Occurrence {
    /// Creates an occurrence for a rule.
    #[must_use]
    pub const fn new(instant: Instant, rule_id: Uuid) -> Self {
        Self { instant, rule_id }
    }
}
