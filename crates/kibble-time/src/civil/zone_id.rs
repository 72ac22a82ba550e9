//! Timezone identifiers.

use std::fmt;

use kibble_core::constants::FALLBACK_TIMEZONE;
use serde::{Deserialize, Serialize};

/// An IANA timezone identifier such as `Europe/Istanbul`.
///
/// Holding an identifier does not prove the zone exists; resolution
/// happens at the point of use and an unknown identifier surfaces as
/// `UnknownTimeZone` there. Misfiling a reminder onto a neighboring
/// day is worse than failing loudly, so there is no silent default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeZoneId(String);

impl TimeZoneId {
    /// Creates an identifier from a user-settings string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The fixed fallback zone for accounts with none configured.
    ///
    /// Callers decide when this applies; no operation in this crate
    /// reaches for it on its own.
    #[must_use]
    pub fn fallback() -> Self {
        Self(FALLBACK_TIMEZONE.to_string())
    }

    /// The identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimeZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TimeZoneId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
