//! Constants shared across the Kibble crates.

/// Timezone applied to accounts that have not configured one yet.
///
/// Only the configuration layer and explicit fallback constructors may
/// consume this; scheduling operations themselves never reach for it.
pub const FALLBACK_TIMEZONE: &str = "UTC";
