//! Civil (wall-clock) value types.
//!
//! "Civil" values are what users see and type: a calendar date, a time
//! of day, a timezone name. None of them denotes a point on the UTC
//! timeline by itself; the conversion operations pair them with a zone
//! to produce an [`crate::instant::Instant`].

mod date;
mod time;
mod zone_id;

pub use date::{CivilDate, Weekday};
pub use time::CivilTime;
pub use zone_id::TimeZoneId;
