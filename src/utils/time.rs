//! Time-of-day parsing for the entry form.

use super::date::has_shape;
use chrono::NaiveTime;

/// Parse `HH:MM` (24h clock, zero-padded).
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    if !has_shape(t, "99:99") {
        return None;
    }
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}
