//! Display strings for timestamps and notes.
//!
//! All functions take `now` (or the zone) as an argument and never read the
//! system clock.

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::fmt::Display;

/// `"today HH:MM"`, `"yesterday HH:MM"` or `"DD Mon YYYY HH:MM"`, judged by
/// calendar date in `now`'s time zone.
pub fn format_relative<Tz: TimeZone>(timestamp: &DateTime<Utc>, now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    let local = timestamp.with_timezone(&now.timezone());
    let day = local.date_naive();
    let today = now.date_naive();
    let clock = local.format("%H:%M");

    if day == today {
        format!("today {}", clock)
    } else if Some(day) == today.checked_sub_signed(Duration::days(1)) {
        format!("yesterday {}", clock)
    } else {
        local.format("%d %b %Y %H:%M").to_string()
    }
}

/// Short x-axis label for the chart, e.g. `"15 Mar"`.
pub fn chart_label<Tz: TimeZone>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    timestamp.with_timezone(tz).format("%d %b").to_string()
}

/// Full local date and time, e.g. `"15/03/2024 14:30"`.
pub fn full_label<Tz: TimeZone>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    timestamp.with_timezone(tz).format("%d/%m/%Y %H:%M").to_string()
}

/// Cut `note` to `max_chars` characters, marking the cut with `...`.
pub fn note_preview(note: &str, max_chars: usize) -> String {
    if note.chars().count() > max_chars {
        let mut s: String = note.chars().take(max_chars).collect();
        s.push_str("...");
        s
    } else {
        note.to_string()
    }
}
