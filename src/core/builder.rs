//! Turns raw form input into an [`Entry`].
//!
//! The builder validates and classifies but never touches the entry list or
//! the store; callers insert and persist as separate steps.

use crate::core::scale;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::pain_level::PainLevel;
use crate::utils::{date, time};
use chrono::{DateTime, Local, TimeZone, Utc};
use tracing::debug;

/// Hands out entry ids: creation time in milliseconds, bumped past the last
/// id issued so that two entries built within the same millisecond differ.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Start above every id already held by the journal.
    pub fn seeded(max_existing: Option<i64>) -> Self {
        Self {
            last: max_existing.unwrap_or(0),
        }
    }

    pub fn next_at(&mut self, now_ms: i64) -> i64 {
        let id = now_ms.max(self.last.saturating_add(1));
        self.last = id;
        id
    }

    pub fn next(&mut self) -> i64 {
        self.next_at(Utc::now().timestamp_millis())
    }
}

/// Combine a `YYYY-MM-DD` date and an `HH:MM` time, read as wall-clock time in `tz`.
///
/// Times that fall into a DST gap do not exist and are rejected; ambiguous
/// times (clocks turned back) resolve to the earlier instant.
pub fn compose_timestamp<Tz: TimeZone>(
    tz: &Tz,
    date_str: &str,
    time_str: &str,
) -> AppResult<DateTime<Utc>> {
    let d = date::parse_date(date_str.trim())
        .ok_or_else(|| AppError::InvalidTimestamp(format!("invalid date '{}'", date_str)))?;
    let t = time::parse_time(time_str.trim())
        .ok_or_else(|| AppError::InvalidTimestamp(format!("invalid time '{}'", time_str)))?;

    d.and_time(t)
        .and_local_timezone(tz.clone())
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| {
            AppError::InvalidTimestamp(format!(
                "{} {} does not exist in the local time zone",
                date_str, time_str
            ))
        })
}

/// Default date and time fields for a fresh entry form.
pub fn form_defaults<Tz: TimeZone>(now: &DateTime<Tz>) -> (String, String)
where
    Tz::Offset: std::fmt::Display,
{
    (
        now.format("%Y-%m-%d").to_string(),
        now.format("%H:%M").to_string(),
    )
}

pub struct EntryBuilder<Tz: TimeZone = Local> {
    tz: Tz,
    ids: IdGenerator,
}

impl<Tz: TimeZone> EntryBuilder<Tz> {
    pub fn new(tz: Tz, ids: IdGenerator) -> Self {
        Self { tz, ids }
    }

    pub fn timezone(&self) -> &Tz {
        &self.tz
    }

    /// Validate the input and produce an entry. Nothing is consumed on error,
    /// not even an id.
    pub fn build(
        &mut self,
        level: i64,
        note: &str,
        date_str: &str,
        time_str: &str,
    ) -> AppResult<Entry> {
        let pain_level = PainLevel::from_input(level)?;
        let timestamp = compose_timestamp(&self.tz, date_str, time_str)?;
        let id = self.ids.next();

        debug!(id, level = pain_level.value(), %timestamp, "built entry");

        Ok(Entry {
            id,
            pain_level,
            note: note.to_string(),
            timestamp,
            pain_info: scale::lookup(pain_level),
        })
    }
}
