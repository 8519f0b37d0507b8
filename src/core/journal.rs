//! The journal owns the entry list for one session and is the only place
//! that mutates it. Every mutation is followed by an explicit save.

use crate::core::aggregate;
use crate::core::builder::{EntryBuilder, IdGenerator};
use crate::core::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::chart::{ChartPoint, ReportSummary};
use crate::models::entry::Entry;
use chrono::{Local, TimeZone};
use std::fmt::Display;
use tracing::{debug, warn};

/// Result of a successful `create`.
#[derive(Debug)]
pub struct Created {
    pub entry: Entry,
    /// Set when the entry was added in memory but could not be persisted.
    pub save_error: Option<AppError>,
}

pub struct Journal<S: EntryStore, Tz: TimeZone = Local> {
    store: S,
    entries: Vec<Entry>,
    builder: EntryBuilder<Tz>,
}

impl<S: EntryStore> Journal<S, Local> {
    pub fn open(store: S) -> (Self, Option<AppError>) {
        Self::open_in(store, Local)
    }
}

impl<S: EntryStore, Tz: TimeZone> Journal<S, Tz> {
    /// Load the saved list once. A broken payload yields an empty journal and
    /// the load error is handed back for reporting.
    pub fn open_in(store: S, tz: Tz) -> (Self, Option<AppError>) {
        let (entries, load_error) = match store.load() {
            Ok(entries) => (entries, None),
            Err(e) => {
                warn!(error = %e, "discarding unreadable saved entries");
                (Vec::new(), Some(e))
            }
        };

        let ids = IdGenerator::seeded(entries.iter().map(|e| e.id).max());
        let journal = Self {
            store,
            entries,
            builder: EntryBuilder::new(tz, ids),
        };
        (journal, load_error)
    }

    /// Build an entry, put it at the front of the list, then save the list.
    ///
    /// Validation errors leave the journal and the store untouched. A failed
    /// save is reported in [`Created::save_error`]; the entry stays in memory.
    pub fn create(&mut self, level: i64, note: &str, date: &str, time: &str) -> AppResult<Created> {
        let entry = self.builder.build(level, note, date, time)?;
        self.entries.insert(0, entry.clone());
        debug!(id = entry.id, total = self.entries.len(), "entry added");

        let save_error = self.persist().err();
        Ok(Created { entry, save_error })
    }

    /// Write the current list to the store.
    pub fn persist(&mut self) -> AppResult<()> {
        self.store.save(&self.entries).map_err(|e| {
            warn!(error = %e, "saving entries failed");
            match e {
                AppError::PersistenceSave(msg) => AppError::PersistenceSave(msg),
                other => AppError::PersistenceSave(other.to_string()),
            }
        })
    }

    /// Entries, most recently created first.
    pub fn list(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn average(&self) -> f64 {
        aggregate::average(&self.entries)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn timezone(&self) -> &Tz {
        self.builder.timezone()
    }
}

impl<S: EntryStore, Tz: TimeZone> Journal<S, Tz>
where
    Tz::Offset: Display,
{
    pub fn chart(&self, window: usize) -> Vec<ChartPoint> {
        aggregate::chart_series(&self.entries, window, self.builder.timezone())
    }

    pub fn report(&self, window: usize) -> ReportSummary {
        aggregate::report(&self.entries, window, self.builder.timezone())
    }
}
