//! Persistence seam for the journal.

use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;

/// A durable slot holding the whole entry list.
pub trait EntryStore {
    /// Saved entries, or an empty list when nothing was ever saved.
    /// A payload that cannot be decoded is a `PersistenceLoad` error.
    fn load(&self) -> AppResult<Vec<Entry>>;

    /// Replace the saved list with `entries`.
    fn save(&mut self, entries: &[Entry]) -> AppResult<()>;
}

pub fn decode_entries(raw: &str) -> AppResult<Vec<Entry>> {
    serde_json::from_str(raw).map_err(|e| AppError::PersistenceLoad(e.to_string()))
}

pub fn encode_entries(entries: &[Entry]) -> AppResult<String> {
    serde_json::to_string(entries).map_err(|e| AppError::PersistenceSave(e.to_string()))
}

/// Keeps the encoded payload in memory. Used in tests and as a scratch store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    payload: Option<String>,
    saves: usize,
    fail_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already encoded (possibly broken) payload.
    pub fn with_payload(raw: impl Into<String>) -> Self {
        Self {
            payload: Some(raw.into()),
            ..Self::default()
        }
    }

    /// Make every following `save` fail.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl EntryStore for MemoryStore {
    fn load(&self) -> AppResult<Vec<Entry>> {
        match &self.payload {
            Some(raw) => decode_entries(raw),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, entries: &[Entry]) -> AppResult<()> {
        self.saves += 1;
        if self.fail_saves {
            return Err(AppError::PersistenceSave("storage is read-only".into()));
        }
        self.payload = Some(encode_entries(entries)?);
        Ok(())
    }
}
