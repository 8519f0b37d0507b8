//! `EntryStore` backed by one row of the SQLite `kv` table.

use crate::core::store::{EntryStore, decode_entries, encode_entries};
use crate::db::kv;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use rusqlite::Connection;

pub const DEFAULT_SLOT: &str = "painEntries";

pub struct SqliteStore {
    pool: DbPool,
    slot: String,
}

impl SqliteStore {
    pub fn new(pool: DbPool, slot: &str) -> Self {
        Self {
            pool,
            slot: slot.to_string(),
        }
    }

    /// Open the database file at `path`, running migrations first.
    pub fn open(path: &str, slot: &str) -> AppResult<Self> {
        Ok(Self::new(DbPool::open_initialized(path)?, slot))
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }
}

impl EntryStore for SqliteStore {
    fn load(&self) -> AppResult<Vec<Entry>> {
        let slot = kv::get(&self.pool.conn, &self.slot)
            .map_err(|e| AppError::PersistenceLoad(e.to_string()))?;

        match slot {
            Some(s) => decode_entries(&s.value),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, entries: &[Entry]) -> AppResult<()> {
        let payload = encode_entries(entries)?;
        kv::put(&self.pool.conn, &self.slot, &payload)
            .map_err(|e| AppError::PersistenceSave(e.to_string()))
    }
}
