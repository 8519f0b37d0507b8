pub mod add;
pub mod config;
pub mod db;
pub mod init;
pub mod list;
pub mod log;
pub mod report;
pub mod scale;

use crate::config::Config;
use crate::core::journal::Journal;
use crate::db::log::ttlog_quiet;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::non_fatal;

/// Open the configured store and load the journal once.
/// An unreadable payload is reported and audited, then the journal starts empty.
pub(crate) fn open_journal(cfg: &Config) -> AppResult<Journal<SqliteStore>> {
    let store = SqliteStore::open(&cfg.database, &cfg.storage_slot)?;
    let (journal, load_error) = Journal::open(store);

    if let Some(e) = load_error {
        non_fatal(&e);
        ttlog_quiet(journal.store().conn(), "load_failed", &cfg.storage_slot, &e.to_string());
    }

    Ok(journal)
}
