//! Raw access to the `kv` table.

use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, params};

/// Stored value and its last write time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub value: String,
    pub updated_at: String,
}

pub fn get(conn: &Connection, key: &str) -> Result<Option<Slot>> {
    conn.query_row(
        "SELECT value, updated_at FROM kv WHERE key = ?1",
        [key],
        |row| {
            Ok(Slot {
                value: row.get(0)?,
                updated_at: row.get(1)?,
            })
        },
    )
    .optional()
}

/// Insert or overwrite `key`.
pub fn put(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;

    #[test]
    fn put_overwrites() {
        let pool = DbPool::in_memory().unwrap();
        assert!(get(&pool.conn, "painEntries").unwrap().is_none());

        put(&pool.conn, "painEntries", "[]").unwrap();
        put(&pool.conn, "painEntries", "[1]").unwrap();

        let slot = get(&pool.conn, "painEntries").unwrap().unwrap();
        assert_eq!(slot.value, "[1]");
        let rows: i64 = pool
            .conn
            .query_row("SELECT COUNT(*) FROM kv", [], |r| r.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }
}
