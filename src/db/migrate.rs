use rusqlite::{Connection, OptionalExtension, Result, params};
use tracing::info;

/// Ensure that the `log` table exists. Applied migrations are recorded there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Key-value slots. The journal lives in one row.
fn create_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
}

/// Keep only the newest audit rows once the table grows past this size.
const LOG_RETENTION: i64 = 5000;

fn create_log_operation_index(conn: &Connection) -> Result<()> {
    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_log_operation ON log(operation);")
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply_once(
    conn: &Connection,
    version: &str,
    message: &str,
    migration: fn(&Connection) -> Result<()>,
) -> Result<()> {
    if is_applied(conn, version)? {
        return Ok(());
    }

    let tx = conn.unchecked_transaction()?;
    migration(&tx)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![chrono::Local::now().to_rfc3339(), version, message],
    )?;
    tx.commit()?;

    info!(version, "migration applied");
    Ok(())
}

/// Trim the audit log, keeping migration markers.
pub fn prune_log(conn: &Connection) -> Result<usize> {
    conn.execute(
        "DELETE FROM log
         WHERE operation <> 'migration_applied'
           AND id <= (SELECT MAX(id) FROM log) - ?1",
        [LOG_RETENTION],
    )
}

/// Public entry point: run all pending migrations.
///
/// Called by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    apply_once(
        conn,
        "20240315_0001_create_kv",
        "Created kv table for the entry slot",
        create_kv_table,
    )?;
    apply_once(
        conn,
        "20240315_0002_log_operation_index",
        "Indexed log by operation",
        create_log_operation_index,
    )?;

    Ok(())
}
