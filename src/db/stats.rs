use crate::core::store::decode_entries;
use crate::db::kv;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};
use rusqlite::Connection;
use std::fs;

pub fn print_db_info(conn: &Connection, db_path: &str, slot: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) SLOT
    //
    println!("{}• Slot:{} {}", CYAN, RESET, slot);

    match kv::get(conn, slot)? {
        None => println!("    {GREY}(empty){RESET}"),
        Some(s) => {
            println!("    payload:      {} bytes", s.value.len());
            println!("    last saved:   {}", s.updated_at);
            match decode_entries(&s.value) {
                Ok(entries) => println!("    entries:      {}{}{}", GREEN, entries.len(), RESET),
                Err(e) => println!("    entries:      {}unreadable ({}){}", RED, e, RESET),
            }
        }
    }

    //
    // 3) AUDIT LOG
    //
    let log_rows: i64 = conn.query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log rows:{} {}", CYAN, RESET, log_rows);

    println!();
    Ok(())
}
