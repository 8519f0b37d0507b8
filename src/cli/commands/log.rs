use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::{LogRow, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));

const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// Colour per audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "load_failed" => Colour::Red,
        "vacuum" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::open_initialized(&cfg.database)?;
        let rows = load_log(&pool.conn)?;
        print_log(&rows);
    }
    Ok(())
}

/// `op (target)`, cut to the column width; only the operation is coloured.
fn op_column(row: &LogRow) -> String {
    let visible = if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    };

    let visible = if visible.chars().count() > MAX_OP_WIDTH {
        let mut s: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        visible
    };

    let color = color_for_operation(&row.operation);
    match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}

fn print_log(rows: &[LogRow]) {
    if rows.is_empty() {
        println!("📜 Internal log is empty.");
        return;
    }

    let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
    let date_w = rows.iter().map(|r| r.date.len()).max().unwrap_or(10);
    let cols: Vec<String> = rows.iter().map(op_column).collect();
    let op_w = cols
        .iter()
        .map(|c| strip_ansi(c).chars().count())
        .max()
        .unwrap_or(10);

    println!("📜 Internal log:\n");

    for (row, col) in rows.iter().zip(&cols) {
        let padding = " ".repeat(op_w.saturating_sub(strip_ansi(col).chars().count()));
        println!(
            "{:>id_w$}: {:<date_w$} | {}{} => {}",
            row.id,
            row.date,
            col,
            padding,
            row.message,
            id_w = id_w,
            date_w = date_w
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(op: &str, target: &str) -> LogRow {
        LogRow {
            id: 1,
            date: "2024-03-15T10:00:00+01:00".into(),
            operation: op.into(),
            target: target.into(),
            message: "m".into(),
        }
    }

    #[test]
    fn op_column_keeps_target_uncoloured() {
        let col = op_column(&row("add", "1710493200000"));
        assert_eq!(strip_ansi(&col), "add (1710493200000)");
        assert!(col.starts_with("\x1b["));
    }

    #[test]
    fn op_column_truncates_long_targets() {
        let col = op_column(&row("load_failed", &"x".repeat(100)));
        let visible = strip_ansi(&col);
        assert_eq!(visible.chars().count(), MAX_OP_WIDTH);
        assert!(visible.ends_with("..."));
    }
}
