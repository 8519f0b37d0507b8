//! Formatting utilities used by the CLI views.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// Pad to `width` terminal columns; emoji count double.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), s)
}

/// One decimal, as shown on the report's average line.
pub fn one_decimal(v: f64) -> String {
    format!("{:.1}", v)
}

/// Horizontal bar for the text chart: one block per level on a 0-10 axis.
pub fn level_bar(level: u8) -> String {
    let filled = usize::from(level.min(10));
    format!("{}{}", "█".repeat(filled), "·".repeat(10 - filled))
}
