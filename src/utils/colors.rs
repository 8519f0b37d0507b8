/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

const BRIGHT_GREEN: &str = "\x1b[92m";
const BRIGHT_YELLOW: &str = "\x1b[93m";
const ORANGE: &str = "\x1b[38;5;208m";
const DARK_ORANGE: &str = "\x1b[38;5;202m";
const BRIGHT_RED: &str = "\x1b[91m";
const DARK_RED: &str = "\x1b[38;5;124m";

/// Terminal color for a scale color token (`bg-<hue>-<shade>`).
/// Unknown tokens render uncolored.
pub fn ansi_for_token(token: &str) -> &'static str {
    match token {
        "bg-green-500" | "bg-green-400" => GREEN,
        "bg-green-300" => BRIGHT_GREEN,
        "bg-yellow-300" => BRIGHT_YELLOW,
        "bg-yellow-400" | "bg-yellow-500" => YELLOW,
        "bg-orange-400" => ORANGE,
        "bg-orange-500" => DARK_ORANGE,
        "bg-red-500" => BRIGHT_RED,
        "bg-red-600" => RED,
        "bg-red-700" => DARK_RED,
        _ => RESET,
    }
}

pub fn paint_token(token: &str, text: &str) -> String {
    format!("{}{}{}", ansi_for_token(token), text, RESET)
}

/// Grey out empty values ("", "N/A").
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "N/A" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
