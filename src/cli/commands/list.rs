use crate::cli::commands::open_journal;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::presentation::{format_relative, note_preview};
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::utils::colors::{GREY, RESET, paint_token};
use crate::utils::formatting::{bold, italic, pad_left};
use chrono::{DateTime, Local};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { limit } = cmd {
        let journal = open_journal(cfg)?;

        if journal.is_empty() {
            println!("No entries yet");
            println!("{GREY}Run `rpainlog add <LEVEL>` to start recording your pain{RESET}");
            return Ok(());
        }

        let now = Local::now();
        let shown = limit.unwrap_or(usize::MAX);

        for entry in journal.list().iter().take(shown) {
            print_entry(entry, &now, cfg);
        }

        if journal.len() > shown {
            println!("{GREY}… {} older entries not shown{RESET}", journal.len() - shown);
        }
    }
    Ok(())
}

fn print_entry(entry: &Entry, now: &DateTime<Local>, cfg: &Config) {
    let badge = paint_token(&entry.pain_info.color, &pad_left(&entry.pain_level.to_string(), 2));
    let emoji = if cfg.show_emoji {
        format!(" {}", entry.emoji().glyph())
    } else {
        String::new()
    };

    println!(
        "{}{} {} [{}]",
        badge,
        emoji,
        bold(&entry.pain_info.label),
        entry.pain_info.category
    );
    println!("    📅 {}", format_relative(&entry.timestamp, now));

    if entry.has_note() {
        let preview = note_preview(&entry.note, cfg.note_preview);
        let opts = textwrap::Options::new(72)
            .initial_indent("    ")
            .subsequent_indent("    ");
        println!("{}", italic(&textwrap::fill(&preview, opts)));
    }
}
