use crate::cli::commands::open_journal;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::builder::form_defaults;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::models::pain_level::PainLevel;
use crate::ui::messages::{non_fatal, success};
use chrono::Local;

/// Record a new entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        level,
        note,
        date,
        time,
    } = cmd
    {
        //
        // 1. Reject out-of-range levels before touching the database
        //
        PainLevel::from_input(*level)?;

        //
        // 2. Fill omitted date/time with "now"; given values are parsed as-is
        //
        let (today, now) = form_defaults(&Local::now());
        let date = date.clone().unwrap_or(today);
        let time = time.clone().unwrap_or(now);
        let note = note.as_deref().unwrap_or("");

        //
        // 3. Build, prepend, save
        //
        let mut journal = open_journal(cfg)?;
        let created = journal.create(*level, note, &date, &time)?;
        let entry = &created.entry;

        ttlog_quiet(
            journal.store().conn(),
            "add",
            &entry.id.to_string(),
            &format!(
                "level {} ({}) at {} {}",
                entry.pain_level, entry.pain_info.label, date, time
            ),
        );

        match &created.save_error {
            Some(e) => non_fatal(e),
            None => success(format!(
                "Saved level {} - {} [{}] on {} {}",
                entry.pain_level, entry.pain_info.label, entry.pain_info.category, date, time
            )),
        }
    }

    Ok(())
}
