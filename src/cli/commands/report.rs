use crate::cli::commands::open_journal;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{RED, RESET, colorize_optional};
use crate::utils::date::format_optional;
use crate::utils::formatting::{level_bar, one_decimal, pad_left, pad_right};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { window } = cmd {
        let journal = open_journal(cfg)?;
        let report = journal.report(window.unwrap_or(cfg.chart_window));

        header("Report");

        if report.count == 0 {
            println!("No entries to chart.");
        } else {
            let label_w = report.series.iter().map(|p| p.x.len()).max().unwrap_or(6);
            for point in &report.series {
                println!(
                    "{}  {}{}{} {}",
                    pad_right(&point.x, label_w),
                    RED,
                    level_bar(point.y),
                    RESET,
                    pad_left(&point.y.to_string(), 2)
                );
            }
        }

        println!();
        println!("— Unit: Pain Scale (0-10)");
        println!("- - - Average: {}", one_decimal(report.average));
        println!("Entries:    {}", report.count);
        println!("Start date: {}", colorize_optional(&format_optional(report.start)));
        println!("End date:   {}", colorize_optional(&format_optional(report.end)));
    }
    Ok(())
}
