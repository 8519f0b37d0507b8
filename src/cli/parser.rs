use clap::{Parser, Subcommand};

/// Command-line interface definition for rPainlog
/// CLI application to journal pain levels with SQLite
#[derive(Parser)]
#[command(
    name = "rpainlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple pain journal CLI: record pain levels and review the trend, stored locally in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add defaults for missing configuration fields")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (integrity checks, vacuum, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Prune the internal log and optimize the database")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a new pain entry
    Add {
        /// Pain level, 0 (no pain) to 10 (unspeakable)
        #[arg(allow_negative_numbers = true)]
        level: i64,

        #[arg(long = "note", short = 'n', help = "Free-text note")]
        note: Option<String>,

        /// Date of the entry (YYYY-MM-DD), defaults to today
        #[arg(long = "date", short = 'd', help = "Date (YYYY-MM-DD), defaults to today")]
        date: Option<String>,

        /// Time of the entry (HH:MM), defaults to now
        #[arg(long = "time", short = 't', help = "Time (HH:MM), defaults to now")]
        time: Option<String>,
    },

    /// List entries, most recently recorded first
    List {
        #[arg(long, short, help = "Show at most N entries")]
        limit: Option<usize>,
    },

    /// Show the trend chart and average pain
    Report {
        #[arg(
            long,
            short,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..),
            help = "Number of most recent entries to chart"
        )]
        window: Option<usize>,
    },

    /// Print the pain scale
    Scale,
}
