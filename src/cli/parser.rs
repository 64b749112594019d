use crate::export::ExportFormat;
use crate::models::template::PauseTemplate;
use clap::{Parser, Subcommand};

/// Command-line interface definition for mealpause
#[derive(Parser)]
#[command(
    name = "mealpause",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pause hostel mess meals ahead of time: tomorrow, weekend or custom spans, stored in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pin the current time ("YYYY-MM-DD HH:MM")
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

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

    /// Show today's meal timings and their current status
    Meals,

    /// Pause meals from a template or a custom date range
    Pause {
        #[arg(long, value_enum, default_value = "tomorrow")]
        template: PauseTemplate,

        /// First paused date (YYYY-MM-DD), custom template only
        #[arg(long)]
        start: Option<String>,

        /// Boundary date (YYYY-MM-DD), custom template only
        #[arg(long)]
        end: Option<String>,

        /// First meal eaten again on the boundary date (b, l, s, d or "none")
        #[arg(long = "resume-from", value_name = "MEAL")]
        resume_from: Option<String>,

        /// Toggle a meal on the boundary date; may be repeated
        #[arg(long = "toggle", short = 't', value_name = "MEAL")]
        toggle: Vec<String>,

        /// External reference (e.g. outpass id)
        #[arg(long = "source", value_name = "REF")]
        source: Option<String>,

        #[arg(long, help = "Student id (defaults to the configured one)")]
        student: Option<String>,

        #[arg(long = "dry-run", help = "Show the commands without saving them")]
        dry_run: bool,
    },

    /// List a student's pauses grouped as active, upcoming and past
    List {
        #[arg(long)]
        student: Option<String>,

        #[arg(long = "all", help = "Include cancelled and past pauses")]
        all: bool,
    },

    /// Cancel a pause record by id
    Cancel { id: i64 },

    /// Show which meals are paused or eaten for the next days
    Schedule {
        #[arg(long)]
        student: Option<String>,

        /// First date shown (YYYY-MM-DD), today by default
        #[arg(long)]
        from: Option<String>,

        #[arg(long, help = "Number of days (defaults to the configured value)")]
        days: Option<u32>,
    },

    /// Mess-wide count of paused meals on a date
    Report {
        /// Date (YYYY-MM-DD), tomorrow by default
        #[arg(long)]
        date: Option<String>,

        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "op", help = "Only rows of this operation (pause, cancel, export, ...)")]
        operation: Option<String>,
    },

    /// Export pause records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Only export this student's pauses")]
        student: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
