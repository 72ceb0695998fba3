use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for zenlog
/// CLI meditation log with streaks and statistics, backed by SQLite
#[derive(Parser)]
#[command(
    name = "zenlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A meditation log for the terminal: record sessions, keep a journal, track streaks",
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

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a completed meditation session
    Add {
        #[arg(long, short = 'm', help = "Duration in minutes")]
        minutes: Option<i64>,

        #[arg(long, short = 's', help = "Duration in seconds (added to --minutes)")]
        seconds: Option<i64>,

        #[arg(long = "type", short = 't', help = "Meditation type (default from config)")]
        kind: Option<String>,

        #[arg(
            long,
            help = "Completion time, ISO-8601 (YYYY-MM-DD, YYYY-MM-DDTHH:MM, RFC 3339). Default: now"
        )]
        date: Option<String>,

        #[arg(long, help = "Mood before the session (1-5)", default_value_t = 3)]
        before: i64,

        #[arg(long, help = "Mood after the session (1-5)", default_value_t = 3)]
        after: i64,

        #[arg(long, help = "Free-text notes")]
        notes: Option<String>,

        #[arg(long, help = "Explicit session id (generated when omitted)")]
        id: Option<String>,
    },

    /// List recorded sessions, newest first
    List {
        #[arg(long = "today", help = "Show only today's sessions")]
        today: bool,

        #[arg(long = "type", short = 't', help = "Filter by meditation type")]
        kind: Option<String>,
    },

    /// Show statistics: totals, streaks, type distribution, weekly chart
    Stats {
        #[arg(long, help = "Print the snapshot as JSON")]
        json: bool,

        #[arg(long = "today", help = "Show only today's progress")]
        today: bool,
    },

    /// Show the known meditation types
    Types,

    /// Manage journal entries
    Journal {
        #[command(subcommand)]
        action: JournalAction,
    },

    /// Delete every session and journal entry
    Reset {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Import sessions from a JSON array (as written by `export --format json`)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Export sessions
    Export {
        #[arg(long, value_enum, help = "Output format (default: from file extension)")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum JournalAction {
    /// Add a journal entry
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        content: String,

        #[arg(long, help = "Entry time, ISO-8601. Default: now")]
        date: Option<String>,
    },

    /// Edit an existing entry
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,
    },

    /// Delete an entry by id
    Del { id: String },

    /// List entries, newest first
    List,

    /// Show a single entry
    View { id: String },
}
