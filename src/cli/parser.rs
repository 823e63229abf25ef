use crate::export::{ExportFormat, ExportTarget};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for catercal
#[derive(Parser)]
#[command(
    name = "catercal",
    version = env!("CARGO_PKG_VERSION"),
    about = "Catering events calendar and food receipts dashboard, backed by SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Work on built-in sample data in memory instead of the database
    #[arg(global = true, long = "demo")]
    pub demo: bool,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(global = true, long = "today", value_name = "DATE")]
    pub today: Option<String>,

    /// Answer yes to every confirmation prompt
    #[arg(global = true, long = "yes", short = 'y')]
    pub yes: bool,

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

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Create, edit, delete and list catering events
    Event {
        #[command(subcommand)]
        action: EventAction,
    },

    /// Create, edit, delete and list food receipts
    Receipt {
        #[command(subcommand)]
        action: ReceiptAction,
    },

    /// Show events on a calendar
    Calendar {
        #[arg(
            long = "view",
            default_value = "monthly",
            help = "monthly (6-week grid), 3month or annual"
        )]
        view: String,

        #[arg(long = "date", help = "Any date inside the period to show (default: today)")]
        date: Option<String>,

        #[arg(long = "next", conflicts_with = "prev", help = "Show the following period")]
        next: bool,

        #[arg(long = "prev", help = "Show the previous period")]
        prev: bool,
    },

    /// Future revenue and costs, monthly food spending, upcoming events
    Summary {
        #[arg(long = "month", help = "Month for food spending (YYYY-MM, default: current)")]
        month: Option<String>,

        #[arg(long = "limit", help = "Number of upcoming events to show")]
        limit: Option<usize>,

        #[arg(long = "json", help = "Print the summary as JSON")]
        json: bool,
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

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Compress the backup into a .zip archive")]
        compress: bool,
    },

    /// Export events or receipts
    Export {
        #[arg(long, value_enum, default_value = "events")]
        what: ExportTarget,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Only records in YYYY, YYYY-MM, YYYY-MM-DD or START:END"
        )]
        range: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite FILE without asking")]
        force: bool,
    },
}

/// Event fields shared by `event add` and `event edit`.
/// Amounts are lenient: anything unparsable counts as zero.
#[derive(Args, Debug, Clone, Default)]
pub struct EventFields {
    #[arg(long = "est-revenue", value_name = "AMOUNT")]
    pub est_revenue: Option<String>,

    #[arg(long = "est-food", value_name = "AMOUNT")]
    pub est_food: Option<String>,

    #[arg(long = "est-labor", value_name = "AMOUNT")]
    pub est_labor: Option<String>,

    #[arg(long = "revenue", value_name = "AMOUNT", help = "Actual revenue")]
    pub revenue: Option<String>,

    #[arg(long = "food", value_name = "AMOUNT", help = "Actual food cost")]
    pub food: Option<String>,

    #[arg(long = "labor", value_name = "AMOUNT", help = "Actual labor cost")]
    pub labor: Option<String>,

    #[arg(long = "status", help = "pending, confirmed, completed or cancelled")]
    pub status: Option<String>,

    #[arg(long = "notes")]
    pub notes: Option<String>,

    #[arg(
        long = "list",
        value_name = "LABEL",
        help = "Menu section or checklist label (repeatable)"
    )]
    pub lists: Vec<String>,
}

#[derive(Subcommand)]
pub enum EventAction {
    /// Add an event (optionally repeating)
    Add {
        title: String,

        #[arg(long = "date", help = "Event date (YYYY-MM-DD)")]
        date: String,

        #[command(flatten)]
        fields: EventFields,

        #[arg(long = "repeat", help = "none, weekly, biweekly or monthly")]
        repeat: Option<String>,

        #[arg(long = "until", value_name = "DATE", help = "Last possible repeat date")]
        until: Option<String>,
    },

    /// Replace fields of an existing event
    Edit {
        id: i64,

        #[arg(long = "title")]
        title: Option<String>,

        #[arg(long = "date")]
        date: Option<String>,

        #[command(flatten)]
        fields: EventFields,

        #[arg(long = "clear-lists", help = "Remove all list labels first")]
        clear_lists: bool,
    },

    /// Delete an event
    Del { id: i64 },

    /// Show every field of one event
    Show { id: i64 },

    /// List events
    List {
        #[arg(long = "month", help = "Only events of this month (YYYY-MM)")]
        month: Option<String>,

        #[arg(long = "upcoming", help = "Only events from today on")]
        upcoming: bool,
    },
}

#[derive(Subcommand)]
pub enum ReceiptAction {
    /// Add a receipt
    Add {
        store: String,

        #[arg(long = "total", value_name = "AMOUNT")]
        total: String,

        #[arg(long = "date", help = "Purchase date (YYYY-MM-DD)")]
        date: String,
    },

    /// Replace fields of an existing receipt
    Edit {
        id: i64,

        #[arg(long = "store")]
        store: Option<String>,

        #[arg(long = "total", value_name = "AMOUNT")]
        total: Option<String>,

        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Delete a receipt
    Del { id: i64 },

    /// List receipts of a month, newest first
    List {
        #[arg(long = "month", help = "Month to list (YYYY-MM, default: current)")]
        month: Option<String>,
    },
}
