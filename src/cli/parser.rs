use crate::export::ExportFormat;
use crate::models::Field;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftlog
/// CLI application to keep a shift handover logbook with SQLite
#[derive(Parser)]
#[command(
    name = "shiftlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A shift handover logbook CLI: track support tickets and share snapshots using SQLite",
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
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Open a session and unlock the record commands
    Login {
        /// Username (prompted when omitted)
        username: Option<String>,

        #[arg(long, help = "Password (prompted when omitted)")]
        password: Option<String>,
    },

    /// Close the session
    Logout,

    /// Add a ticket record to the logbook
    Add {
        #[arg(long, help = "Ticket number, e.g. TCK-1042")]
        ticket: String,

        #[arg(long, help = "Operator handling the ticket")]
        operator: Option<String>,

        #[arg(long, help = "Shift name (default from config)")]
        shift: Option<String>,

        #[arg(long, help = "Region the ticket belongs to")]
        region: Option<String>,

        #[arg(long, help = "Ticket date (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long, help = "Channel the ticket came in on (Phone, Email, ...)")]
        source: Option<String>,

        #[arg(long = "case", help = "Case details")]
        case: Option<String>,

        #[arg(long = "action", help = "Action taken")]
        action: Option<String>,

        #[arg(long, help = "Free-form remark")]
        remark: Option<String>,
    },

    /// List records through the filter/sort/page pipeline
    List {
        #[arg(long, short, help = "Case-insensitive substring filter")]
        filter: Option<String>,

        #[arg(long, value_enum, help = "Sort column")]
        sort: Option<Field>,

        #[arg(long, conflicts_with = "desc", help = "Sort ascending")]
        asc: bool,

        #[arg(long, conflicts_with = "asc", help = "Sort descending")]
        desc: bool,

        #[arg(long, help = "Page number (1-based)")]
        page: Option<usize>,

        #[arg(long, help = "Show every matching record on one page")]
        all: bool,
    },

    /// Show one record in full
    Show {
        /// Record id or unique prefix
        id: String,
    },

    /// Edit one record's fields (unset flags keep their values)
    Edit {
        /// Record id or unique prefix (exactly one record)
        #[arg(required = true)]
        ids: Vec<String>,

        #[arg(long, help = "Ticket number")]
        ticket: Option<String>,

        #[arg(long, help = "Operator handling the ticket")]
        operator: Option<String>,

        #[arg(long, help = "Shift name")]
        shift: Option<String>,

        #[arg(long, help = "Region the ticket belongs to")]
        region: Option<String>,

        #[arg(long, help = "Ticket date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "Channel the ticket came in on")]
        source: Option<String>,

        #[arg(long = "case", help = "Case details")]
        case: Option<String>,

        #[arg(long = "action", help = "Action taken")]
        action: Option<String>,

        #[arg(long, help = "Free-form remark")]
        remark: Option<String>,
    },

    /// Move records to the trash
    Del {
        /// Record ids or unique prefixes
        ids: Vec<String>,

        #[arg(long, conflicts_with = "ids", help = "Delete every visible record")]
        all: bool,

        #[arg(long, short, help = "Filter applied before selecting")]
        filter: Option<String>,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Encode the visible records into a handover link
    Share {
        #[arg(long, short, help = "Case-insensitive substring filter")]
        filter: Option<String>,

        #[arg(long, value_enum, help = "Sort column")]
        sort: Option<Field>,

        #[arg(long, conflicts_with = "desc", help = "Sort ascending")]
        asc: bool,

        #[arg(long, conflicts_with = "asc", help = "Sort descending")]
        desc: bool,

        #[arg(long = "no-copy", help = "Print the link without touching the clipboard")]
        no_copy: bool,
    },

    /// Decode a handover link and show its records
    Open {
        /// Handover link, or just the payload after '#'
        input: String,
    },

    /// List tombstoned records
    Trash,

    /// Export record data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Export only records matching the filter")]
        filter: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
