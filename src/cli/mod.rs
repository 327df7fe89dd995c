pub mod commands;
pub mod context;
pub mod output;

use clap::{Args, Parser, Subcommand};

/// Know who logged in, when, and from where.
#[derive(Parser, Debug)]
#[command(name = "authlog", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the log file and config.toml
    #[arg(long, global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record an authentication event
    Record {
        #[command(subcommand)]
        event: RecordEvent,
    },

    /// Show one calendar page of the log
    View {
        /// Period to page by: day, week or month
        #[arg(long, default_value = "week")]
        period: String,

        /// Reference instant: epoch seconds or YYYY-MM-DD (default: now)
        #[arg(long)]
        at: Option<String>,

        /// Emit the page as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show where the log lives and how big it is
    Status,
}

#[derive(Subcommand, Debug)]
pub enum RecordEvent {
    /// A successful login
    Login {
        /// Remember-me session rather than a temporary one
        #[arg(long)]
        permanent: bool,

        #[command(flatten)]
        opts: RecordOpts,
    },

    /// A logout
    Logout {
        #[command(flatten)]
        opts: RecordOpts,
    },

    /// A failed login attempt
    Failed {
        #[command(flatten)]
        opts: RecordOpts,
    },

    /// An automatic logoff after inactivity
    Autologout {
        #[command(flatten)]
        opts: RecordOpts,
    },

    /// A custom event from an external producer
    Custom {
        /// Free-form event message
        message: String,

        #[command(flatten)]
        opts: RecordOpts,
    },
}

/// Flags shared by every `record` subcommand.
#[derive(Args, Debug)]
pub struct RecordOpts {
    /// Acting user; falls back to $USER when omitted
    #[arg(long, env = "USER")]
    pub user: Option<String>,

    /// Origin address to record with the event
    #[arg(long, default_value = "127.0.0.1")]
    pub ip: String,
}
