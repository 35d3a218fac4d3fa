use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ironlog_core::session::DEFAULT_API_URL;

use crate::cli::{SessionCommands, WorkoutCommands};

/// Track a workout session from the terminal
///
/// Ironlog starts a session from a workout stored on the backend, records
/// the sets you perform as you go, and submits the finished session as a
/// workout log. The session in progress is kept on disk after every change,
/// so it can be picked up again by any later invocation.
#[derive(Parser)]
#[command(version, about, name = "ironlog")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/ironlog/ironlog.db
    #[arg(long, global = true, env = "IRONLOG_DATABASE_FILE")]
    pub database_file: Option<PathBuf>,

    /// Base URL of the workout backend
    #[arg(long, global = true, env = "IRONLOG_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Bearer token sent to the backend
    #[arg(long, global = true, env = "IRONLOG_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long, global = true, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Ironlog CLI
///
/// - `workout`: Inspect workout definitions on the backend
/// - `session`: Drive the session in progress (the default shows its status)
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect workouts
    #[command(alias = "w")]
    Workout {
        #[command(subcommand)]
        command: WorkoutCommands,
    },
    /// Manage the workout session in progress
    #[command(alias = "s")]
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },
}
