use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Weekly household chore rota with SMS reminders
///
/// Rota keeps a week counter, works out who has the kitchen, stairs and bins
/// this week, and texts each of them once a week. Point a scheduler at
/// `rota notify`; use `rota run` to trigger a cycle by hand.
#[derive(Parser)]
#[command(version, about, name = "rota")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to $ROTA_DATABASE_FILE,
    /// then $XDG_DATA_HOME/rota/rota.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Append log output to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Rota CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Send this week's reminders if the weekly window is open (for schedulers)
    Notify,
    /// Send reminders interactively, printing progress
    Run {
        /// Send even if reminders already went out this week
        #[arg(long)]
        force: bool,

        /// Print the cycle report as JSON instead of markdown
        #[arg(long)]
        json: bool,
    },
    /// Show the stored week counter and the rota it implies
    Status {
        /// Show the rota for this week number instead of the stored one
        #[arg(long)]
        week: Option<u64>,

        /// Print the stored state and rota as JSON
        #[arg(long)]
        json: bool,
    },
}
