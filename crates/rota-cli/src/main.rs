//! Rota CLI Application
//!
//! Command-line entry points for the chore rotation notifier.

mod args;
mod cli;
mod logging;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::{debug, info};
use renderer::TerminalRenderer;
use rota_core::AppEnv;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    let Args {
        database_file,
        log_file,
        no_color,
        command,
    } = Args::parse();

    let app_env = AppEnv::current();
    // Load .env before the logger so it can set RUST_LOG.
    let dotenv = if app_env.loads_dotenv() {
        dotenvy::dotenv().ok()
    } else {
        None
    };

    logging::init(log_file.as_deref())?;
    if let Some(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    info!("Rota started");

    let cli = Cli::new(database_file, TerminalRenderer::new(!no_color));
    match command {
        Notify => cli.notify().await,
        Run { force, json } => cli.run(force, json).await,
        Status { week, json } => cli.status(week, json),
    }
}
