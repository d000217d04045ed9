//! Command handlers.
//!
//! Each handler builds the collaborators it needs from the environment and
//! hands them to the core library. `status` only touches the store, so it
//! works without provider credentials.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{error, info};
use rota_core::{
    config::StoreSettings, Config, Database, Notifier, NotifyOutcome, RotationState, StatusView,
    TwilioClient, WeekAssignments,
};
use serde_json::json;

use crate::renderer::TerminalRenderer;

/// Runs CLI commands against the configured store.
pub struct Cli {
    database_file: Option<PathBuf>,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(database_file: Option<PathBuf>, renderer: TerminalRenderer) -> Self {
        Self {
            database_file,
            renderer,
        }
    }

    /// Scheduled entry point: gated, silent on stdout.
    pub async fn notify(&self) -> Result<()> {
        let notifier = self.notifier()?;
        let outcome = notifier.notify().await.context("Notification cycle failed")?;
        log_outcome(&outcome);
        Ok(())
    }

    /// Manual entry point: prints banners and the cycle report.
    ///
    /// With `json` the banners are left out and only the report is printed.
    pub async fn run(&self, force: bool, json: bool) -> Result<()> {
        let notifier = self.notifier()?;

        if !json {
            println!("Notifying...");
        }
        let outcome = if force {
            notifier.force_notify().await.map(NotifyOutcome::Completed)
        } else {
            notifier.notify().await
        };
        let outcome = outcome.context("Notification cycle failed")?;

        log_outcome(&outcome);
        if json {
            let value = match &outcome {
                NotifyOutcome::Completed(report) => serde_json::to_value(report)?,
                NotifyOutcome::Skipped(reason) => json!({ "skipped": reason.to_string() }),
            };
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            self.renderer.render(&outcome.to_string());
            println!("Done!");
        }
        Ok(())
    }

    /// Prints stored state and a rota without sending anything.
    pub fn status(&self, week: Option<u64>, json: bool) -> Result<()> {
        let settings = StoreSettings::from_env().context("Failed to load configuration")?;
        let db = open_database(&settings, self.database_file.clone())?;

        let state = RotationState::load(&db).context("Failed to read rotation state")?;
        let assignments = WeekAssignments::for_week(week.unwrap_or(state.week));

        if json {
            let value = json!({ "state": state, "assignments": assignments });
            println!("{}", serde_json::to_string_pretty(&value)?);
            return Ok(());
        }

        let view = StatusView {
            state: &state,
            assignments: &assignments,
            time_zone: &settings.time_zone,
        };
        self.renderer.render(&view.to_string());
        Ok(())
    }

    fn notifier(&self) -> Result<Notifier<Database, TwilioClient>> {
        let config = Config::from_env().context("Failed to load configuration")?;
        info!("Running in {:?} mode", config.app_env);

        let db = open_database(&config.store, self.database_file.clone())?;
        let messenger = config
            .messaging
            .client()
            .context("Failed to create messaging client")?;

        Ok(Notifier::from_config(&config, db, messenger))
    }
}

fn open_database(settings: &StoreSettings, explicit: Option<PathBuf>) -> Result<Database> {
    let path = settings
        .database_path(explicit)
        .context("Failed to resolve database path")?;
    info!("Using database {}", path.display());
    Database::new(&path).with_context(|| format!("Failed to open database {}", path.display()))
}

fn log_outcome(outcome: &NotifyOutcome) {
    match outcome {
        NotifyOutcome::Skipped(reason) => info!("Cycle skipped: {reason}"),
        NotifyOutcome::Completed(report) => {
            info!(
                "Week {} done: {} of {} reminders sent, next week {}",
                report.assignments.week,
                report.sent_count(),
                report.deliveries.len(),
                report.next_week
            );
            for failure in report.failures() {
                error!(
                    "No {} reminder reached {} ({})",
                    failure.chore, failure.member, failure.phone
                );
            }
        }
    }
}
