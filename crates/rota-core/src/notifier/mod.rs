//! The weekly reminder cycle.
//!
//! [`Notifier`] ties the pieces together:
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ KeyValueStore│──▶│     Gate     │──▶│   Rotation   │──▶│  Messenger   │
//! │ (load state) │   │ (day, 6 days)│   │ (week → who) │   │ (3 reminders)│
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//!                                                                 │
//!                          save week + 1, last_notified ◀─────────┘
//! ```
//!
//! Store and messenger are passed in at construction, so tests swap them for
//! [`crate::store::MemoryStore`] and a scripted messenger.
//!
//! Each reminder is sent and judged on its own. A provider error for one
//! person is logged and recorded in the [`CycleReport`]; the remaining
//! reminders still go out and the state still advances. Store errors are
//! returned to the caller.
//!
//! # Example
//!
//! ```rust,no_run
//! use rota_core::{Config, Database, Notifier};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let store = Database::new(config.store.database_path(None)?)?;
//! let messenger = config.messaging.client()?;
//!
//! let notifier = Notifier::from_config(&config, store, messenger);
//! let outcome = notifier.notify().await?;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```

use jiff::Timestamp;
use log::{error, info, warn};

pub mod gate;
pub mod report;


pub use gate::{Gate, SkipReason};
pub use report::{CycleReport, Delivery, DeliveryStatus, NotifyOutcome};

use crate::{
    config::Config,
    error::Result,
    messenger::Messenger,
    models::Roster,
    rotation::WeekAssignments,
    store::{KeyValueStore, RotationState},
};

/// Sends the week's chore reminders and advances the rotation.
pub struct Notifier<S, M> {
    store: S,
    messenger: M,
    roster: Roster,
    sender: String,
    gate: Gate,
}

impl<S, M> Notifier<S, M>
where
    S: KeyValueStore,
    M: Messenger,
{
    /// Creates a notifier gated on Sundays in the system time zone.
    pub fn new(store: S, messenger: M, roster: Roster, sender: impl Into<String>) -> Self {
        Self {
            store,
            messenger,
            roster,
            sender: sender.into(),
            gate: Gate::default(),
        }
    }

    /// Creates a notifier using the roster, sender and schedule from `config`.
    pub fn from_config(config: &Config, store: S, messenger: M) -> Self {
        Self::new(
            store,
            messenger,
            config.roster.clone(),
            config.messaging.sender.clone(),
        )
        .with_gate(Gate::new(config.notify_day, config.store.time_zone.clone()))
    }

    /// Replaces the send window.
    pub fn with_gate(mut self, gate: Gate) -> Self {
        self.gate = gate;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn messenger(&self) -> &M {
        &self.messenger
    }

    /// Runs a gated cycle at the current time.
    pub async fn notify(&self) -> Result<NotifyOutcome> {
        self.notify_at(Timestamp::now()).await
    }

    /// Runs a gated cycle as if the time were `now`.
    ///
    /// When the gate is closed nothing is sent and nothing is written.
    pub async fn notify_at(&self, now: Timestamp) -> Result<NotifyOutcome> {
        let state = RotationState::load(&self.store)?;

        if let Some(reason) = self.gate.check(state.last_notified, now)? {
            warn!("Not notifying, {reason}");
            return Ok(NotifyOutcome::Skipped(reason));
        }

        self.run_cycle(state, now)
            .await
            .map(NotifyOutcome::Completed)
    }

    /// Runs a cycle at the current time without consulting the gate.
    pub async fn force_notify(&self) -> Result<CycleReport> {
        let state = RotationState::load(&self.store)?;
        info!("Gate bypassed, forcing week {}", state.week);
        self.run_cycle(state, Timestamp::now()).await
    }

    async fn run_cycle(&self, state: RotationState, now: Timestamp) -> Result<CycleReport> {
        // Fail before anything is sent if the counter cannot move on.
        let next = state.advanced(now)?;
        let assignments = WeekAssignments::for_week(state.week);

        info!(
            "Notifying! week: {}, kitchen: {}, stairs: {}, bins: {}",
            assignments.week, assignments.kitchen, assignments.stairs, assignments.bins
        );

        let mut deliveries = Vec::with_capacity(3);
        for (chore, member) in assignments.pairs() {
            let person = self.roster.person(member);
            let status = match self
                .messenger
                .send(&self.sender, &person.phone, &chore.reminder())
                .await
            {
                Ok(receipt) => {
                    info!("Sent {chore} reminder to {member} ({})", receipt.sid);
                    DeliveryStatus::Sent { sid: receipt.sid }
                }
                Err(e) => {
                    error!("Failed to send {chore} reminder to {member}: {e}");
                    DeliveryStatus::Failed {
                        error: e.to_string(),
                    }
                }
            };

            deliveries.push(Delivery {
                chore,
                member,
                phone: person.phone.clone(),
                status,
            });
        }

        next.save(&self.store)?;

        Ok(CycleReport {
            assignments,
            deliveries,
            next_week: next.week,
        })
    }
}
