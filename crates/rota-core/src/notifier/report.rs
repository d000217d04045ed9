//! Outcome of a notification run.

use serde::Serialize;

use super::gate::SkipReason;
use crate::{
    models::{Chore, Member},
    rotation::WeekAssignments,
};

/// Result of sending one reminder.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sent { sid: String },
    Failed { error: String },
}

/// One reminder attempt.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Delivery {
    pub chore: Chore,
    pub member: Member,
    pub phone: String,
    pub status: DeliveryStatus,
}

impl Delivery {
    pub fn is_sent(&self) -> bool {
        matches!(self.status, DeliveryStatus::Sent { .. })
    }
}

/// Everything that happened in a cycle that passed the gate.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CycleReport {
    pub assignments: WeekAssignments,
    pub deliveries: Vec<Delivery>,
    /// Week counter persisted at the end of the cycle
    pub next_week: u64,
}

impl CycleReport {
    pub fn sent_count(&self) -> usize {
        self.deliveries.iter().filter(|d| d.is_sent()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &Delivery> {
        self.deliveries.iter().filter(|d| !d.is_sent())
    }
}

/// What [`super::Notifier::notify`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// The gate was closed; nothing was sent or written
    Skipped(SkipReason),
    /// A cycle ran and state advanced
    Completed(CycleReport),
}

impl NotifyOutcome {
    pub fn report(&self) -> Option<&CycleReport> {
        match self {
            NotifyOutcome::Completed(report) => Some(report),
            NotifyOutcome::Skipped(_) => None,
        }
    }
}
