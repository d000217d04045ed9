//! Markdown rendering of rotas and cycle results.
//!
//! Domain types implement [`std::fmt::Display`] as markdown so the CLI can
//! hand the text straight to its terminal renderer. [`StatusView`] combines
//! persisted state with the rota it implies.

use std::fmt;

use jiff::tz::TimeZone;

pub mod datetime;

pub use datetime::LocalDateTime;

use crate::{
    notifier::{CycleReport, DeliveryStatus, NotifyOutcome},
    rotation::WeekAssignments,
    store::RotationState,
};

impl fmt::Display for WeekAssignments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Week {}", self.week)?;
        writeln!(f)?;
        writeln!(f, "| Chore | Who |")?;
        writeln!(f, "|:-|:-|")?;
        for (chore, member) in self.pairs() {
            writeln!(f, "| {} | **{member}** |", chore.description())?;
        }
        Ok(())
    }
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Week {} reminders", self.assignments.week)?;
        writeln!(f)?;
        writeln!(f, "| Chore | Who | Result |")?;
        writeln!(f, "|:-|:-|:-|")?;
        for delivery in &self.deliveries {
            let result = match &delivery.status {
                DeliveryStatus::Sent { sid } => format!("✓ sent ({sid})"),
                DeliveryStatus::Failed { error } => format!("✗ {error}"),
            };
            writeln!(f, "| {} | {} | {result} |", delivery.chore, delivery.member)?;
        }
        writeln!(f)?;
        write!(
            f,
            "{} of {} reminders sent. Next week: {}",
            self.sent_count(),
            self.deliveries.len(),
            self.next_week
        )
    }
}

impl fmt::Display for NotifyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyOutcome::Skipped(reason) => write!(f, "Not notifying: {reason}"),
            NotifyOutcome::Completed(report) => write!(f, "{report}"),
        }
    }
}

/// Persisted state plus the rota for a week.
pub struct StatusView<'a> {
    pub state: &'a RotationState,
    pub assignments: &'a WeekAssignments,
    pub time_zone: &'a TimeZone,
}

impl fmt::Display for StatusView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Chore rota")?;
        writeln!(f)?;
        writeln!(f, "**Week counter:** {}", self.state.week)?;
        match &self.state.last_notified {
            Some(ts) => writeln!(
                f,
                "**Last notified:** {}",
                LocalDateTime::new(ts, self.time_zone)
            )?,
            None => writeln!(f, "**Last notified:** never")?,
        }
        writeln!(f)?;
        write!(f, "{}", self.assignments)
    }
}
