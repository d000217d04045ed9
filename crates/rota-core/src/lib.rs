//! Core library for the Rota household chore rotation.
//!
//! Six housemates share three weekly chores. The kitchen rotates through the
//! roster by week number; stairs and bins follow from who has the kitchen via
//! two fixed partner tables. Once a week the [`Notifier`] texts each assignee
//! and advances the persisted week counter.
//!
//! # Layers
//!
//! - **Models** ([`models`], [`rotation`]): roster, chores, and the
//!   week-to-assignment mapping. Pure data, no I/O.
//! - **Collaborators** ([`store`], [`db`], [`messenger`]): the key-value
//!   store and SMS provider behind traits, with SQLite and Twilio
//!   implementations.
//! - **Cycle** ([`notifier`]): gating, sending, and state advancement.
//! - **Presentation** ([`display`]): markdown `Display` implementations.
//!
//! # Quick Start
//!
//! ```rust
//! use rota_core::{models::Member, WeekAssignments};
//!
//! let rota = WeekAssignments::for_week(7);
//! assert_eq!(rota.kitchen, Member::Ash);
//! assert_eq!(rota.stairs, Member::Ellie);
//! assert_eq!(rota.bins, Member::Ang);
//! ```

pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod messenger;
pub mod models;
pub mod notifier;
pub mod rotation;
pub mod store;

// Re-export commonly used types
pub use config::{AppEnv, Config};
pub use db::Database;
pub use display::{LocalDateTime, StatusView};
pub use error::{Result, RotaError};
pub use messenger::{Messenger, ProviderError, TwilioClient};
pub use models::{Chore, Member, Person, Roster};
pub use notifier::{CycleReport, Gate, Notifier, NotifyOutcome};
pub use rotation::WeekAssignments;
pub use store::{KeyValueStore, MemoryStore, RotationState};
