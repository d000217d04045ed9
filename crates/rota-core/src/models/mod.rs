//! Domain models for the chore rotation.
//!
//! The roster and the partner tables are fixed data. [`Member`] names a
//! household member, [`Person`] pairs a member with the phone number resolved
//! from configuration, and [`Chore`] enumerates the jobs that rotate.

pub mod chore;
pub mod member;
pub mod person;

pub use chore::Chore;
pub use member::{Member, ROSTER, ROSTER_SIZE};
pub use person::{Person, Roster};
