//! Household members and the fixed partner tables.

use std::fmt;

use serde::Serialize;

/// A member of the household roster.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Member {
    Lexy,
    Ash,
    Lorenzo,
    Kevin,
    Ellie,
    Ang,
}

/// Number of people on the roster.
pub const ROSTER_SIZE: usize = 6;

/// Roster in kitchen rotation order.
pub const ROSTER: [Member; ROSTER_SIZE] = [
    Member::Lexy,
    Member::Ash,
    Member::Lorenzo,
    Member::Kevin,
    Member::Ellie,
    Member::Ang,
];

impl Member {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Member::Lexy => "Lexy",
            Member::Ash => "Ash",
            Member::Lorenzo => "Lorenzo",
            Member::Kevin => "Kevin",
            Member::Ellie => "Ellie",
            Member::Ang => "Ang",
        }
    }

    /// Position in [`ROSTER`].
    pub fn index(&self) -> usize {
        match self {
            Member::Lexy => 0,
            Member::Ash => 1,
            Member::Lorenzo => 2,
            Member::Kevin => 3,
            Member::Ellie => 4,
            Member::Ang => 5,
        }
    }

    /// Environment variable holding this member's phone number.
    pub fn env_key(&self) -> String {
        self.name().to_uppercase()
    }

    /// Who does the stairs when `self` has the kitchen.
    pub fn stairs_partner(&self) -> Member {
        match self {
            Member::Kevin => Member::Lexy,
            Member::Ash => Member::Ellie,
            Member::Ang => Member::Lorenzo,
            Member::Lexy => Member::Kevin,
            Member::Ellie => Member::Ash,
            Member::Lorenzo => Member::Ang,
        }
    }

    /// Who does the bins when `self` has the kitchen.
    pub fn bins_partner(&self) -> Member {
        match self {
            Member::Kevin => Member::Lorenzo,
            Member::Ash => Member::Ang,
            Member::Ang => Member::Ash,
            Member::Lexy => Member::Ellie,
            Member::Ellie => Member::Lexy,
            Member::Lorenzo => Member::Kevin,
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
