//! The week-to-assignment mapping.
//!
//! The kitchen follows [`ROSTER`] order, indexed by the week counter modulo
//! the roster size. Stairs and bins are looked up from the kitchen assignee
//! through the fixed partner tables on [`Member`].

use serde::Serialize;

use crate::models::{Chore, Member, ROSTER, ROSTER_SIZE};

/// Who does what in a given week.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct WeekAssignments {
    pub week: u64,
    pub kitchen: Member,
    pub stairs: Member,
    pub bins: Member,
}

impl WeekAssignments {
    /// Derives the assignments for a week counter value.
    pub fn for_week(week: u64) -> Self {
        let kitchen = kitchen_for_week(week);
        Self {
            week,
            kitchen,
            stairs: kitchen.stairs_partner(),
            bins: kitchen.bins_partner(),
        }
    }

    /// Assignee for a single chore.
    pub fn assignee(&self, chore: Chore) -> Member {
        match chore {
            Chore::Kitchen => self.kitchen,
            Chore::Stairs => self.stairs,
            Chore::Bins => self.bins,
        }
    }

    /// Chore and assignee pairs in sending order.
    pub fn pairs(&self) -> [(Chore, Member); 3] {
        Chore::ALL.map(|chore| (chore, self.assignee(chore)))
    }
}

/// Roster member on kitchen duty for `week`.
pub fn kitchen_for_week(week: u64) -> Member {
    // ROSTER_SIZE is a non-zero constant, so the remainder always indexes.
    ROSTER[(week % ROSTER_SIZE as u64) as usize]
}
