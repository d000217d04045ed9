//! Chore kinds and reminder composition.

use std::fmt;

use serde::Serialize;

/// Type-safe enumeration of the rotating chores.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Chore {
    /// Primary chore, follows the roster order
    Kitchen,

    /// Paired with the kitchen assignee via the stairs table
    Stairs,

    /// Paired with the kitchen assignee via the bins table
    Bins,
}

impl Chore {
    /// All chores in the order reminders are sent.
    pub const ALL: [Chore; 3] = [Chore::Kitchen, Chore::Stairs, Chore::Bins];

    /// Convert to the lowercase key used in logs and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Chore::Kitchen => "kitchen",
            Chore::Stairs => "stairs",
            Chore::Bins => "bins",
        }
    }

    /// Human-readable description quoted in the reminder text.
    pub fn description(&self) -> &'static str {
        match self {
            Chore::Kitchen => "Kitchen this week",
            Chore::Stairs => "Stairs this week (and 2f bathroom if you use it...)",
            Chore::Bins => "Bins (picked up Thursday or Monday)",
        }
    }

    /// Composes the SMS body for this chore.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rota_core::models::Chore;
    ///
    /// assert_eq!(
    ///     Chore::Kitchen.reminder(),
    ///     "Yo yo yo it's your turn to do the Kitchen this week. Get hustling!"
    /// );
    /// ```
    pub fn reminder(&self) -> String {
        format!(
            "Yo yo yo it's your turn to do the {}. Get hustling!",
            self.description()
        )
    }
}

impl fmt::Display for Chore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reminder_is_deterministic() {
        for chore in Chore::ALL {
            assert_eq!(chore.reminder(), chore.reminder());
            assert!(chore.reminder().contains(chore.description()));
        }
    }

    #[test]
    fn test_reminder_texts() {
        assert_eq!(
            Chore::Stairs.reminder(),
            "Yo yo yo it's your turn to do the Stairs this week (and 2f bathroom if you use it...). Get hustling!"
        );
        assert_eq!(
            Chore::Bins.reminder(),
            "Yo yo yo it's your turn to do the Bins (picked up Thursday or Monday). Get hustling!"
        );
    }
}
