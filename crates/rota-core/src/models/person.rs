//! People with contact details, and the roster built from them.

use super::{Member, ROSTER};

/// A roster member together with the number reminders are sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub member: Member,
    pub phone: String,
}

/// Contact details for every roster member, in rotation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    /// Builds the roster by resolving a phone number for each member.
    ///
    /// Returns the first member for which `resolve` yields `None`.
    pub fn resolve<F>(mut resolve: F) -> Result<Self, Member>
    where
        F: FnMut(Member) -> Option<String>,
    {
        let people = ROSTER
            .into_iter()
            .map(|member| {
                resolve(member)
                    .map(|phone| Person { member, phone })
                    .ok_or(member)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { people })
    }

    /// Looks up the contact details for a member.
    pub fn person(&self, member: Member) -> &Person {
        // `resolve` stores exactly one entry per member, in roster order.
        &self.people[member.index()]
    }

    /// Iterates over people in rotation order.
    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.iter()
    }
}
