use crate::modules::activities::core::roster::Roster;
use std::collections::BTreeMap;

/// The directory contents, keyed by exact (case-sensitive) activity name.
pub type ActivityCatalog = BTreeMap<String, Activity>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    // Informational only; signups never check it.
    pub max_participants: u32,
    pub participants: Roster,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Roster::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_signed_up(&self, email: &str) -> bool {
        self.participants.contains(email)
    }
}
