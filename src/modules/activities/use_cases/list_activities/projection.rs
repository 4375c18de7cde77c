use crate::modules::activities::core::activity::Activity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type ActivityListing = BTreeMap<String, ActivityView>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<&Activity> for ActivityView {
    fn from(activity: &Activity) -> Self {
        Self {
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            max_participants: activity.max_participants,
            participants: activity.participants.to_vec(),
        }
    }
}
