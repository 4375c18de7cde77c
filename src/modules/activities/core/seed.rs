use crate::modules::activities::core::activity::{Activity, ActivityCatalog};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Shape of one entry in a seed file. Matches the `GET /activities` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedActivity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl From<SeedActivity> for Activity {
    fn from(seed: SeedActivity) -> Self {
        Activity::new(seed.description, seed.schedule, seed.max_participants)
            .with_participants(seed.participants)
    }
}

/// Parses a JSON object of activity name to activity. Repeated emails collapse to one.
pub fn parse_seed(json: &str) -> Result<ActivityCatalog, serde_json::Error> {
    let seeds: BTreeMap<String, SeedActivity> = serde_json::from_str(json)?;
    Ok(seeds
        .into_iter()
        .map(|(name, seed)| (name, seed.into()))
        .collect())
}

pub fn default_activities() -> ActivityCatalog {
    [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice and compete in inter-school basketball games",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                15,
            )
            .with_participants(["james@mergington.edu"]),
        ),
        (
            "Soccer Club",
            Activity::new(
                "Train together and play friendly soccer matches",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                22,
            )
            .with_participants(["lucas@mergington.edu"]),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore painting, drawing, and mixed media",
                "Wednesdays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["ava@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Act, direct, and stage the school plays",
                "Thursdays, 3:30 PM - 5:30 PM",
                20,
            )
            .with_participants(["mia@mergington.edu"]),
        ),
        (
            "Math Olympiad",
            Activity::new(
                "Solve competition problems and prepare for math olympiads",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(["noah@mergington.edu"]),
        ),
        (
            "Debate Team",
            Activity::new(
                "Build argumentation skills and compete in debate tournaments",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            )
            .with_participants(["liam@mergington.edu"]),
        ),
    ]
    .into_iter()
    .map(|(name, activity)| (name.to_string(), activity))
    .collect()
}
