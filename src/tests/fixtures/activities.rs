// Shared test fixtures for activities.
// Defaults describe the seeded Chess Club so tests can override only what they care about.

use crate::modules::activities::core::activity::{Activity, ActivityCatalog};

pub struct ActivityBuilder {
    inner: Activity,
}

impl Default for ActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        }
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn schedule(mut self, v: impl Into<String>) -> Self {
        self.inner.schedule = v.into();
        self
    }

    pub fn max_participants(mut self, v: u32) -> Self {
        self.inner.max_participants = v;
        self
    }

    pub fn participants<I, S>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner = self.inner.with_participants(v);
        self
    }

    pub fn build(self) -> Activity {
        self.inner
    }
}

pub fn single_activity_catalog() -> ActivityCatalog {
    ActivityCatalog::from([("Chess Club".to_string(), ActivityBuilder::new().build())])
}

#[cfg(test)]
mod activity_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = ActivityBuilder::new()
            .description("desc")
            .schedule("Sundays")
            .max_participants(3)
            .participants(["a@x.edu"])
            .build();

        assert_eq!(custom.description, "desc");
        assert_eq!(custom.schedule, "Sundays");
        assert_eq!(custom.max_participants, 3);
        assert_eq!(custom.participants.to_vec(), vec!["a@x.edu"]);
    }
}
