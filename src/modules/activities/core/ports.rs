// Ports the activities core needs from the outside world.
//
// Responsibilities
// - Load an activity together with the revision it was read at.
// - Save an activity only if nobody else saved it since that revision.
//   A mismatch means another writer made progress, so callers reload and retry.
//
// Boundaries
// - No concrete storage here. Adapters implement these traits.

use crate::modules::activities::core::activity::Activity;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("revision mismatch for {activity_name}: expected {expected}, actual {actual}")]
    RevisionMismatch {
        activity_name: String,
        expected: u64,
        actual: u64,
    },

    #[error("unknown activity: {0}")]
    UnknownActivity(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone)]
pub struct LoadedActivity {
    pub activity: Activity,
    pub revision: u64,
}

#[async_trait]
pub trait ActivityDirectory: Send + Sync {
    async fn load(&self, activity_name: &str) -> Result<Option<LoadedActivity>, DirectoryError>;
    async fn save(
        &self,
        activity_name: &str,
        expected_revision: u64,
        activity: Activity,
    ) -> Result<(), DirectoryError>;
}
