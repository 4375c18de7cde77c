// In memory implementation of the ActivityDirectory port and the ActivityQueries port.
//
// Purpose
// - Hold the process-wide directory without a database.
//
// Responsibilities
// - Store activities keyed by exact name, each with a revision counter.
// - Reject saves made against a stale revision.

use crate::modules::activities::core::activity::{Activity, ActivityCatalog};
use crate::modules::activities::core::ports::{ActivityDirectory, DirectoryError, LoadedActivity};
use crate::modules::activities::use_cases::list_activities::projection::{
    ActivityListing, ActivityView,
};
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct Entry {
    activity: Activity,
    revision: u64,
}

#[derive(Default)]
pub struct InMemoryActivityDirectory {
    entries: RwLock<BTreeMap<String, Entry>>,
    delay_save_ms: AtomicU64,
    is_offline: bool,
}

impl InMemoryActivityDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(catalog: ActivityCatalog) -> Self {
        let entries = catalog
            .into_iter()
            .map(|(name, activity)| (name, Entry { activity, revision: 0 }))
            .collect();
        Self {
            entries: RwLock::new(entries),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Delays every save before it checks the revision. Used to force interleavings in tests.
    pub fn set_delay_save_ms(&self, delay_ms: u64) {
        self.delay_save_ms.store(delay_ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), DirectoryError> {
        if self.is_offline {
            return Err(DirectoryError::Backend("Activity directory offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityDirectory for InMemoryActivityDirectory {
    async fn load(&self, activity_name: &str) -> Result<Option<LoadedActivity>, DirectoryError> {
        self.ensure_online()?;
        let guard = self.entries.read().await;
        Ok(guard.get(activity_name).map(|entry| LoadedActivity {
            activity: entry.activity.clone(),
            revision: entry.revision,
        }))
    }

    async fn save(
        &self,
        activity_name: &str,
        expected_revision: u64,
        activity: Activity,
    ) -> Result<(), DirectoryError> {
        self.ensure_online()?;

        let delay_ms = self.delay_save_ms.load(Ordering::Relaxed);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }

        let mut guard = self.entries.write().await;
        let entry = guard
            .get_mut(activity_name)
            .ok_or_else(|| DirectoryError::UnknownActivity(activity_name.to_string()))?;
        if entry.revision != expected_revision {
            return Err(DirectoryError::RevisionMismatch {
                activity_name: activity_name.to_string(),
                expected: expected_revision,
                actual: entry.revision,
            });
        }
        entry.activity = activity;
        entry.revision += 1;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryActivityDirectory {
    async fn list_activities(&self) -> anyhow::Result<ActivityListing> {
        self.ensure_online()?;
        let guard = self.entries.read().await;
        Ok(guard
            .iter()
            .map(|(name, entry)| (name.clone(), ActivityView::from(&entry.activity)))
            .collect())
    }
}
