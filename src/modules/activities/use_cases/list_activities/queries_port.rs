use crate::modules::activities::use_cases::list_activities::projection::ActivityListing;
use async_trait::async_trait;

#[async_trait]
pub trait ActivityQueries {
    async fn list_activities(&self) -> anyhow::Result<ActivityListing>;
}
