use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::ports::{ActivityDirectory, DirectoryError};
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::decide::decide_sign_up;
use std::sync::Arc;

pub struct SignUpForActivityHandler<TDirectory>
where
    TDirectory: ActivityDirectory + Send + Sync + 'static,
{
    directory: Arc<TDirectory>,
}

impl<TDirectory> SignUpForActivityHandler<TDirectory>
where
    TDirectory: ActivityDirectory + Send + Sync + 'static,
{
    pub fn new(directory: Arc<TDirectory>) -> Self {
        Self { directory }
    }

    pub async fn handle(&self, command: SignUpForActivity) -> Result<(), ApplicationError> {
        let mut attempt: u32 = 1;
        loop {
            let loaded = self
                .directory
                .load(&command.activity_name)
                .await?
                .ok_or(ApplicationError::ActivityNotFound)?;

            let activity = match decide_sign_up(loaded.activity, &command) {
                Decision::Accepted { activity } => activity,
                Decision::Rejected { reason } => return Err(reason.into()),
            };

            match self
                .directory
                .save(&command.activity_name, loaded.revision, activity)
                .await
            {
                Ok(()) => {
                    tracing::info!(
                        activity = %command.activity_name,
                        email = %command.email,
                        "student signed up"
                    );
                    return Ok(());
                }
                Err(DirectoryError::RevisionMismatch { .. }) => {
                    tracing::debug!(activity = %command.activity_name, attempt, "roster changed concurrently, retrying");
                    attempt += 1;
                }
                Err(error) => return Err(error.into()),
            }
        }
    }
}
