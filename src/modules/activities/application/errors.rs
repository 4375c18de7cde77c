use crate::modules::activities::core::decision::DecideError;
use crate::modules::activities::core::ports::DirectoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error(transparent)]
    Domain(#[from] DecideError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}
