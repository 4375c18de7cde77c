use crate::modules::activities::core::activity::Activity;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

#[derive(Debug)]
pub enum Decision {
    Accepted { activity: Activity },
    Rejected { reason: DecideError },
}
