use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;

pub fn decide_unregister(mut activity: Activity, command: &UnregisterFromActivity) -> Decision {
    if !activity.participants.remove(&command.email) {
        return Decision::Rejected {
            reason: DecideError::NotSignedUp,
        };
    }
    Decision::Accepted { activity }
}
