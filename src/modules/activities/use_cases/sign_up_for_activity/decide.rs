use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;

pub fn decide_sign_up(mut activity: Activity, command: &SignUpForActivity) -> Decision {
    if !activity.participants.insert(command.email.as_str()) {
        return Decision::Rejected {
            reason: DecideError::AlreadySignedUp,
        };
    }
    Decision::Accepted { activity }
}
