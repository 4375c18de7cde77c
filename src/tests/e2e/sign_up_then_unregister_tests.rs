use crate::modules::activities::adapters::outbound::directory_in_memory::InMemoryActivityDirectory;
use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::core::decision::DecideError;
use crate::modules::activities::core::seed::default_activities;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::SignUpForActivityHandler;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::modules::activities::use_cases::unregister_from_activity::handler::UnregisterFromActivityHandler;
use std::sync::Arc;

#[tokio::test]
async fn signs_up_lists_and_unregisters_a_student() {
    let directory = Arc::new(InMemoryActivityDirectory::seeded(default_activities()));
    let sign_up = SignUpForActivityHandler::new(directory.clone());
    let unregister = UnregisterFromActivityHandler::new(directory.clone());
    let email = "test_user@mergington.edu";

    sign_up
        .handle(SignUpForActivity::new("Programming Class", email))
        .await
        .unwrap();
    let listing = directory.list_activities().await.unwrap();
    assert_eq!(
        listing["Programming Class"].participants,
        vec!["emma@mergington.edu", "sophia@mergington.edu", email]
    );

    unregister
        .handle(UnregisterFromActivity::new("Programming Class", email))
        .await
        .unwrap();
    let listing = directory.list_activities().await.unwrap();
    assert!(!listing["Programming Class"].participants.contains(&email.to_string()));

    let again = unregister
        .handle(UnregisterFromActivity::new("Programming Class", email))
        .await;
    assert!(matches!(
        again,
        Err(ApplicationError::Domain(DecideError::NotSignedUp))
    ));
}

#[tokio::test]
async fn a_student_may_join_several_activities() {
    let directory = Arc::new(InMemoryActivityDirectory::seeded(default_activities()));
    let sign_up = SignUpForActivityHandler::new(directory.clone());

    for name in ["Soccer Club", "Drama Club", "Chess Club"] {
        sign_up
            .handle(SignUpForActivity::new(name, "zoe@mergington.edu"))
            .await
            .unwrap_or_else(|e| panic!("{name}: {e}"));
    }

    let listing = directory.list_activities().await.unwrap();
    let memberships = listing
        .values()
        .filter(|activity| activity.participants.iter().any(|p| p == "zoe@mergington.edu"))
        .count();
    assert_eq!(memberships, 3);
}
