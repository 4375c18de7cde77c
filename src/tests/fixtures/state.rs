use crate::modules::activities::adapters::outbound::directory_in_memory::InMemoryActivityDirectory;
use crate::modules::activities::core::seed::default_activities;
use crate::shell::state::AppState;
use std::sync::Arc;

pub fn make_test_state() -> AppState {
    AppState::in_memory(Arc::new(InMemoryActivityDirectory::seeded(
        default_activities(),
    )))
}

pub fn make_offline_directory_state() -> AppState {
    let mut directory = InMemoryActivityDirectory::seeded(default_activities());
    directory.toggle_offline();
    AppState::in_memory(Arc::new(directory))
}
