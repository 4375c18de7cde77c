use axum::{
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;

use crate::modules::activities::adapters::inbound::http_responses::{
    detail_response, error_response, message_response,
};
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UnregisterParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    params: Result<Query<UnregisterParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return detail_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };
    let command = UnregisterFromActivity::new(activity_name, params.email);
    let confirmation = command.confirmation();

    match state.unregister_handler.handle(command).await {
        Ok(()) => message_response(confirmation),
        Err(error) => error_response(&error),
    }
}
