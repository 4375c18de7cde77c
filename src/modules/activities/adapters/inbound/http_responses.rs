use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::activities::application::errors::ApplicationError;

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

pub fn message_response(message: String) -> Response {
    (StatusCode::OK, Json(MessageBody { message })).into_response()
}

pub fn detail_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            detail: detail.into(),
        }),
    )
        .into_response()
}

pub fn error_response(error: &ApplicationError) -> Response {
    let status = match error {
        ApplicationError::ActivityNotFound => StatusCode::NOT_FOUND,
        ApplicationError::Domain(_) => StatusCode::BAD_REQUEST,
        ApplicationError::Directory(cause) => {
            tracing::error!(error = %cause, "activity directory failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    detail_response(status, error.to_string())
}
