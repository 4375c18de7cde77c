use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::activities::adapters::inbound::http_responses::detail_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.queries.list_activities().await {
        Ok(activities) => Json(activities).into_response(),
        Err(error) => {
            tracing::error!(error = %error, "failed to list activities");
            detail_response(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    }
}

#[cfg(test)]
mod list_activities_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::state::{make_offline_directory_state, make_test_state};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/activities", get(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_200_with_every_seeded_activity() {
        let response = app(make_test_state())
            .oneshot(Request::get("/activities").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let activities = json.as_object().unwrap();
        assert!(activities.contains_key("Chess Club"));
        assert!(activities.contains_key("Programming Class"));
        assert!(activities.contains_key("Basketball Team"));
        for activity in activities.values() {
            assert!(activity["description"].is_string());
            assert!(activity["schedule"].is_string());
            assert!(activity["max_participants"].is_u64());
            assert!(activity["participants"].is_array());
        }
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_directory_is_offline() {
        let response = app(make_offline_directory_state())
            .oneshot(Request::get("/activities").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
