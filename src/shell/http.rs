use axum::{
    Extension, Router,
    response::Redirect,
    routing::{delete, get, post},
};
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::modules::activities::use_cases::list_activities::inbound::http as list_http;
use crate::modules::activities::use_cases::sign_up_for_activity::inbound::http as sign_up_http;
use crate::modules::activities::use_cases::unregister_from_activity::inbound::http as unregister_http;
use crate::shell::graphql::{self, GRAPHQL_PATH};
use crate::shell::state::AppState;

pub const INDEX_PAGE: &str = "/static/index.html";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(redirect_to_index))
        .route("/activities", get(list_http::handle))
        .route("/activities/{activity_name}/signup", post(sign_up_http::handle))
        .route(
            "/activities/{activity_name}/unregister",
            delete(unregister_http::handle),
        )
        .with_state(state)
}

/// Full application: REST routes, GraphQL, and the static front-end.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    let schema = graphql::schema(state.clone());

    router(state)
        .route(GRAPHQL_PATH, get(graphql::graphiql).post(graphql::graphql))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn redirect_to_index() -> Redirect {
    Redirect::temporary(INDEX_PAGE)
}

#[cfg(test)]
mod shell_http_tests {
    use super::*;
    use crate::tests::fixtures::state::make_test_state;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header::LOCATION},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn it_should_redirect_the_root_to_the_index_page() {
        let response = router(make_test_state())
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        let location = response.headers()[LOCATION].to_str().unwrap();
        assert!(location.contains("/static/index.html"));
    }

    #[tokio::test]
    async fn it_should_return_405_for_the_wrong_method() {
        let response = router(make_test_state())
            .oneshot(
                Request::get("/activities/Chess%20Club/signup?email=a@mergington.edu")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
