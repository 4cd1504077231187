//! HTTP server module

mod api;
mod hardware;
mod notes;

use std::sync::Arc;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub use api::HealthResponse;
pub use hardware::{escape_html, render_page};
pub use notes::{CreateNoteRequest, ErrorResponse};

/// Create the HTTP router with all routes configured
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::permanent("/hardware") }))
        .route("/hardware", get(hardware::hardware_page))
        .route("/api/health", get(api::health))
        .route(
            "/api/notes",
            post(notes::create_note).fallback(notes::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;

    fn server() -> TestServer {
        let state = Arc::new(AppState::new_for_testing().unwrap());
        TestServer::new(create_router(state)).unwrap()
    }

    #[tokio::test]
    async fn test_router_has_health_endpoint() {
        let response = server().get("/api/health").await;
        response.assert_status_ok();
        let health: HealthResponse = response.json();
        assert_eq!(health.status, "ok");
    }

    #[tokio::test]
    async fn test_root_redirects_to_hardware() {
        let response = server().get("/").await;
        response.assert_status(StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.header("location"), "/hardware");
    }

    #[tokio::test]
    async fn test_hardware_page_is_html() {
        let response = server().get("/hardware").await;
        response.assert_status_ok();
        assert!(
            response
                .header("content-type")
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
        assert!(response.text().contains("<h1 class=\"m-10\">Hardware</h1>"));
    }

    #[tokio::test]
    async fn test_notes_route_wired() {
        let response = server()
            .post("/api/notes")
            .json(&serde_json::json!({"title": "t", "content": "c"}))
            .await;
        response.assert_status_ok();

        server()
            .get("/api/notes")
            .await
            .assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }
}
