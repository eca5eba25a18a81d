//! Route definitions for the chatgate API.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::{auth, handlers, AppState};

/// Create API routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication
        .route("/auth/login", post(auth::handlers::login))
        .route("/auth/logout", post(auth::handlers::logout))
        .route("/auth/check-session", post(auth::handlers::check_session))
        // Chat
        .route("/chat/send", post(handlers::send_message))
        .route("/chat/clear", post(handlers::clear_chat))
        .route("/chat/copy", post(handlers::copy_text))
        .route("/chat/update", put(handlers::update_message))
        .route("/chat/message", delete(handlers::delete_message))
        .route("/chat/history", get(handlers::chat_history))
        // Model settings
        .route("/settings/temperature", post(handlers::set_temperature))
        .route("/settings/topp", post(handlers::set_top_p))
        // Profile and system
        .route("/profile", get(handlers::get_profile))
        .route("/health", get(handlers::health_check))
        .route("/info", get(handlers::server_info))
        .route("/Root", get(handlers::root_message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AppState, WebConfig};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check_route() {
        let state = AppState::new(WebConfig::default());
        let app = api_routes().with_state(state);

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/health")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let state = AppState::new(WebConfig::default());
        let app = api_routes().with_state(state);

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/no-such-endpoint")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
