//! System and profile handlers.

use axum::{
    extract::{Query, State},
    response::Json,
};

use super::types::{
    ErrorResponse, HealthResponse, MessageResponse, ProfileResponse, ServerInfoResponse,
    SessionTokenQuery,
};
use crate::auth::AuthError;
use crate::AppState;

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "System",
    summary = "Health check",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
    })
}

/// Server identity endpoint.
#[utoipa::path(
    get,
    path = "/api/info",
    tag = "System",
    summary = "Server information",
    responses(
        (status = 200, description = "Server name and version", body = ServerInfoResponse)
    )
)]
pub async fn server_info() -> Json<ServerInfoResponse> {
    Json(ServerInfoResponse {
        name: "AI Service".to_string(),
        version: "1.0.0".to_string(),
    })
}

/// Root API endpoint.
#[utoipa::path(
    get,
    path = "/api/Root",
    tag = "System",
    summary = "Root endpoint",
    responses(
        (status = 200, description = "Service greeting", body = MessageResponse)
    )
)]
pub async fn root_message() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Service API".to_string(),
    })
}

/// Profile of the authenticated identity.
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "Profile",
    summary = "Get user profile",
    params(SessionTokenQuery),
    responses(
        (status = 200, description = "Profile information", body = ProfileResponse),
        (status = 401, description = "Invalid session", body = ErrorResponse)
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Query(query): Query<SessionTokenQuery>,
) -> Result<Json<ProfileResponse>, AuthError> {
    state.auth.require_session(&query.session_token)?;

    Ok(Json(ProfileResponse {
        username: "Vitaliy Shutenko".to_string(),
        email: "v_shutenko@example.com".to_string(),
        role: "User".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::{create_app, AppState, WebConfig};

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let app = create_app(AppState::new(WebConfig::default()));

        let response = app
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "OK");
    }

    #[tokio::test]
    async fn test_info_reports_service_identity() {
        let app = create_app(AppState::new(WebConfig::default()));

        let response = app
            .oneshot(Request::builder().uri("/api/info").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["name"], "AI Service");
        assert_eq!(body["version"], "1.0.0");
    }

    #[tokio::test]
    async fn test_profile_requires_session() {
        let app = create_app(AppState::new(WebConfig::default()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/profile?sessionToken=bogus")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_profile_with_valid_session() {
        let state = AppState::new(WebConfig::default());
        let token = state.auth.login("v_shutenko", "8nEThznM").unwrap();
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/profile?sessionToken={token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["username"], "Vitaliy Shutenko");
        assert_eq!(body["role"], "User");
    }
}
