//! Authentication handlers: login, logout, and session check.

use axum::{
    extract::{Form, State},
    response::Json,
};
use tracing::info;

use super::AuthError;
use crate::handlers::types::{
    CheckSessionResponse, ErrorResponse, LoginRequest, LoginResponse, MessageResponse,
    SessionTokenForm,
};
use crate::AppState;

/// Log in with the fixed credential pair.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    summary = "Log in",
    description = "Authenticate with login and password; returns a session token on success",
    request_body(content = LoginRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Form(request): Form<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    let token = state.auth.login(&request.login, &request.password)?;

    info!("User logged in: {}", request.login);
    Ok(Json(LoginResponse {
        message: "Success".to_string(),
        redirect_url: "/request/model.html".to_string(),
        session_token: token,
    }))
}

/// Log out, dropping the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Auth",
    summary = "Log out",
    description = "Remove the session for the given token; succeeds even for unknown tokens",
    request_body(content = SessionTokenForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Logged out", body = MessageResponse)
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    Form(request): Form<SessionTokenForm>,
) -> Json<MessageResponse> {
    state.auth.logout(&request.session_token);

    info!("Session logged out");
    Json(MessageResponse {
        message: "Logged out".to_string(),
    })
}

/// Check whether a session token is still valid.
#[utoipa::path(
    post,
    path = "/api/auth/check-session",
    tag = "Auth",
    summary = "Check session",
    description = "Report validity, identity, and expiry of a session token",
    request_body(content = SessionTokenForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Session is valid", body = CheckSessionResponse),
        (status = 401, description = "Invalid session", body = ErrorResponse)
    )
)]
pub async fn check_session(
    State(state): State<AppState>,
    Form(request): Form<SessionTokenForm>,
) -> Result<Json<CheckSessionResponse>, AuthError> {
    let record = state.auth.require_session(&request.session_token)?;

    Ok(Json(CheckSessionResponse {
        valid: true,
        user_login: record.identity,
        expires_at: record.expires_at,
    }))
}
