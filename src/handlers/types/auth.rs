//! Authentication request/response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Login form body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(rename = "Login")]
    #[schema(example = "v_shutenko")]
    pub login: String,
    #[serde(rename = "Password")]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Success")]
    pub message: String,
    #[serde(rename = "redirectUrl")]
    #[schema(example = "/request/model.html")]
    pub redirect_url: String,
    #[serde(rename = "sessionToken")]
    pub session_token: String,
}

/// Form body carrying only a session token.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SessionTokenForm {
    #[serde(rename = "sessionToken")]
    pub session_token: String,
}

/// Query-string variant of the session token, for GET endpoints.
#[derive(Debug, Deserialize, IntoParams)]
pub struct SessionTokenQuery {
    #[serde(rename = "sessionToken")]
    pub session_token: String,
}

/// Session check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct CheckSessionResponse {
    pub valid: bool,
    #[serde(rename = "userLogin")]
    #[schema(example = "v_shutenko")]
    pub user_login: String,
    #[serde(rename = "expiresAt")]
    pub expires_at: DateTime<Utc>,
}
