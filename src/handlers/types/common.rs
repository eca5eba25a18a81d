//! Common types used across multiple handlers.

use serde::Serialize;
use utoipa::ToSchema;

/// Generic single-message acknowledgement.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Logged out")]
    pub message: String,
}

/// Error payload used by every failing endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Invalid session")]
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "OK")]
    pub status: String,
}

/// Server identity response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServerInfoResponse {
    #[schema(example = "AI Service")]
    pub name: String,
    #[schema(example = "1.0.0")]
    pub version: String,
}

/// Fixed profile of the single known identity.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    #[schema(example = "Vitaliy Shutenko")]
    pub username: String,
    #[schema(example = "v_shutenko@example.com")]
    pub email: String,
    #[schema(example = "User")]
    pub role: String,
}
