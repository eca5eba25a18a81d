//! Model parameter handlers.
//!
//! Temperature and top-p are integer-scaled values with fixed bounds. A
//! request can fail two distinct ways through the same gate: 401 for a bad
//! session, 400 for a value outside its range.

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use tracing::info;

use super::types::{ErrorResponse, SettingValueResponse, SetValueRequest};
use crate::auth::AuthError;
use crate::AppState;

/// Accepted temperature range (value is temperature x 100).
const TEMPERATURE_MIN: i64 = 0;
const TEMPERATURE_MAX: i64 = 200;

/// Accepted top-p range (value is top-p x 100).
const TOP_P_MIN: i64 = 0;
const TOP_P_MAX: i64 = 100;

/// Settings errors.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("value must be between {min} and {max}")]
    OutOfRange { min: i64, max: i64 },
}

impl IntoResponse for SettingsError {
    fn into_response(self) -> Response {
        match self {
            SettingsError::Auth(err) => err.into_response(),
            SettingsError::OutOfRange { min, max } => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": format!("Value must be between {min} and {max}")
                })),
            )
                .into_response(),
        }
    }
}

fn check_range(value: i64, min: i64, max: i64) -> Result<i64, SettingsError> {
    if value < min || value > max {
        return Err(SettingsError::OutOfRange { min, max });
    }
    Ok(value)
}

/// Set the model temperature.
#[utoipa::path(
    post,
    path = "/api/settings/temperature",
    tag = "Settings",
    summary = "Set model temperature",
    description = "Set the sampling temperature (0-200, scaled by 100)",
    request_body(content = SetValueRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Temperature accepted", body = SettingValueResponse),
        (status = 400, description = "Value out of range", body = ErrorResponse),
        (status = 401, description = "Invalid session", body = ErrorResponse)
    )
)]
pub async fn set_temperature(
    State(state): State<AppState>,
    Form(request): Form<SetValueRequest>,
) -> Result<Json<SettingValueResponse>, SettingsError> {
    state.auth.require_session(&request.session_token)?;
    let value = check_range(request.value, TEMPERATURE_MIN, TEMPERATURE_MAX)?;

    state.settings.write().await.temperature = value;
    info!("Temperature set to {}", value);

    Ok(Json(SettingValueResponse { value }))
}

/// Set the model top-p.
#[utoipa::path(
    post,
    path = "/api/settings/topp",
    tag = "Settings",
    summary = "Set model top-p",
    description = "Set the nucleus sampling parameter (0-100, scaled by 100)",
    request_body(content = SetValueRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Top-p accepted", body = SettingValueResponse),
        (status = 400, description = "Value out of range", body = ErrorResponse),
        (status = 401, description = "Invalid session", body = ErrorResponse)
    )
)]
pub async fn set_top_p(
    State(state): State<AppState>,
    Form(request): Form<SetValueRequest>,
) -> Result<Json<SettingValueResponse>, SettingsError> {
    state.auth.require_session(&request.session_token)?;
    let value = check_range(request.value, TOP_P_MIN, TOP_P_MAX)?;

    state.settings.write().await.top_p = value;
    info!("Top-p set to {}", value);

    Ok(Json(SettingValueResponse { value }))
}
