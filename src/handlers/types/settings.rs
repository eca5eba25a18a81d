//! Model settings request/response types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body for setting an integer model parameter.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetValueRequest {
    #[schema(example = 120)]
    pub value: i64,
    #[serde(rename = "sessionToken")]
    pub session_token: String,
}

/// Echo of the accepted parameter value.
#[derive(Debug, Serialize, ToSchema)]
pub struct SettingValueResponse {
    #[schema(example = 120)]
    pub value: i64,
}
