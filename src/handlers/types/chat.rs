//! Chat request/response types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body for sending a chat message.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    #[schema(example = "What is the capital of France?")]
    pub message: String,
    #[serde(rename = "sessionToken")]
    pub session_token: String,
}

/// Canned assistant answer.
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatAnswerResponse {
    #[schema(example = "The capital of France is Paris")]
    pub answer: String,
}

/// Body for copying an answer's text.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CopyTextRequest {
    pub text: String,
    #[serde(rename = "sessionToken")]
    pub session_token: String,
}

/// Body for editing a previously sent message.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMessageRequest {
    #[serde(rename = "messageId")]
    pub message_id: String,
    #[serde(rename = "newMessage")]
    pub new_message: String,
    #[serde(rename = "sessionToken")]
    pub session_token: String,
}

/// Acknowledgement of a message edit.
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateMessageResponse {
    #[schema(example = "Message updated")]
    pub message: String,
    #[serde(rename = "messageId")]
    pub message_id: String,
    #[serde(rename = "newMessage")]
    pub new_message: String,
}

/// Body for deleting a message.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteMessageRequest {
    #[serde(rename = "messageId")]
    pub message_id: String,
    #[serde(rename = "sessionToken")]
    pub session_token: String,
}

/// Acknowledgement of a message deletion.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteMessageResponse {
    #[schema(example = "Message deleted")]
    pub message: String,
    #[serde(rename = "messageId")]
    pub message_id: String,
}

/// One entry of the demo chat history.
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatMessage {
    #[schema(example = 1)]
    pub id: i64,
    pub text: String,
    #[serde(rename = "type")]
    #[schema(example = "user")]
    pub kind: String,
    #[schema(example = "2024-01-15T10:30:00")]
    pub timestamp: String,
}

/// Chat history response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatHistoryResponse {
    pub messages: Vec<ChatMessage>,
}
