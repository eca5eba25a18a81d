//! Chat handlers.
//!
//! Every operation here is token-protected: the session gate runs before
//! any chat logic, and a rejected token short-circuits with 401. Form
//! decoding happens in the extractor, so a body missing a required field
//! fails with 422 before the token is ever looked at.

use axum::{
    extract::{Form, Query, State},
    response::Json,
};
use tracing::info;

use super::types::{
    ChatAnswerResponse, ChatHistoryResponse, ChatMessage, CopyTextRequest, DeleteMessageRequest,
    DeleteMessageResponse, ErrorResponse, MessageResponse, SendMessageRequest, SessionTokenForm,
    SessionTokenQuery, UpdateMessageRequest, UpdateMessageResponse,
};
use crate::auth::AuthError;
use crate::{chat, AppState};

/// Send a message to the chat.
#[utoipa::path(
    post,
    path = "/api/chat/send",
    tag = "Chat",
    summary = "Send a chat message",
    description = "Send a message and receive the assistant's answer",
    request_body(content = SendMessageRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Assistant answer", body = ChatAnswerResponse),
        (status = 401, description = "Invalid session", body = ErrorResponse)
    )
)]
pub async fn send_message(
    State(state): State<AppState>,
    Form(request): Form<SendMessageRequest>,
) -> Result<Json<ChatAnswerResponse>, AuthError> {
    let session = state.auth.require_session(&request.session_token)?;

    info!("Chat message from {}", session.identity);
    Ok(Json(ChatAnswerResponse {
        answer: chat::canned_answer(&request.message),
    }))
}

/// Clear the chat history.
#[utoipa::path(
    post,
    path = "/api/chat/clear",
    tag = "Chat",
    summary = "Clear chat history",
    request_body(content = SessionTokenForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "History cleared", body = MessageResponse),
        (status = 401, description = "Invalid session", body = ErrorResponse)
    )
)]
pub async fn clear_chat(
    State(state): State<AppState>,
    Form(request): Form<SessionTokenForm>,
) -> Result<Json<MessageResponse>, AuthError> {
    state.auth.require_session(&request.session_token)?;

    Ok(Json(MessageResponse {
        message: "Chat cleared".to_string(),
    }))
}

/// Copy an answer's text.
#[utoipa::path(
    post,
    path = "/api/chat/copy",
    tag = "Chat",
    summary = "Copy answer text",
    request_body(content = CopyTextRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Text copied", body = MessageResponse),
        (status = 401, description = "Invalid session", body = ErrorResponse)
    )
)]
pub async fn copy_text(
    State(state): State<AppState>,
    Form(request): Form<CopyTextRequest>,
) -> Result<Json<MessageResponse>, AuthError> {
    state.auth.require_session(&request.session_token)?;

    Ok(Json(MessageResponse {
        message: "Text copied".to_string(),
    }))
}

/// Edit a previously sent message.
#[utoipa::path(
    put,
    path = "/api/chat/update",
    tag = "Chat",
    summary = "Update a chat message",
    request_body(content = UpdateMessageRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Message updated", body = UpdateMessageResponse),
        (status = 401, description = "Invalid session", body = ErrorResponse)
    )
)]
pub async fn update_message(
    State(state): State<AppState>,
    Form(request): Form<UpdateMessageRequest>,
) -> Result<Json<UpdateMessageResponse>, AuthError> {
    state.auth.require_session(&request.session_token)?;

    Ok(Json(UpdateMessageResponse {
        message: "Message updated".to_string(),
        message_id: request.message_id,
        new_message: request.new_message,
    }))
}

/// Delete a chat message.
#[utoipa::path(
    delete,
    path = "/api/chat/message",
    tag = "Chat",
    summary = "Delete a chat message",
    request_body(content = DeleteMessageRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Message deleted", body = DeleteMessageResponse),
        (status = 401, description = "Invalid session", body = ErrorResponse)
    )
)]
pub async fn delete_message(
    State(state): State<AppState>,
    Form(request): Form<DeleteMessageRequest>,
) -> Result<Json<DeleteMessageResponse>, AuthError> {
    state.auth.require_session(&request.session_token)?;

    Ok(Json(DeleteMessageResponse {
        message: "Message deleted".to_string(),
        message_id: request.message_id,
    }))
}

/// Fetch the demo chat history.
#[utoipa::path(
    get,
    path = "/api/chat/history",
    tag = "Chat",
    summary = "Get chat history",
    params(SessionTokenQuery),
    responses(
        (status = 200, description = "Chat history", body = ChatHistoryResponse),
        (status = 401, description = "Invalid session", body = ErrorResponse)
    )
)]
pub async fn chat_history(
    State(state): State<AppState>,
    Query(query): Query<SessionTokenQuery>,
) -> Result<Json<ChatHistoryResponse>, AuthError> {
    state.auth.require_session(&query.session_token)?;

    Ok(Json(ChatHistoryResponse {
        messages: vec![
            ChatMessage {
                id: 1,
                text: "Hello, how are you?".to_string(),
                kind: "user".to_string(),
                timestamp: "2024-01-15T10:30:00".to_string(),
            },
            ChatMessage {
                id: 2,
                text: "I'm doing well, thank you!".to_string(),
                kind: "assistant".to_string(),
                timestamp: "2024-01-15T10:30:05".to_string(),
            },
        ],
    }))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::{create_app, AppState, WebConfig};

    const FORM: &str = "application/x-www-form-urlencoded";

    fn test_state() -> AppState {
        AppState::new(WebConfig::default())
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_send_requires_session() {
        let app = create_app(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/chat/send")
                    .header(CONTENT_TYPE, FORM)
                    .body(Body::from("message=hello&sessionToken=bogus"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_malformed_body_fails_before_session_check() {
        let app = create_app(test_state());

        // No `message` field: form decoding rejects the request with 422
        // before the (invalid) token would have produced a 401.
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/chat/send")
                    .header(CONTENT_TYPE, FORM)
                    .body(Body::from("sessionToken=bogus"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_send_with_valid_session() {
        let state = test_state();
        let token = state.auth.login("v_shutenko", "8nEThznM").unwrap();
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/chat/send")
                    .header(CONTENT_TYPE, FORM)
                    .body(Body::from(format!(
                        "message=hello&sessionToken={token}"
                    )))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["answer"], "Hello! How can I assist you today?");
    }

    #[tokio::test]
    async fn test_history_via_query_token() {
        let state = test_state();
        let token = state.auth.login("v_shutenko", "8nEThznM").unwrap();
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/chat/history?sessionToken={token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["messages"].as_array().unwrap().len(), 2);
        assert_eq!(body["messages"][0]["type"], "user");
    }

    #[tokio::test]
    async fn test_update_echoes_message_fields() {
        let state = test_state();
        let token = state.auth.login("v_shutenko", "8nEThznM").unwrap();
        let app = create_app(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/chat/update")
                    .header(CONTENT_TYPE, FORM)
                    .body(Body::from(format!(
                        "messageId=42&newMessage=edited&sessionToken={token}"
                    )))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Message updated");
        assert_eq!(body["messageId"], "42");
        assert_eq!(body["newMessage"], "edited");
    }

    #[tokio::test]
    async fn test_delete_requires_session() {
        let app = create_app(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/chat/message")
                    .header(CONTENT_TYPE, FORM)
                    .body(Body::from("messageId=42&sessionToken=bogus"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
