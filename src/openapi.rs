//! OpenAPI specification for the chatgate API.

use utoipa::OpenApi;

use crate::handlers::types::{
    ChatAnswerResponse, ChatHistoryResponse, ChatMessage, CheckSessionResponse, CopyTextRequest,
    DeleteMessageRequest, DeleteMessageResponse, ErrorResponse, HealthResponse, LoginRequest,
    LoginResponse, MessageResponse, ProfileResponse, SendMessageRequest, ServerInfoResponse,
    SessionTokenForm, SettingValueResponse, SetValueRequest, UpdateMessageRequest,
    UpdateMessageResponse,
};

/// Main OpenAPI specification for the chatgate server.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "AI ecosystem test API",
        version = "1.0.1",
        description = "Authentication, chat, model settings, profile, and system endpoints, \
                       all gated behind a short-lived session token."
    ),
    servers(
        (url = "http://localhost:8000", description = "Local server")
    ),
    paths(
        // Auth
        crate::auth::handlers::login,
        crate::auth::handlers::logout,
        crate::auth::handlers::check_session,

        // Chat
        crate::handlers::send_message,
        crate::handlers::clear_chat,
        crate::handlers::copy_text,
        crate::handlers::update_message,
        crate::handlers::delete_message,
        crate::handlers::chat_history,

        // Settings
        crate::handlers::set_temperature,
        crate::handlers::set_top_p,

        // Profile and system
        crate::handlers::get_profile,
        crate::handlers::health_check,
        crate::handlers::server_info,
        crate::handlers::root_message,
    ),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            SessionTokenForm,
            CheckSessionResponse,
            SendMessageRequest,
            ChatAnswerResponse,
            CopyTextRequest,
            UpdateMessageRequest,
            UpdateMessageResponse,
            DeleteMessageRequest,
            DeleteMessageResponse,
            ChatMessage,
            ChatHistoryResponse,
            SetValueRequest,
            SettingValueResponse,
            ProfileResponse,
            HealthResponse,
            ServerInfoResponse,
            MessageResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Login, logout, and session checks"),
        (name = "Chat", description = "AI chat operations"),
        (name = "Settings", description = "Model parameter settings"),
        (name = "Profile", description = "User profile"),
        (name = "System", description = "Health and server information"),
    )
)]
pub struct ApiDoc;
