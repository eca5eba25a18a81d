//! chatgate
//!
//! A small session-gated demo API for an AI chat service: one fixed
//! identity, short-lived opaque session tokens, and a handful of protected
//! chat and model-settings operations behind them.

pub mod auth;
pub mod chat;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod session;
pub mod state;

// Re-export main types
pub use server::ChatGateServer;
pub use state::AppState;

use axum::{response::Redirect, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create the main application router.
pub fn create_app(state: AppState) -> Router {
    // The API is a local demo surface; CORS is wide open on purpose.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // API routes
        .nest("/api", routes::api_routes())
        // Interactive API documentation, also reachable from the root
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
        .route("/", get(|| async { Redirect::temporary("/swagger-ui") }))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Configuration for the web server.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Server host.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Session lifetime in seconds.
    pub session_ttl_secs: u64,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            session_ttl_secs: 3600,
        }
    }
}

impl WebConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("CHATGATE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("CHATGATE_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),
            session_ttl_secs: std::env::var("CHATGATE_SESSION_TTL_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .unwrap_or(3600),
        }
    }

    /// Get the server address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Error types for the web server.
#[derive(thiserror::Error, Debug)]
pub enum WebError {
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for web operations.
pub type WebResult<T> = Result<T, WebError>;

/// Initialize logging for the web server.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chatgate=debug,tower_http=debug,axum=debug".into()),
        )
        .init();
}
