//! chatgate web server.
//!
//! Main web server implementation using Axum.

use axum::serve;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::{create_app, AppState, WebConfig, WebError, WebResult};

/// Main chatgate web server.
///
/// Note there is deliberately no background session sweep: expired sessions
/// are purged lazily by the next expiry-checking lookup.
pub struct ChatGateServer {
    config: WebConfig,
    state: AppState,
}

impl ChatGateServer {
    /// Create a new server.
    pub fn new(config: WebConfig) -> Self {
        let state = AppState::new(config.clone());
        Self { config, state }
    }

    /// Start the web server.
    pub async fn start(self) -> WebResult<()> {
        let address = self.config.address();

        info!("🚀 Starting chatgate server");
        info!("📍 Server address: http://{}", address);
        info!("📚 Swagger UI: http://{}/swagger-ui", address);

        let app = create_app(self.state.clone());

        let listener = TcpListener::bind(&address)
            .await
            .map_err(WebError::Server)?;

        info!("✅ Server listening on http://{}", address);

        if let Err(e) = serve(listener, app).await {
            error!("❌ Server error: {}", e);
            return Err(WebError::Server(e));
        }

        Ok(())
    }

    /// Get server configuration.
    pub fn config(&self) -> &WebConfig {
        &self.config
    }

    /// Get application state.
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Builder for [`ChatGateServer`].
pub struct ChatGateServerBuilder {
    config: WebConfig,
}

impl ChatGateServerBuilder {
    /// Create a new server builder.
    pub fn new() -> Self {
        Self {
            config: WebConfig::default(),
        }
    }

    /// Set the server host.
    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the server port.
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the session lifetime in seconds.
    pub fn session_ttl_secs(mut self, secs: u64) -> Self {
        self.config.session_ttl_secs = secs;
        self
    }

    /// Build the server.
    pub fn build(self) -> ChatGateServer {
        ChatGateServer::new(self.config)
    }
}

impl Default for ChatGateServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_builder() {
        let builder = ChatGateServerBuilder::new()
            .host("localhost")
            .port(3000)
            .session_ttl_secs(60);

        assert_eq!(builder.config.host, "localhost");
        assert_eq!(builder.config.port, 3000);
        assert_eq!(builder.config.session_ttl_secs, 60);
    }

    #[test]
    fn test_server_creation() {
        let server = ChatGateServerBuilder::new().build();
        assert_eq!(server.config().port, 8000);
    }
}
