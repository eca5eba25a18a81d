//! Application state.

use std::sync::Arc;

use chrono::Duration;
use tokio::sync::RwLock;
use tracing::info;

use crate::auth::{AuthService, FixedCredentials};
use crate::session::{SessionService, SessionStore};
use crate::WebConfig;

/// Upper bound on the configured session TTL (~100 years). Values past this
/// would overflow timestamp arithmetic long before they made sense.
const MAX_SESSION_TTL_SECS: u64 = 100 * 365 * 24 * 60 * 60;

/// Last-accepted model parameters.
///
/// Both values are integer-scaled by 100, matching the API's wire format.
#[derive(Debug, Clone)]
pub struct ModelSettings {
    pub temperature: i64,
    pub top_p: i64,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            temperature: 100,
            top_p: 100,
        }
    }
}

/// Shared application state.
///
/// Cheap to clone; all mutable pieces live behind `Arc`s. The session store
/// is owned by the session service inside `auth` and is not reachable from
/// handlers directly.
#[derive(Clone)]
pub struct AppState {
    /// Configuration.
    pub config: WebConfig,
    /// Authentication gate for every protected operation.
    pub auth: AuthService,
    /// Model parameter state.
    pub settings: Arc<RwLock<ModelSettings>>,
}

impl AppState {
    /// Creates the application state from configuration.
    pub fn new(config: WebConfig) -> Self {
        // Clamp before the i64 cast: an unclamped u64 would wrap, and
        // `Duration::seconds` panics outside its representable range.
        let ttl_secs = config.session_ttl_secs.min(MAX_SESSION_TTL_SECS);
        let ttl = Duration::seconds(ttl_secs as i64);
        let sessions = SessionService::new(SessionStore::new(), ttl);
        let auth = AuthService::new(Arc::new(FixedCredentials::default()), sessions);

        info!(
            "Application state initialized (session TTL: {}s)",
            config.session_ttl_secs
        );

        Self {
            config,
            auth,
            settings: Arc::new(RwLock::new(ModelSettings::default())),
        }
    }
}
