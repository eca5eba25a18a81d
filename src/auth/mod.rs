//! Authentication gate: credential check, session issuance, token checks.

pub mod handlers;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use tracing::{debug, warn};

use crate::session::{SessionRecord, SessionService};

/// Authentication errors.
///
/// Both variants surface as an undifferentiated 401: the caller never learns
/// which login field was wrong, nor whether a rejected token was malformed,
/// never issued, or merely expired.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("invalid session")]
    Unauthorized,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            AuthError::InvalidCredentials => "Invalid credentials",
            AuthError::Unauthorized => "Invalid session",
        };

        (StatusCode::UNAUTHORIZED, Json(json!({ "error": message }))).into_response()
    }
}

/// Credential verification capability.
///
/// The service ships exactly one implementation, [`FixedCredentials`], but
/// the seam keeps a future identity directory from reshaping the gate.
pub trait CredentialVerifier: Send + Sync {
    /// Whether `identity`/`secret` name a known principal.
    fn verify(&self, identity: &str, secret: &str) -> bool;
}

/// The single hardcoded credential pair, compared directly.
#[derive(Debug, Clone)]
pub struct FixedCredentials {
    identity: String,
    secret: String,
}

impl FixedCredentials {
    pub fn new(identity: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            secret: secret.into(),
        }
    }
}

impl Default for FixedCredentials {
    fn default() -> Self {
        Self::new("v_shutenko", "8nEThznM")
    }
}

impl CredentialVerifier for FixedCredentials {
    fn verify(&self, identity: &str, secret: &str) -> bool {
        identity == self.identity && secret == self.secret
    }
}

/// The gate every protected operation goes through.
///
/// Wraps a [`CredentialVerifier`] and a [`SessionService`]; handlers never
/// touch the session store directly.
#[derive(Clone)]
pub struct AuthService {
    verifier: Arc<dyn CredentialVerifier>,
    sessions: SessionService,
}

impl AuthService {
    pub fn new(verifier: Arc<dyn CredentialVerifier>, sessions: SessionService) -> Self {
        Self { verifier, sessions }
    }

    /// Checks the credential pair and issues a session on success.
    ///
    /// Any mismatch - wrong identity, wrong secret, or both - produces the
    /// same error.
    pub fn login(&self, identity: &str, secret: &str) -> Result<String, AuthError> {
        if !self.verifier.verify(identity, secret) {
            warn!("Rejected login attempt for identity: {}", identity);
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.sessions.create_session(identity);
        debug!("Issued session token for identity: {}", identity);
        Ok(token)
    }

    /// Drops the session for `token`.
    ///
    /// Always succeeds, including for unknown or already-expired tokens.
    pub fn logout(&self, token: &str) {
        self.sessions.remove_session(token);
    }

    /// Fetches the live session for `token`, enforcing expiry.
    ///
    /// This is the wrapper every protected operation calls before running
    /// its own logic.
    pub fn require_session(&self, token: &str) -> Result<SessionRecord, AuthError> {
        self.sessions
            .fetch_session(token)
            .ok_or(AuthError::Unauthorized)
    }

    /// Access to the underlying session service.
    pub fn sessions(&self) -> &SessionService {
        &self.sessions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStore;

    fn test_gate() -> AuthService {
        let sessions = SessionService::new(SessionStore::new(), SessionService::default_ttl());
        AuthService::new(Arc::new(FixedCredentials::default()), sessions)
    }

    #[test]
    fn test_login_with_fixed_credentials() {
        let gate = test_gate();

        let token = gate.login("v_shutenko", "8nEThznM").unwrap();
        assert!(gate.sessions().validate_session(&token));

        let record = gate.require_session(&token).unwrap();
        assert_eq!(record.identity, "v_shutenko");
    }

    #[test]
    fn test_any_credential_mismatch_is_uniform() {
        let gate = test_gate();

        // Wrong secret, wrong identity, and both wrong are indistinguishable.
        assert_eq!(
            gate.login("v_shutenko", "wrong").unwrap_err(),
            AuthError::InvalidCredentials
        );
        assert_eq!(
            gate.login("intruder", "8nEThznM").unwrap_err(),
            AuthError::InvalidCredentials
        );
        assert_eq!(
            gate.login("intruder", "wrong").unwrap_err(),
            AuthError::InvalidCredentials
        );
    }

    #[test]
    fn test_require_session_rejects_unknown_token() {
        let gate = test_gate();

        assert_eq!(
            gate.require_session("never-issued").unwrap_err(),
            AuthError::Unauthorized
        );
        assert_eq!(gate.require_session("").unwrap_err(), AuthError::Unauthorized);
    }

    #[test]
    fn test_logout_is_idempotent() {
        let gate = test_gate();

        let token = gate.login("v_shutenko", "8nEThznM").unwrap();
        gate.logout(&token);
        assert!(gate.require_session(&token).is_err());

        // Logging out again, or logging out garbage, never fails.
        gate.logout(&token);
        gate.logout("never-issued");
    }
}
