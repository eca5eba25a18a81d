//! Session issuance, validation, and lazy expiry.

use chrono::{Duration, Utc};
use rand::{distributions::Alphanumeric, Rng};
use tracing::debug;

use super::{SessionRecord, SessionStore};

/// Length of generated session tokens. 32 alphanumeric characters carry
/// just over 190 bits of entropy, comfortably above the 128-bit floor.
const TOKEN_LENGTH: usize = 32;

/// Creates, validates, and removes sessions.
///
/// Owns the session TTL and all time-based logic. Expiry is lazy: an expired
/// record is purged only when an expiry-checking lookup touches it - there
/// is no background sweep. A session that is never revalidated after
/// expiring stays in the store until logout or the next lookup, which bounds
/// memory growth by usage rather than by time.
#[derive(Debug, Clone)]
pub struct SessionService {
    store: SessionStore,
    ttl: Duration,
}

impl SessionService {
    /// Default session lifetime.
    pub fn default_ttl() -> Duration {
        Duration::hours(1)
    }

    /// Creates a service over `store` with the given TTL.
    pub fn new(store: SessionStore, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Issues a fresh session for `identity` and returns its token.
    ///
    /// Always succeeds. The record is never mutated after this point.
    pub fn create_session(&self, identity: &str) -> String {
        let token = generate_token(TOKEN_LENGTH);
        let now = Utc::now();
        let record = SessionRecord {
            identity: identity.to_string(),
            created_at: now,
            expires_at: now + self.ttl,
        };

        self.store.put(token.clone(), record);
        debug!("Created session for identity: {}", identity);

        token
    }

    /// Looks up a live session, purging it first if it has expired.
    ///
    /// This is the single read path for session checks: an expired record is
    /// removed here as a side effect, after which the token is
    /// indistinguishable from one that was never issued.
    pub fn fetch_session(&self, token: &str) -> Option<SessionRecord> {
        if token.is_empty() {
            return None;
        }

        let record = self.store.get(token)?;
        if record.is_expired_at(Utc::now()) {
            self.store.remove(token);
            debug!("Purged expired session for identity: {}", record.identity);
            return None;
        }

        Some(record)
    }

    /// Whether `token` refers to a live session.
    pub fn validate_session(&self, token: &str) -> bool {
        self.fetch_session(token).is_some()
    }

    /// Removes the session for `token`. Idempotent; unknown tokens are fine.
    pub fn remove_session(&self, token: &str) {
        self.store.remove(token);
    }

    /// Number of sessions currently held, expired-but-unchecked included.
    pub fn session_count(&self) -> usize {
        self.store.len()
    }
}

/// Generates a random alphanumeric token of `length` characters.
fn generate_token(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
