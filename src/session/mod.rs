//! Session lifecycle: opaque tokens, in-memory records, TTL-based expiry.

mod service;
mod store;

pub use service::SessionService;
pub use store::SessionStore;

use chrono::{DateTime, Utc};

/// A session bound to one token.
///
/// Records are created once on login and never mutated afterwards. They are
/// removed either explicitly (logout) or lazily, the first time an
/// expiry-checking lookup touches them past their deadline.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    /// The identity this session was issued for.
    pub identity: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Expiry deadline, always `created_at + TTL`.
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Whether this session is expired at `now`.
    ///
    /// The boundary is exact: a session is already expired at the instant
    /// `created_at + TTL`, not one tick later.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_record_not_expired_before_deadline() {
        let now = Utc::now();
        let record = SessionRecord {
            identity: "someone".to_string(),
            created_at: now,
            expires_at: now + Duration::hours(1),
        };
        assert!(!record.is_expired_at(now));
        assert!(!record.is_expired_at(now + Duration::minutes(59)));
    }

    #[test]
    fn test_record_expired_at_exact_deadline() {
        let now = Utc::now();
        let record = SessionRecord {
            identity: "someone".to_string(),
            created_at: now - Duration::hours(1),
            expires_at: now,
        };
        assert!(record.is_expired_at(now));
        assert!(record.is_expired_at(now + Duration::seconds(1)));
    }
}
