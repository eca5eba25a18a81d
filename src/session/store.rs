//! Concurrent in-memory session storage.
//!
//! Sessions are lost when the process restarts.

use std::sync::Arc;

use dashmap::DashMap;

use super::SessionRecord;

/// Token-keyed session repository.
///
/// A thin wrapper around a sharded concurrent map: any number of callers may
/// `put`/`get`/`remove` simultaneously without external locking. Operations
/// on the same token are linearizable; operations on distinct tokens never
/// interfere. The store holds no business logic - expiry is the
/// [`SessionService`](super::SessionService)'s job.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<DashMap<String, SessionRecord>>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
        }
    }

    /// Inserts or overwrites the record for `token`.
    ///
    /// A duplicate token is last-writer-wins; with 128+ bits of token
    /// entropy a collision is never expected in practice.
    pub fn put(&self, token: String, record: SessionRecord) {
        self.sessions.insert(token, record);
    }

    /// Looks up the record for `token`, if any.
    pub fn get(&self, token: &str) -> Option<SessionRecord> {
        self.sessions.get(token).map(|entry| entry.value().clone())
    }

    /// Removes the record for `token`. Silently ignores absent tokens.
    pub fn remove(&self, token: &str) {
        self.sessions.remove(token);
    }

    /// Returns the number of sessions currently stored.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns true if there are no sessions stored.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
