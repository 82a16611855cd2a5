use crate::models::session::Session;
use crate::stores::StoreError;
use async_trait::async_trait;
use dashmap::DashMap;

/// Server-side session holder. Expiry is passive: an expired entry is
/// dropped by the read that observes it, there is no background sweep.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, session: Session) -> Result<(), StoreError>;

    /// Resolve a session id to its live session, if any. Expired entries
    /// are removed and reported as absent.
    async fn get(&self, session_id: &str) -> Result<Option<Session>, StoreError>;

    /// Invalidate a session id. Removing an unknown id is a no-op.
    async fn remove(&self, session_id: &str) -> Result<(), StoreError>;
}

/// In-memory session store.
pub struct MemorySessionStore {
    sessions: DashMap<String, Session>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn insert(&self, session: Session) -> Result<(), StoreError> {
        self.sessions.insert(session.id.clone(), session);
        Ok(())
    }

    async fn get(&self, session_id: &str) -> Result<Option<Session>, StoreError> {
        let expired = match self.sessions.get(session_id) {
            Some(entry) if entry.value().is_expired() => true,
            Some(entry) => return Ok(Some(entry.value().clone())),
            None => return Ok(None),
        };

        if expired {
            self.sessions.remove(session_id);
        }

        Ok(None)
    }

    async fn remove(&self, session_id: &str) -> Result<(), StoreError> {
        self.sessions.remove(session_id);
        Ok(())
    }
}
