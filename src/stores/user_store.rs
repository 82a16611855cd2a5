use crate::models::user::User;
use crate::stores::StoreError;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Credential store seam. Registration must be at-most-one-effect: a
/// failed uniqueness check creates nothing.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user if neither the name nor the email is taken.
    /// Returns `StoreError::Duplicate` otherwise, leaving the store
    /// unchanged.
    async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<Arc<User>, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Arc<User>>, StoreError>;

    /// All users, ordered by id.
    async fn list(&self) -> Result<Vec<Arc<User>>, StoreError>;

    /// Delete every user record. Returns the number removed.
    async fn clear(&self) -> Result<usize, StoreError>;
}

/// In-memory credential store keyed by email, with a secondary name index.
pub struct MemoryUserStore {
    users: DashMap<String, Arc<User>>,
    names: DashMap<String, u64>,
    next_id: AtomicU64,
    // Serializes create/clear so the (name OR email) uniqueness check and
    // the two map inserts are atomic with respect to each other.
    write_lock: Mutex<()>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            names: DashMap::new(),
            next_id: AtomicU64::new(1),
            write_lock: Mutex::new(()),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<Arc<User>, StoreError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        if self.users.contains_key(email) || self.names.contains_key(name) {
            return Err(StoreError::Duplicate);
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let user = Arc::new(User::new(
            id,
            name.to_string(),
            email.to_string(),
            password_hash.to_string(),
        ));

        self.users.insert(email.to_string(), Arc::clone(&user));
        self.names.insert(name.to_string(), id);

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Arc<User>>, StoreError> {
        Ok(self.users.get(email).map(|entry| Arc::clone(entry.value())))
    }

    async fn list(&self) -> Result<Vec<Arc<User>>, StoreError> {
        let mut users: Vec<Arc<User>> = self
            .users
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        users.sort_by_key(|user| user.id);
        Ok(users)
    }

    async fn clear(&self) -> Result<usize, StoreError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let removed = self.users.len();
        self.users.clear();
        self.names.clear();

        Ok(removed)
    }
}
