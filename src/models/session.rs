use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Server-side session binding an opaque identifier to an authenticated
/// identity. Lifetime is fixed at creation; expiry is checked at read time.
#[derive(Clone, Debug)]
pub struct Session {
    pub id: String,
    pub user_id: u64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Create a session for the given identity with a fresh random id.
    pub fn new(user_id: u64, name: String, email: String, ttl_secs: i64) -> Self {
        let now = Utc::now();

        Self {
            id: generate_session_id(),
            user_id,
            name,
            email,
            created_at: now,
            expires_at: now + Duration::seconds(ttl_secs),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// 32 random bytes, hex-encoded. 256 bits of entropy makes the identifier
/// unguessable without signing.
fn generate_session_id() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    hex::encode(bytes)
}
