pub mod session_store;
pub mod user_store;

use thiserror::Error;

/// Failures at the persistence seam. The in-memory stores never return
/// `Unavailable`, but callers are written against the trait, not the
/// implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("duplicate user")]
    Duplicate,

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub use session_store::{MemorySessionStore, SessionStore};
pub use user_store::{MemoryUserStore, UserStore};
