// Application state (AppState)

use crate::auth::{
    Authenticator, PasswordHasher, SessionAuthenticator, TokenAuthenticator, TokenKeys,
};
use crate::core::config::Config;
use crate::stores::{MemorySessionStore, MemoryUserStore, SessionStore, UserStore};
use anyhow::Result;
use std::sync::Arc;

/// Shared application state.
///
/// Stores and the auth gate sit behind trait objects so the transport and
/// persistence choices stay deployment decisions.
#[derive(Clone)]
pub struct AppState {
    /// Credential store
    pub users: Arc<dyn UserStore>,

    /// Server-side session store
    pub sessions: Arc<dyn SessionStore>,

    /// Gate for protected routes, selected by config
    pub authenticator: Arc<dyn Authenticator>,

    /// Password hashing
    pub hasher: Arc<PasswordHasher>,

    /// Bearer token signing/verification keys
    pub tokens: Arc<TokenKeys>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let config = Arc::new(config);

        let users: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
        let sessions: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());

        let hasher = Arc::new(PasswordHasher::new(config.auth.bcrypt_cost)?);
        let tokens = Arc::new(TokenKeys::new(
            &config.auth.jwt_secret,
            config.auth.token_ttl_secs,
        ));

        let authenticator: Arc<dyn Authenticator> = match config.auth.mode.as_str() {
            "token" => Arc::new(TokenAuthenticator::new(Arc::clone(&tokens))),
            _ => Arc::new(SessionAuthenticator::new(
                Arc::clone(&sessions),
                config.auth.cookie_name.clone(),
            )),
        };

        Ok(Self {
            users,
            sessions,
            authenticator,
            hasher,
            tokens,
            config,
        })
    }

    pub fn token_mode(&self) -> bool {
        self.config.auth.mode == "token"
    }
}
