// The auth gate: one authentication capability with pluggable transport.
//
// Which implementation gates protected routes is a deployment decision
// ([auth] mode in config), not per-route code. The cookie session is the
// canonical transport; the bearer-token gate is kept for compatibility
// with deployments that still send Authorization headers.

use async_trait::async_trait;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::debug;

use crate::auth::cookie::extract_cookie;
use crate::auth::token::TokenKeys;
use crate::core::error::AuthError;
use crate::core::state::AppState;
use crate::models::session::Session;
use crate::stores::SessionStore;

/// The authenticated caller, attached to request extensions by the gate.
#[derive(Clone, Debug)]
pub struct Identity {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl From<&Session> for Identity {
    fn from(session: &Session) -> Self {
        Self {
            id: session.user_id,
            name: session.name.clone(),
            email: session.email.clone(),
        }
    }
}

impl From<crate::auth::token::Claims> for Identity {
    fn from(claims: crate::auth::token::Claims) -> Self {
        Self {
            id: claims.user_id,
            name: claims.name,
            email: claims.email,
        }
    }
}

/// Decides whether a request carries a valid authenticated identity.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, headers: &HeaderMap) -> Result<Identity, AuthError>;
}

/// Cookie-backed gate: resolves the session id against the session store.
pub struct SessionAuthenticator {
    sessions: Arc<dyn SessionStore>,
    cookie_name: String,
}

impl SessionAuthenticator {
    pub fn new(sessions: Arc<dyn SessionStore>, cookie_name: String) -> Self {
        Self {
            sessions,
            cookie_name,
        }
    }
}

#[async_trait]
impl Authenticator for SessionAuthenticator {
    async fn authenticate(&self, headers: &HeaderMap) -> Result<Identity, AuthError> {
        let session_id = extract_cookie(headers, &self.cookie_name)
            .ok_or_else(|| AuthError::unauthorized("no active session"))?;

        let session = self
            .sessions
            .get(&session_id)
            .await?
            .ok_or_else(|| AuthError::unauthorized("invalid or expired session"))?;

        Ok(Identity::from(&session))
    }
}

/// Stateless gate: validates an `Authorization: Bearer <token>` header
/// without consulting any store.
pub struct TokenAuthenticator {
    keys: Arc<TokenKeys>,
}

impl TokenAuthenticator {
    pub fn new(keys: Arc<TokenKeys>) -> Self {
        Self { keys }
    }
}

#[async_trait]
impl Authenticator for TokenAuthenticator {
    async fn authenticate(&self, headers: &HeaderMap) -> Result<Identity, AuthError> {
        let token = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AuthError::unauthorized("token not provided"))?;

        let claims = self.keys.verify(token).map_err(|e| {
            debug!(error = %e, "bearer token rejected");
            AuthError::unauthorized("invalid token")
        })?;

        Ok(Identity::from(claims))
    }
}

/// Middleware guarding protected routes: resolve an identity via the
/// configured authenticator or reject, and expose it to the handler
/// through request extensions.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = state.authenticator.authenticate(request.headers()).await?;

    debug!(user_id = identity.id, "request authenticated");
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}
