use crate::auth::cookie::{clear_cookie, extract_cookie};
use crate::core::error::AuthError;
use crate::core::state::AppState;
use crate::models::api::{MessageResponse, SessionResponse};
use crate::stores::SessionStore;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::debug;

/// Return the identity bound to the caller's session cookie.
///
/// GET /session
pub async fn session_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<SessionResponse>, AuthError> {
    let session_id = extract_cookie(&headers, &state.config.auth.cookie_name)
        .ok_or_else(|| AuthError::unauthorized("no active session"))?;

    let session = state
        .sessions
        .get(&session_id)
        .await?
        .ok_or_else(|| AuthError::unauthorized("invalid or expired session"))?;

    Ok(Json(SessionResponse {
        id: session.user_id,
        name: session.name,
        email: session.email,
    }))
}

/// Invalidate the caller's session server-side and clear the cookie.
/// Logging out without a session is a no-op, not an error.
///
/// POST /logout
pub async fn logout_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, AuthError> {
    if let Some(session_id) = extract_cookie(&headers, &state.config.auth.cookie_name) {
        state.sessions.remove(&session_id).await?;
        debug!("session invalidated");
    }

    Ok((
        StatusCode::OK,
        [(
            header::SET_COOKIE,
            clear_cookie(&state.config.auth.cookie_name),
        )],
        Json(MessageResponse {
            message: "logged out".to_string(),
        }),
    )
        .into_response())
}
