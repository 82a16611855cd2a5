use crate::auth::cookie::session_cookie;
use crate::core::error::AuthError;
use crate::core::state::AppState;
use crate::models::api::{LoginRequest, LoginResponse};
use crate::models::session::Session;
use crate::stores::{SessionStore, UserStore};
use axum::{
    extract::{Json, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Verify credentials and establish a new session.
///
/// POST /login {email, password}
///
/// With `distinct_login_errors` (the default) an unknown email is 404 and
/// a bad password 401, matching the historical surface. Unified mode
/// collapses both to 401 "invalid credentials" and equalizes the cost of
/// the two rejections.
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Response, AuthError> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AuthError::Validation(
            "email and password are required".to_string(),
        ));
    }

    let user = match state.users.find_by_email(&req.email).await? {
        Some(user) => user,
        None => {
            warn!(email = %req.email, "login attempt for unknown email");

            if state.config.auth.distinct_login_errors {
                return Err(AuthError::NotFound);
            }

            // Burn a verification so this rejection costs the same as a
            // wrong password.
            state.hasher.verify_dummy(&req.password);
            return Err(AuthError::unauthorized("invalid credentials"));
        }
    };

    if !state.hasher.verify(&req.password, &user.password_hash)? {
        warn!(user_id = user.id, "login rejected, wrong password");

        let message = if state.config.auth.distinct_login_errors {
            "invalid password"
        } else {
            "invalid credentials"
        };
        return Err(AuthError::unauthorized(message));
    }

    let session = Session::new(
        user.id,
        user.name.clone(),
        user.email.clone(),
        state.config.auth.session_ttl_secs,
    );
    let cookie = session_cookie(
        &state.config.auth.cookie_name,
        &session.id,
        state.config.auth.session_ttl_secs,
    );
    state.sessions.insert(session).await?;

    // In token mode the Authorization header is the only credential the
    // gate reads back, so the signed token rides in the response body.
    let token = if state.token_mode() {
        Some(state.tokens.issue(&user)?)
    } else {
        None
    };

    info!(user_id = user.id, "login successful");

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            message: "login successful".to_string(),
            token,
        }),
    )
        .into_response())
}
