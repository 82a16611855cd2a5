use crate::auth::cookie::session_cookie;
use crate::core::error::AuthError;
use crate::core::state::AppState;
use crate::models::api::{MessageResponse, RegisterRequest};
use crate::models::session::Session;
use crate::stores::{SessionStore, StoreError, UserStore};
use axum::{
    extract::{Json, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Register a new user account and establish a session for the caller.
///
/// POST /register {name, email, password}
pub async fn register_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<Response, AuthError> {
    if req.name.trim().is_empty() || req.email.trim().is_empty() || req.password.is_empty() {
        warn!("registration rejected, missing required fields");
        return Err(AuthError::Validation(
            "name, email and password are required".to_string(),
        ));
    }

    let password_hash = state.hasher.hash(&req.password)?;

    // Uniqueness check and insert are one atomic store operation: a
    // duplicate leaves no partial write behind.
    let user = state
        .users
        .create(&req.name, &req.email, &password_hash)
        .await
        .map_err(|e| {
            if matches!(e, StoreError::Duplicate) {
                warn!(email = %req.email, "registration rejected, user exists");
            }
            AuthError::from(e)
        })?;

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

    info!(user_id = user.id, name = %user.name, "user registered");

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse {
            message: "user registered".to_string(),
        }),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::create_test_state;

    fn request(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let state = create_test_state();

        let response = register_handler(
            State(state.clone()),
            Json(request("Ana", "ana@x.com", "pw123")),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(cookie.starts_with("session_id="));
        assert!(cookie.contains("HttpOnly"));

        let user = state.users.find_by_email("ana@x.com").await.unwrap().unwrap();
        assert_eq!(user.name, "Ana");
        // Stored digest, not the plaintext
        assert_ne!(user.password_hash, "pw123");
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let state = create_test_state();

        let result = register_handler(
            State(state.clone()),
            Json(request("Ana", "", "pw123")),
        )
        .await;

        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // No partial writes
        assert!(state.users.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflict() {
        let state = create_test_state();

        register_handler(
            State(state.clone()),
            Json(request("Ana", "ana@x.com", "pw123")),
        )
        .await
        .unwrap();

        let result = register_handler(
            State(state.clone()),
            Json(request("Other", "ana@x.com", "pw456")),
        )
        .await;

        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Exactly one record for that email
        assert_eq!(state.users.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_register_duplicate_name_conflict() {
        let state = create_test_state();

        register_handler(
            State(state.clone()),
            Json(request("Ana", "ana@x.com", "pw123")),
        )
        .await
        .unwrap();

        let result = register_handler(
            State(state.clone()),
            Json(request("Ana", "ana2@x.com", "pw456")),
        )
        .await;

        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_register_establishes_usable_session() {
        let state = create_test_state();

        let response = register_handler(
            State(state.clone()),
            Json(request("Ana", "ana@x.com", "pw123")),
        )
        .await
        .unwrap();

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        let session_id = cookie
            .strip_prefix("session_id=")
            .unwrap()
            .split(';')
            .next()
            .unwrap();

        let session = state.sessions.get(session_id).await.unwrap().unwrap();
        assert_eq!(session.name, "Ana");
    }
}
