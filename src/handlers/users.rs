use crate::auth::Identity;
use crate::core::error::AuthError;
use crate::core::state::AppState;
use crate::models::api::MessageResponse;
use crate::models::user::PublicUser;
use crate::stores::UserStore;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Extension,
};
use std::sync::Arc;
use tracing::info;

/// List all registered users, password material excluded.
///
/// GET /users
pub async fn list_users_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PublicUser>>, AuthError> {
    let users = state.users.list().await?;

    Ok(Json(
        users.iter().map(|user| PublicUser::from(user.as_ref())).collect(),
    ))
}

/// Delete every user record. Reached only through the auth gate; sessions
/// are not cascaded.
///
/// POST /clear
pub async fn clear_users_handler(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
) -> Result<Response, AuthError> {
    let removed = state.users.clear().await?;

    info!(user_id = identity.id, removed, "user table cleared");

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "all users deleted".to_string(),
        }),
    )
        .into_response())
}
