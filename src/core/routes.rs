// HTTP routes configuration

use crate::auth::require_auth;
use crate::core::state::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    // Destructive admin surface sits behind the configured auth gate
    let protected = Router::new()
        .route("/clear", post(crate::handlers::users::clear_users_handler))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            require_auth,
        ));

    Router::new()
        .route("/register", post(crate::handlers::register::register_handler))
        .route("/login", post(crate::handlers::login::login_handler))
        .route("/session", get(crate::handlers::session::session_handler))
        .route("/logout", post(crate::handlers::session::logout_handler))
        .route("/users", get(crate::handlers::users::list_users_handler))
        .route("/health", get(crate::handlers::health::health_handler))
        .merge(protected)

        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}
