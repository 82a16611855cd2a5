// Centralized error handling for the auth backend

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::error;

use crate::models::api::ErrorResponse;
use crate::stores::StoreError;

/// Errors surfaced by the authentication endpoints.
///
/// Every variant maps to exactly one status code, and every response body
/// is a JSON object with a single `error` field. Internal causes are
/// logged, never serialized.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{0}")]
    Validation(String),

    #[error("user with this name or email already exists")]
    Conflict,

    #[error("user not found")]
    NotFound,

    #[error("{0}")]
    Unauthorized(String),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        AuthError::Unauthorized(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::Conflict => StatusCode::BAD_REQUEST,
            AuthError::NotFound => StatusCode::NOT_FOUND,
            AuthError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate => AuthError::Conflict,
            StoreError::Unavailable(_) => AuthError::Internal(err.into()),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        if let AuthError::Internal(ref cause) = self {
            error!(error = %cause, "request failed with internal error");
        }

        let status = self.status();

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AuthError::Validation("name, email and password are required".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AuthError::Conflict.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AuthError::unauthorized("invalid token").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::Internal(anyhow!("store exploded")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_message_does_not_leak_cause() {
        let err = AuthError::Internal(anyhow!("connection refused (10.0.0.3:5432)"));
        assert_eq!(err.to_string(), "internal server error");
    }

    #[test]
    fn test_store_duplicate_maps_to_conflict() {
        let err: AuthError = StoreError::Duplicate.into();
        assert!(matches!(err, AuthError::Conflict));
    }

    #[test]
    fn test_store_unavailable_maps_to_internal() {
        let err: AuthError = StoreError::Unavailable("table missing".into()).into();
        assert!(matches!(err, AuthError::Internal(_)));
    }

    #[tokio::test]
    async fn test_error_body_is_single_error_field() {
        use axum::body::Body;
        use http_body_util::BodyExt;

        let response = AuthError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let (_, body) = response.into_parts();
        let bytes = Body::new(body).collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value, serde_json::json!({"error": "user not found"}));
    }
}
