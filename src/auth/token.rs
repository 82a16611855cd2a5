use anyhow::{Context, Result};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::models::user::User;

/// Claims carried by every bearer token. Validity is decided purely by
/// signature and expiry, never by a store lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Standard JWT subject, the user id as a string.
    pub sub: String,
    pub user_id: u64,
    pub name: String,
    pub email: String,
    /// Issued-at (Unix timestamp, seconds).
    pub iat: i64,
    /// Expiry (Unix timestamp, seconds).
    pub exp: i64,
}

/// HS256 signing and verification keys derived from the configured secret.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl TokenKeys {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    /// Sign a token for the given user.
    pub fn issue(&self, user: &User) -> Result<String> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: user.id.to_string(),
            user_id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .context("Failed to sign bearer token")
    }

    /// Validate signature and expiry, returning the decoded claims.
    /// Any failure (bad signature, expired, malformed) is one error class.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            42,
            "Ana".to_string(),
            "ana@x.com".to_string(),
            "digest".to_string(),
        )
    }

    #[test]
    fn test_issue_then_verify() {
        let keys = TokenKeys::new("test-secret", 3600);
        let token = keys.issue(&sample_user()).unwrap();

        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.name, "Ana");
        assert_eq!(claims.email, "ana@x.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_token_signed_with_different_key_rejected() {
        let keys = TokenKeys::new("test-secret", 3600);
        let other = TokenKeys::new("other-secret", 3600);

        let token = other.issue(&sample_user()).unwrap();
        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // Issued already past expiry, beyond the default leeway
        let keys = TokenKeys::new("test-secret", -120);
        let token = keys.issue(&sample_user()).unwrap();

        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn test_malformed_token_rejected() {
        let keys = TokenKeys::new("test-secret", 3600);
        assert!(keys.verify("not-a-jwt").is_err());
        assert!(keys.verify("").is_err());
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let keys = TokenKeys::new("test-secret", 3600);
        let token = keys.issue(&sample_user()).unwrap();

        // Swap the payload segment for a forged one
        let parts: Vec<&str> = token.split('.').collect();
        let forged = format!("{}.eyJzdWIiOiIxIn0.{}", parts[0], parts[2]);

        assert!(keys.verify(&forged).is_err());
    }
}
