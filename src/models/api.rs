use serde::{Deserialize, Serialize};

// Request fields default to empty strings so a missing field lands in the
// handler's validation branch (400 with an `error` body) instead of a
// serde rejection.

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: String,
    /// Present only when the deployment runs the bearer-token gate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct SessionResponse {
    pub id: u64,
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_missing_fields_default_to_empty() {
        let req: RegisterRequest = serde_json::from_str(r#"{"name": "Ana"}"#).unwrap();
        assert_eq!(req.name, "Ana");
        assert!(req.email.is_empty());
        assert!(req.password.is_empty());
    }

    #[test]
    fn test_login_response_omits_absent_token() {
        let response = LoginResponse {
            message: "login successful".to_string(),
            token: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("token"));
    }

    #[test]
    fn test_login_response_includes_token_when_present() {
        let response = LoginResponse {
            message: "login successful".to_string(),
            token: Some("abc.def.ghi".to_string()),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("abc.def.ghi"));
    }
}
