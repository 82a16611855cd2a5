pub mod fallback;
pub mod health;
pub mod login;
pub mod register;
pub mod session;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::config::{AuthConfig, Config, LoggingConfig, ServerConfig};
    use crate::core::state::AppState;
    use std::sync::Arc;

    pub fn create_test_config() -> Config {
        Config {
            server: ServerConfig {
                port: 5000,
                num_threads: 2,
            },
            auth: AuthConfig {
                mode: "session".to_string(),
                jwt_secret: "test-secret".to_string(),
                session_ttl_secs: 86_400,
                token_ttl_secs: 86_400,
                cookie_name: "session_id".to_string(),
                // Minimum bcrypt cost keeps tests fast
                bcrypt_cost: 4,
                distinct_login_errors: true,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "json".to_string(),
                console: true,
            },
        }
    }

    pub fn create_test_state() -> Arc<AppState> {
        Arc::new(AppState::new(create_test_config()).unwrap())
    }

    pub fn create_test_state_with(f: impl FnOnce(&mut Config)) -> Arc<AppState> {
        let mut config = create_test_config();
        f(&mut config);
        Arc::new(AppState::new(config).unwrap())
    }
}
