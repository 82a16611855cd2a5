use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Which authenticator gates protected routes: "session" or "token".
    #[serde(default = "default_auth_mode")]
    pub mode: String,
    pub jwt_secret: String,
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: i64,
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: i64,
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
    /// When true, login reports unknown email (404) and bad password (401)
    /// as distinct outcomes. When false, both collapse to a generic 401.
    #[serde(default = "default_distinct_login_errors")]
    pub distinct_login_errors: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

// Default value functions
fn default_num_threads() -> usize {
    num_cpus::get()
}

fn default_auth_mode() -> String {
    "session".to_string()
}

fn default_session_ttl() -> i64 {
    86_400 // 24 hours
}

fn default_token_ttl() -> i64 {
    86_400 // 24 hours
}

fn default_cookie_name() -> String {
    "session_id".to_string()
}

fn default_bcrypt_cost() -> u32 {
    10
}

fn default_distinct_login_errors() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            bail!("Server port must be greater than 0");
        }

        if self.server.num_threads == 0 {
            bail!("num_threads must be greater than 0");
        }

        let valid_modes = ["session", "token"];
        if !valid_modes.contains(&self.auth.mode.as_str()) {
            bail!(
                "Invalid auth mode '{}'. Must be one of: session, token",
                self.auth.mode
            );
        }

        if self.auth.jwt_secret.is_empty() {
            bail!("jwt_secret must not be empty");
        }

        if self.auth.session_ttl_secs <= 0 {
            bail!("session_ttl_secs must be greater than 0");
        }

        if self.auth.token_ttl_secs <= 0 {
            bail!("token_ttl_secs must be greater than 0");
        }

        if self.auth.cookie_name.is_empty() {
            bail!("cookie_name must not be empty");
        }

        // bcrypt only accepts costs in this window
        if !(4..=31).contains(&self.auth.bcrypt_cost) {
            bail!("bcrypt_cost must be between 4 and 31");
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        Ok(())
    }
}
