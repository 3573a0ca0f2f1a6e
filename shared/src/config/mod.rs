//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Session token and session cookie configuration
//! - `database` - Storage backend and database pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `mail` - Outbound mail relay configuration
//! - `otp` - One-time code lifetime configuration
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod mail;
pub mod otp;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig, SessionCookieConfig};
pub use database::{DatabaseConfig, StorageBackend};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use mail::{MailConfig, MailProvider};
pub use otp::OtpConfig;
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// One-time code configuration
    #[serde(default)]
    pub otp: OtpConfig,

    /// Mail relay configuration
    #[serde(default)]
    pub mail: MailConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            otp: OtpConfig::default(),
            mail: MailConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Production deployments get hardened session cookies (`Secure`,
    /// `SameSite=None`) unless explicitly overridden.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let mut auth = AuthConfig::from_env();
        if environment.is_production() && std::env::var("SESSION_COOKIE_SECURE").is_err() {
            auth.session = SessionCookieConfig::production(auth.session.name);
        }

        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth,
            otp: OtpConfig::from_env(),
            mail: MailConfig::from_env(),
            cors: CorsConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

/// Read an environment variable and parse it, falling back to a default
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_development() {
        let config = AppConfig::default();
        assert!(config.environment.is_development());
        assert_eq!(config.auth.jwt.expiry_days, 7);
        assert_eq!(config.otp.expiration_minutes, 5);
        assert_eq!(config.database.backend, StorageBackend::Memory);
    }

    #[test]
    fn test_env_or_falls_back_on_garbage() {
        std::env::set_var("SCRIBE_TEST_ENV_OR", "not-a-number");
        assert_eq!(env_or("SCRIBE_TEST_ENV_OR", 42u32), 42);
        std::env::set_var("SCRIBE_TEST_ENV_OR", "7");
        assert_eq!(env_or("SCRIBE_TEST_ENV_OR", 42u32), 7);
        std::env::remove_var("SCRIBE_TEST_ENV_OR");
    }
}
