//! Session token and session cookie configuration

use serde::{Deserialize, Serialize};

use super::env_or;

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT session token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// HMAC secret used to sign session tokens
    pub secret: String,

    /// Session token lifetime in days
    pub expiry_days: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            expiry_days: 7,
            issuer: String::from("scribe"),
            audience: String::from("scribe-web"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the token lifetime in days
    pub fn with_expiry_days(mut self, days: i64) -> Self {
        self.expiry_days = days;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }

    /// Token lifetime in seconds
    pub fn expiry_seconds(&self) -> i64 {
        self.expiry_days * 86_400
    }
}

/// Session cookie configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionCookieConfig {
    /// Cookie name carrying the session token
    pub name: String,

    /// `Secure` flag (HTTPS only)
    pub secure: bool,

    /// `SameSite` attribute: "Strict", "Lax" or "None"
    pub same_site: String,
}

impl Default for SessionCookieConfig {
    fn default() -> Self {
        Self {
            name: String::from("token"),
            secure: false,
            same_site: String::from("Lax"),
        }
    }
}

impl SessionCookieConfig {
    /// Cross-site cookie settings for a client served from another origin
    pub fn production(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            secure: true,
            same_site: String::from("None"),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Session cookie configuration
    #[serde(default)]
    pub session: SessionCookieConfig,

    /// bcrypt work factor for password hashes (4..=31)
    #[serde(default = "default_password_hash_cost")]
    pub password_hash_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            session: SessionCookieConfig::default(),
            password_hash_cost: default_password_hash_cost(),
        }
    }
}

fn default_password_hash_cost() -> u32 {
    10
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = JwtConfig::default();
        let cookie_defaults = SessionCookieConfig::default();

        Self {
            jwt: JwtConfig {
                secret: std::env::var("JWT_SECRET").unwrap_or(defaults.secret),
                expiry_days: env_or("JWT_EXPIRY_DAYS", defaults.expiry_days),
                issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
                audience: std::env::var("JWT_AUDIENCE").unwrap_or(defaults.audience),
            },
            session: SessionCookieConfig {
                name: std::env::var("SESSION_COOKIE_NAME").unwrap_or(cookie_defaults.name),
                secure: env_or("SESSION_COOKIE_SECURE", cookie_defaults.secure),
                same_site: std::env::var("SESSION_COOKIE_SAME_SITE")
                    .unwrap_or(cookie_defaults.same_site),
            },
            password_hash_cost: env_or("PASSWORD_HASH_COST", default_password_hash_cost())
                .clamp(4, 31),
        }
    }
}
