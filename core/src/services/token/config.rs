//! Configuration for the token service

use jsonwebtoken::Algorithm;
use scribe_shared::config::JwtConfig;

use crate::domain::entities::session::{JWT_AUDIENCE, JWT_ISSUER, SESSION_EXPIRY_DAYS};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Session lifetime in days
    pub session_expiry_days: i64,
    /// Issuer claim written and required
    pub issuer: String,
    /// Audience claim written and required
    pub audience: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            session_expiry_days: SESSION_EXPIRY_DAYS,
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            algorithm: Algorithm::HS256,
            session_expiry_days: config.expiry_days,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
        }
    }
}
