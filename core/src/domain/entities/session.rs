//! Session token claims.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::TokenError;

/// Default session lifetime (7 days)
pub const SESSION_EXPIRY_DAYS: i64 = 7;

/// JWT issuer
pub const JWT_ISSUER: &str = "scribe";

/// JWT audience
pub const JWT_AUDIENCE: &str = "scribe-web";

/// Claims structure for the session JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl SessionClaims {
    /// Creates claims for a session starting now
    pub fn new(user_id: Uuid, lifetime: Duration, issuer: &str, audience: &str) -> Self {
        Self::issued_at(user_id, Utc::now(), lifetime, issuer, audience)
    }

    /// Creates claims for a session starting at `now`
    pub fn issued_at(
        user_id: Uuid,
        now: DateTime<Utc>,
        lifetime: Duration,
        issuer: &str,
        audience: &str,
    ) -> Self {
        let expiry = now + lifetime;
        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// The authenticated user's id
    pub fn user_id(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::TokenInvalid)
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
