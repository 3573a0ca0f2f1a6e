//! One-time code configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Lifetime settings for emailed one-time codes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Minutes a verification or reset code stays valid
    pub expiration_minutes: i64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            expiration_minutes: 5,
        }
    }
}

impl OtpConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            expiration_minutes: env_or("OTP_EXPIRATION_MINUTES", 5),
        }
    }
}
