//! Configuration for the OTP lifecycle service

use scribe_shared::config::OtpConfig;

use crate::domain::entities::one_time_code::DEFAULT_EXPIRATION_MINUTES;

/// Configuration for the OTP lifecycle service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Number of minutes before a one-time code expires
    pub code_expiration_minutes: i64,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
        }
    }
}

impl From<&OtpConfig> for OtpServiceConfig {
    fn from(config: &OtpConfig) -> Self {
        Self {
            code_expiration_minutes: config.expiration_minutes,
        }
    }
}
