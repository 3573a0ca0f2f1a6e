//! Outbound mail configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Which mail transport delivers one-time codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Log the message instead of sending it
    Mock,
    /// Transactional mail relay reached over HTTPS
    Relay,
}

impl std::str::FromStr for MailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" | "log" => Ok(MailProvider::Mock),
            "relay" | "http" => Ok(MailProvider::Relay),
            _ => Err(format!("Invalid mail provider: {}", s)),
        }
    }
}

/// Mail relay configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Selected provider
    pub provider: MailProvider,

    /// Relay endpoint accepting JSON messages
    pub relay_url: String,

    /// Relay API key, sent in the `api-key` header
    #[serde(default)]
    pub api_key: String,

    /// Sender address
    pub from_address: String,

    /// Sender display name
    pub from_name: String,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::Mock,
            relay_url: String::from("https://api.brevo.com/v3/smtp/email"),
            api_key: String::new(),
            from_address: String::from("no-reply@scribe.local"),
            from_name: String::from("Scribe"),
            request_timeout_secs: 15,
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: env_or("MAIL_PROVIDER", defaults.provider),
            relay_url: std::env::var("MAIL_RELAY_URL").unwrap_or(defaults.relay_url),
            api_key: std::env::var("MAIL_API_KEY").unwrap_or(defaults.api_key),
            from_address: std::env::var("MAIL_FROM_ADDRESS").unwrap_or(defaults.from_address),
            from_name: std::env::var("MAIL_FROM_NAME").unwrap_or(defaults.from_name),
            request_timeout_secs: env_or("MAIL_TIMEOUT_SECS", defaults.request_timeout_secs),
        }
    }
}
