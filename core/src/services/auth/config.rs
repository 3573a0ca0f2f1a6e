//! Configuration for the authentication service

use scribe_shared::utils::validation::REGISTER_PASSWORD_MIN_LEN;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Minimum password length at registration
    pub min_password_length: usize,
    /// Maximum display name length
    pub max_name_length: usize,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            min_password_length: REGISTER_PASSWORD_MIN_LEN,
            max_name_length: 50,
        }
    }
}
