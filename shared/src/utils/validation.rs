//! Common validation utilities

/// Minimum password length accepted at registration
pub const REGISTER_PASSWORD_MIN_LEN: usize = 6;

/// Minimum password length accepted by the password reset flow
pub const RESET_PASSWORD_MIN_LEN: usize = 8;

/// Common validation functions
pub mod validators {
    /// Check if a string is not blank
    pub fn not_blank(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string's character count is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.chars().count();
        len >= min && len <= max
    }

    /// Check if a password has at least `min` characters
    pub fn password_long_enough(password: &str, min: usize) -> bool {
        password.chars().count() >= min
    }

    /// Check if a URL is valid (basic check)
    pub fn is_valid_url(url: &str) -> bool {
        url.starts_with("http://") || url.starts_with("https://")
    }
}
