//! Domain-specific error types for authentication and related operations
//!
//! The presentation layer maps each variant to an HTTP status and a stable
//! machine-readable error code.

use thiserror::Error;

/// Authentication and OTP lifecycle errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("User not found")]
    UserNotFound,

    #[error("Email is already verified")]
    AlreadyVerified,

    #[error("Invalid verification code")]
    InvalidCode,

    #[error("Verification code expired")]
    CodeExpired,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email is not verified")]
    EmailNotVerified,

    #[error("Authentication required")]
    Unauthenticated,
}

/// Session token errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Session expired")]
    TokenExpired,

    #[error("Invalid session token")]
    TokenInvalid,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    RequiredField { field: String },

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("{field} is reserved, please choose another")]
    Reserved { field: String },
}

impl ValidationError {
    /// Name of the offending request field, when there is one
    pub fn field(&self) -> &str {
        match self {
            ValidationError::RequiredField { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidFormat { field }
            | ValidationError::Reserved { field } => field,
            ValidationError::InvalidEmail => "email",
            ValidationError::PasswordTooShort { .. } => "password",
        }
    }
}
