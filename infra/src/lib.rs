//! # Infrastructure Layer
//!
//! Concrete implementations of the seams the core crate defines:
//!
//! - **Database**: MySQL repositories using SQLx, plus schema bootstrap
//! - **Mail**: outbound mail providers (logging mock, HTTP relay)
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

use scribe_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Mail module - outbound mail providers
pub mod mail;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail delivery error
    #[error("Mail service error: {0}")]
    Mail(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

impl InfrastructureError {
    /// Whether the error is a violated unique index
    pub fn is_unique_violation(&self) -> bool {
        match self {
            InfrastructureError::Database(sqlx::Error::Database(db_err)) => {
                db_err.is_unique_violation()
            }
            _ => false,
        }
    }
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Http(e) => DomainError::upstream("mail", e.to_string()),
            InfrastructureError::Mail(message) => DomainError::upstream("mail", message),
            other => DomainError::internal(other.to_string()),
        }
    }
}
