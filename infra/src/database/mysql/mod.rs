//! MySQL-specific database implementations
//!
//! This module contains MySQL implementations of repository traits
//! using SQLx for database operations.

pub mod blog_repository_impl;
pub mod user_repository_impl;

// Re-export the MySQL implementations
pub use blog_repository_impl::MySqlBlogRepository;
pub use user_repository_impl::MySqlUserRepository;

use scribe_core::errors::DomainError;

use crate::InfrastructureError;

/// Map a failed write, turning unique-index violations into `Conflict`
pub(crate) fn map_write_error(err: sqlx::Error, conflict_message: &str) -> DomainError {
    let err = InfrastructureError::Database(err);
    if err.is_unique_violation() {
        DomainError::conflict(conflict_message)
    } else {
        tracing::error!(error = %err, "Database write failed");
        err.into()
    }
}

/// Map a failed read
pub(crate) fn map_read_error(err: sqlx::Error) -> DomainError {
    tracing::error!(error = %err, "Database query failed");
    InfrastructureError::Database(err).into()
}

/// Map a column decode failure
pub(crate) fn column_error(column: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::internal(format!("Failed to read column {}: {}", column, err))
}
