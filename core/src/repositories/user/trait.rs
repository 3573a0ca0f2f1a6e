//! User repository trait defining the interface for credential persistence.
//!
//! The trait is async-first and uses Result types for proper error handling.
//! Implementations live in the infrastructure layer (MySQL) and in
//! `memory.rs` for tests and local development.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example
/// ```no_run
/// # use scribe_core::repositories::UserRepository;
/// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
/// if let Some(mut user) = repo.find_by_email("alice@x.com").await? {
///     user.mark_verified();
///     repo.save(user).await?;
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by exact email match
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Insert or fully replace a user record
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError::Conflict)` - Another user already owns the email
    async fn save(&self, user: User) -> Result<User, DomainError>;

    /// Check if any user is registered with the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
