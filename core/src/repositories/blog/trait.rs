//! Blog repository trait defining the interface for post persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::blog::Blog;
use crate::errors::DomainError;

/// Repository trait for Blog entity persistence operations
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Find a post by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, DomainError>;

    /// Find a post by its slug
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Blog>, DomainError>;

    /// Insert a new post
    ///
    /// # Returns
    /// * `Err(DomainError::Conflict)` - The slug is already taken
    async fn create(&self, blog: Blog) -> Result<Blog, DomainError>;

    /// Replace an existing post
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No post with that id
    /// * `Err(DomainError::Conflict)` - The new slug belongs to another post
    async fn update(&self, blog: Blog) -> Result<Blog, DomainError>;

    /// Delete a post
    ///
    /// # Returns
    /// * `Ok(true)` - Post was deleted
    /// * `Ok(false)` - Post not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Published posts, newest first
    async fn list_published(&self, offset: u32, limit: u32) -> Result<Vec<Blog>, DomainError>;

    /// Total number of published posts
    async fn count_published(&self) -> Result<u64, DomainError>;

    /// Every post by one author, drafts included, newest first
    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Blog>, DomainError>;
}
