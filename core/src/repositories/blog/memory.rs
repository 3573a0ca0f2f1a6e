//! In-memory implementation of BlogRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::blog::Blog;
use crate::errors::DomainError;

use super::trait_::BlogRepository;

/// Process-local blog store, lost on restart
#[derive(Clone, Default)]
pub struct InMemoryBlogRepository {
    blogs: Arc<RwLock<HashMap<Uuid, Blog>>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first(blogs: &mut [Blog]) {
    blogs.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, DomainError> {
        Ok(self.blogs.read().await.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Blog>, DomainError> {
        let blogs = self.blogs.read().await;
        Ok(blogs.values().find(|b| b.slug == slug).cloned())
    }

    async fn create(&self, blog: Blog) -> Result<Blog, DomainError> {
        let mut blogs = self.blogs.write().await;
        if blogs.values().any(|b| b.slug == blog.slug) {
            return Err(DomainError::conflict("A post with this title already exists"));
        }
        blogs.insert(blog.id, blog.clone());
        Ok(blog)
    }

    async fn update(&self, blog: Blog) -> Result<Blog, DomainError> {
        let mut blogs = self.blogs.write().await;
        if !blogs.contains_key(&blog.id) {
            return Err(DomainError::not_found("blog"));
        }
        if blogs.values().any(|b| b.slug == blog.slug && b.id != blog.id) {
            return Err(DomainError::conflict("A post with this title already exists"));
        }
        blogs.insert(blog.id, blog.clone());
        Ok(blog)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.blogs.write().await.remove(&id).is_some())
    }

    async fn list_published(&self, offset: u32, limit: u32) -> Result<Vec<Blog>, DomainError> {
        let blogs = self.blogs.read().await;
        let mut published: Vec<Blog> = blogs.values().filter(|b| b.is_published).cloned().collect();
        newest_first(&mut published);
        Ok(published
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count_published(&self) -> Result<u64, DomainError> {
        let blogs = self.blogs.read().await;
        Ok(blogs.values().filter(|b| b.is_published).count() as u64)
    }

    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Blog>, DomainError> {
        let blogs = self.blogs.read().await;
        let mut mine: Vec<Blog> = blogs
            .values()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect();
        newest_first(&mut mine);
        Ok(mine)
    }
}
