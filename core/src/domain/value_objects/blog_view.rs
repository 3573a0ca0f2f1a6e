//! Blog post as returned to clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::blog::Blog;

use super::user_profile::AuthorSummary;

/// A post joined with its author's byline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlogView {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub content: serde_json::Value,
    pub cover_image_url: Option<String>,
    pub tags: Vec<String>,
    pub is_published: bool,
    /// `None` when the author record no longer exists
    pub author: Option<AuthorSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogView {
    pub fn new(blog: Blog, author: Option<AuthorSummary>) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            slug: blog.slug,
            summary: blog.summary,
            content: blog.content,
            cover_image_url: blog.cover_image_url,
            tags: blog.tags,
            is_published: blog.is_published,
            author,
            created_at: blog.created_at,
            updated_at: blog.updated_at,
        }
    }
}
