use serde::{Deserialize, Serialize};
use validator::Validate;

use scribe_core::domain::value_objects::BlogView;
use scribe_core::services::blog::{BlogPatch, NewBlog};
use scribe_shared::types::Pagination;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBlogRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Title is required (at most 200 characters)"))]
    pub title: String,

    pub summary: Option<String>,

    /// Rich-text document from the editor
    #[serde(default)]
    pub content: serde_json::Value,

    #[validate(url(message = "Cover image must be a valid URL"))]
    pub cover_image_url: Option<String>,

    pub cover_image_public_id: Option<String>,

    #[serde(default)]
    #[validate(length(max = 10, message = "At most 10 tags"))]
    pub tags: Vec<String>,

    #[serde(default)]
    pub is_published: bool,
}

impl From<CreateBlogRequest> for NewBlog {
    fn from(request: CreateBlogRequest) -> Self {
        NewBlog {
            title: request.title,
            summary: request.summary,
            content: request.content,
            cover_image_url: request.cover_image_url,
            cover_image_public_id: request.cover_image_public_id,
            tags: request.tags,
            is_published: request.is_published,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateBlogRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1 to 200 characters"))]
    pub title: Option<String>,

    pub summary: Option<String>,

    pub content: Option<serde_json::Value>,

    #[validate(url(message = "Cover image must be a valid URL"))]
    pub cover_image_url: Option<String>,

    pub cover_image_public_id: Option<String>,

    #[validate(length(max = 10, message = "At most 10 tags"))]
    pub tags: Option<Vec<String>>,

    pub is_published: Option<bool>,
}

impl From<UpdateBlogRequest> for BlogPatch {
    fn from(request: UpdateBlogRequest) -> Self {
        BlogPatch {
            title: request.title,
            summary: request.summary,
            content: request.content,
            cover_image_url: request.cover_image_url,
            cover_image_public_id: request.cover_image_public_id,
            tags: request.tags,
            is_published: request.is_published,
        }
    }
}

/// `?page=&per_page=` on the public listing
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ListBlogsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl From<ListBlogsQuery> for Pagination {
    fn from(query: ListBlogsQuery) -> Self {
        let defaults = Pagination::default();
        Pagination::new(
            query.page.unwrap_or(defaults.page),
            query.per_page.unwrap_or(defaults.per_page),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogResponse {
    pub blog: BlogView,
}
