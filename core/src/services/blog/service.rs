//! Blog service: authoring, listing and reading posts

use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use scribe_shared::types::{PaginatedResponse, Pagination};
use scribe_shared::utils::validation::validators;

use crate::domain::entities::blog::{
    is_reserved_slug, normalize_tags, slugify, Blog, MAX_TAGS, MAX_TITLE_LENGTH,
};
use crate::domain::value_objects::{AuthorSummary, BlogView};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{BlogRepository, UserRepository};

use super::types::{BlogPatch, NewBlog};

/// Blog service for post CRUD behind the session authenticator
pub struct BlogService<B: BlogRepository, U: UserRepository> {
    blog_repository: Arc<B>,
    user_repository: Arc<U>,
}

impl<B: BlogRepository, U: UserRepository> BlogService<B, U> {
    pub fn new(blog_repository: Arc<B>, user_repository: Arc<U>) -> Self {
        Self {
            blog_repository,
            user_repository,
        }
    }

    /// Create a post owned by `author_id`
    pub async fn create(&self, author_id: Uuid, input: NewBlog) -> DomainResult<BlogView> {
        let title = validate_title(&input.title)?;
        validate_content(&input.content)?;
        let tags = validate_tags(input.tags)?;

        let mut blog = Blog::new(author_id, title, input.content);
        blog.summary = non_blank(input.summary);
        blog.cover_image_url = non_blank(input.cover_image_url);
        blog.cover_image_public_id = non_blank(input.cover_image_public_id);
        blog.tags = tags;
        blog.is_published = input.is_published;

        let blog = self.blog_repository.create(blog).await?;
        tracing::info!(
            blog_id = %blog.id,
            author_id = %author_id,
            slug = %blog.slug,
            event = "blog_created",
            "Blog post created"
        );

        self.view(blog).await
    }

    /// Published posts, newest first
    pub async fn list_published(&self, pagination: Pagination) -> DomainResult<PaginatedResponse<BlogView>> {
        let pagination = pagination.validate();
        let total = self.blog_repository.count_published().await?;
        let blogs = self
            .blog_repository
            .list_published(pagination.offset(), pagination.limit())
            .await?;

        let views = self.views(blogs).await?;
        Ok(PaginatedResponse::new(views, pagination, total))
    }

    /// Every post by `author_id`, drafts included
    pub async fn list_by_author(&self, author_id: Uuid) -> DomainResult<Vec<BlogView>> {
        let blogs = self.blog_repository.list_by_author(author_id).await?;
        self.views(blogs).await
    }

    /// Read one post; drafts are only visible to their author
    pub async fn get_by_slug(&self, slug: &str, viewer: Option<Uuid>) -> DomainResult<BlogView> {
        let blog = self
            .blog_repository
            .find_by_slug(slug)
            .await?
            .filter(|blog| blog.is_visible_to(viewer))
            .ok_or_else(|| DomainError::not_found("blog"))?;

        self.view(blog).await
    }

    /// Apply a patch to a post owned by `author_id`
    ///
    /// A new title re-derives the slug.
    pub async fn update(&self, id: Uuid, author_id: Uuid, patch: BlogPatch) -> DomainResult<BlogView> {
        let mut blog = self.owned(id, author_id).await?;

        if let Some(title) = patch.title {
            let title = validate_title(&title)?;
            if title != blog.title {
                blog.rename(title);
            }
        }
        if let Some(content) = patch.content {
            validate_content(&content)?;
            blog.content = content;
        }
        if let Some(tags) = patch.tags {
            blog.tags = validate_tags(tags)?;
        }
        if patch.summary.is_some() {
            blog.summary = non_blank(patch.summary);
        }
        if patch.cover_image_url.is_some() {
            blog.cover_image_url = non_blank(patch.cover_image_url);
            blog.cover_image_public_id = non_blank(patch.cover_image_public_id);
        }
        if let Some(is_published) = patch.is_published {
            blog.is_published = is_published;
        }
        blog.touch();

        let blog = self.blog_repository.update(blog).await?;
        tracing::info!(blog_id = %blog.id, event = "blog_updated", "Blog post updated");

        self.view(blog).await
    }

    /// Delete a post owned by `author_id`
    pub async fn delete(&self, id: Uuid, author_id: Uuid) -> DomainResult<()> {
        let blog = self.owned(id, author_id).await?;
        if !self.blog_repository.delete(blog.id).await? {
            return Err(DomainError::not_found("blog"));
        }

        tracing::info!(blog_id = %id, event = "blog_deleted", "Blog post deleted");
        Ok(())
    }

    async fn owned(&self, id: Uuid, author_id: Uuid) -> DomainResult<Blog> {
        let blog = self
            .blog_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("blog"))?;

        if !blog.is_authored_by(author_id) {
            tracing::warn!(
                blog_id = %id,
                user_id = %author_id,
                event = "blog_forbidden",
                "Non-author tried to modify a blog post"
            );
            return Err(DomainError::Forbidden);
        }
        Ok(blog)
    }

    async fn view(&self, blog: Blog) -> DomainResult<BlogView> {
        let author = self
            .user_repository
            .find_by_id(blog.author_id)
            .await?
            .map(|user| AuthorSummary::from(&user));
        Ok(BlogView::new(blog, author))
    }

    async fn views(&self, blogs: Vec<Blog>) -> DomainResult<Vec<BlogView>> {
        let mut authors: HashMap<Uuid, Option<AuthorSummary>> = HashMap::new();
        let mut views = Vec::with_capacity(blogs.len());

        for blog in blogs {
            if !authors.contains_key(&blog.author_id) {
                let author = self
                    .user_repository
                    .find_by_id(blog.author_id)
                    .await?
                    .map(|user| AuthorSummary::from(&user));
                authors.insert(blog.author_id, author);
            }
            let author = authors.get(&blog.author_id).cloned().flatten();
            views.push(BlogView::new(blog, author));
        }

        Ok(views)
    }
}

fn validate_title(title: &str) -> DomainResult<String> {
    let title = title.trim();
    if !validators::not_blank(title) {
        return Err(ValidationError::RequiredField { field: "title".into() }.into());
    }
    if !validators::length_between(title, 1, MAX_TITLE_LENGTH) {
        return Err(ValidationError::TooLong {
            field: "title".into(),
            max: MAX_TITLE_LENGTH,
        }
        .into());
    }
    let slug = slugify(title);
    if slug.is_empty() {
        return Err(ValidationError::InvalidFormat { field: "title".into() }.into());
    }
    if is_reserved_slug(&slug) {
        return Err(ValidationError::Reserved { field: "title".into() }.into());
    }
    Ok(title.to_string())
}

fn validate_content(content: &serde_json::Value) -> DomainResult<()> {
    if content.is_null() {
        return Err(ValidationError::RequiredField { field: "content".into() }.into());
    }
    Ok(())
}

fn validate_tags(tags: Vec<String>) -> DomainResult<Vec<String>> {
    let tags = normalize_tags(tags);
    if tags.len() > MAX_TAGS {
        return Err(ValidationError::TooLong {
            field: "tags".into(),
            max: MAX_TAGS,
        }
        .into());
    }
    Ok(tags)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
