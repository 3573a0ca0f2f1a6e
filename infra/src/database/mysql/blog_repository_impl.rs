//! MySQL implementation of the BlogRepository trait.
//!
//! Rich-text content and tags are stored as serialized JSON text.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use scribe_core::domain::entities::blog::Blog;
use scribe_core::errors::DomainError;
use scribe_core::repositories::BlogRepository;

use super::{column_error, map_read_error, map_write_error};

const BLOG_COLUMNS: &str = r#"
    id, author_id, title, slug, summary, content,
    cover_image_url, cover_image_public_id, tags, is_published,
    created_at, updated_at
"#;

const SLUG_TAKEN: &str = "A post with this title already exists";

/// MySQL implementation of BlogRepository
pub struct MySqlBlogRepository {
    pool: MySqlPool,
}

impl MySqlBlogRepository {
    /// Create a new MySQL blog repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_blog(row: &sqlx::mysql::MySqlRow) -> Result<Blog, DomainError> {
        let id: String = row.try_get("id").map_err(|e| column_error("id", e))?;
        let author_id: String = row
            .try_get("author_id")
            .map_err(|e| column_error("author_id", e))?;
        let content: String = row
            .try_get("content")
            .map_err(|e| column_error("content", e))?;
        let tags: String = row.try_get("tags").map_err(|e| column_error("tags", e))?;

        Ok(Blog {
            id: Uuid::parse_str(&id).map_err(|e| column_error("id", e))?,
            author_id: Uuid::parse_str(&author_id).map_err(|e| column_error("author_id", e))?,
            title: row.try_get("title").map_err(|e| column_error("title", e))?,
            slug: row.try_get("slug").map_err(|e| column_error("slug", e))?,
            summary: row
                .try_get("summary")
                .map_err(|e| column_error("summary", e))?,
            content: serde_json::from_str(&content).map_err(|e| column_error("content", e))?,
            cover_image_url: row
                .try_get("cover_image_url")
                .map_err(|e| column_error("cover_image_url", e))?,
            cover_image_public_id: row
                .try_get("cover_image_public_id")
                .map_err(|e| column_error("cover_image_public_id", e))?,
            tags: serde_json::from_str(&tags).map_err(|e| column_error("tags", e))?,
            is_published: row
                .try_get("is_published")
                .map_err(|e| column_error("is_published", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column_error("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column_error("updated_at", e))?,
        })
    }

    fn encode_json<T: serde::Serialize>(value: &T) -> Result<String, DomainError> {
        serde_json::to_string(value)
            .map_err(|e| DomainError::internal(format!("Failed to encode post: {}", e)))
    }

    async fn fetch_one_by(&self, column: &str, value: String) -> Result<Option<Blog>, DomainError> {
        let query = format!(
            "SELECT {} FROM blogs WHERE {} = ? LIMIT 1",
            BLOG_COLUMNS, column
        );

        let result = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_read_error)?;

        match result {
            Some(row) => Ok(Some(Self::row_to_blog(&row)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl BlogRepository for MySqlBlogRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, DomainError> {
        self.fetch_one_by("id", id.to_string()).await
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Blog>, DomainError> {
        self.fetch_one_by("slug", slug.to_string()).await
    }

    async fn create(&self, blog: Blog) -> Result<Blog, DomainError> {
        let query = r#"
            INSERT INTO blogs (
                id, author_id, title, slug, summary, content,
                cover_image_url, cover_image_public_id, tags, is_published,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(blog.id.to_string())
            .bind(blog.author_id.to_string())
            .bind(&blog.title)
            .bind(&blog.slug)
            .bind(&blog.summary)
            .bind(Self::encode_json(&blog.content)?)
            .bind(&blog.cover_image_url)
            .bind(&blog.cover_image_public_id)
            .bind(Self::encode_json(&blog.tags)?)
            .bind(blog.is_published)
            .bind(blog.created_at)
            .bind(blog.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, SLUG_TAKEN))?;

        tracing::debug!(blog_id = %blog.id, slug = %blog.slug, "Post created");

        Ok(blog)
    }

    async fn update(&self, blog: Blog) -> Result<Blog, DomainError> {
        if self.find_by_id(blog.id).await?.is_none() {
            return Err(DomainError::not_found("blog"));
        }

        let query = r#"
            UPDATE blogs SET
                title = ?, slug = ?, summary = ?, content = ?,
                cover_image_url = ?, cover_image_public_id = ?,
                tags = ?, is_published = ?, updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&blog.title)
            .bind(&blog.slug)
            .bind(&blog.summary)
            .bind(Self::encode_json(&blog.content)?)
            .bind(&blog.cover_image_url)
            .bind(&blog.cover_image_public_id)
            .bind(Self::encode_json(&blog.tags)?)
            .bind(blog.is_published)
            .bind(blog.updated_at)
            .bind(blog.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, SLUG_TAKEN))?;

        Ok(blog)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(map_read_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_published(&self, offset: u32, limit: u32) -> Result<Vec<Blog>, DomainError> {
        let query = format!(
            "SELECT {} FROM blogs WHERE is_published = TRUE \
             ORDER BY created_at DESC, id ASC LIMIT ? OFFSET ?",
            BLOG_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_read_error)?;

        rows.iter().map(Self::row_to_blog).collect()
    }

    async fn count_published(&self) -> Result<u64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM blogs WHERE is_published = TRUE")
            .fetch_one(&self.pool)
            .await
            .map_err(map_read_error)?;

        let total: i64 = row.try_get("total").map_err(|e| column_error("total", e))?;
        Ok(total.max(0) as u64)
    }

    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Blog>, DomainError> {
        let query = format!(
            "SELECT {} FROM blogs WHERE author_id = ? ORDER BY created_at DESC, id ASC",
            BLOG_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(author_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(map_read_error)?;

        rows.iter().map(Self::row_to_blog).collect()
    }
}
