//! Blog post entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum title length in characters
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum number of tags on one post
pub const MAX_TAGS: usize = 10;

/// Slugs that collide with fixed routes under `/api/blogs/`
pub const RESERVED_SLUGS: &[&str] = &["mine"];

/// A blog post owned by one author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    /// Unique identifier for the post
    pub id: Uuid,

    /// Owning user
    pub author_id: Uuid,

    pub title: String,

    /// URL slug derived from the title, unique across posts
    pub slug: String,

    pub summary: Option<String>,

    /// Rich-text editor document, stored as-is
    pub content: serde_json::Value,

    /// Cover image URL at the media provider
    pub cover_image_url: Option<String>,

    /// Media provider asset id for the cover image
    pub cover_image_public_id: Option<String>,

    pub tags: Vec<String>,

    /// Drafts are visible to their author only
    pub is_published: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Blog {
    /// Creates a new post; the slug is derived from the title
    pub fn new(author_id: Uuid, title: String, content: serde_json::Value) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author_id,
            slug: slugify(&title),
            title,
            summary: None,
            content,
            cover_image_url: None,
            cover_image_public_id: None,
            tags: Vec::new(),
            is_published: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Changes the title and re-derives the slug
    pub fn rename(&mut self, title: String) {
        self.slug = slugify(&title);
        self.title = title;
        self.touch();
    }

    pub fn is_authored_by(&self, user_id: Uuid) -> bool {
        self.author_id == user_id
    }

    /// Whether `viewer` may read this post
    pub fn is_visible_to(&self, viewer: Option<Uuid>) -> bool {
        self.is_published || viewer.is_some_and(|id| self.is_authored_by(id))
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Derive a URL slug from a title
///
/// Keeps lowercase ASCII alphanumerics; any run of other characters becomes
/// a single `-`, and leading or trailing separators are dropped.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

pub fn is_reserved_slug(slug: &str) -> bool {
    RESERVED_SLUGS.contains(&slug)
}

/// Trim tags, drop blanks and repeats, keep first-seen order
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_string();
        if !tag.is_empty() && !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Rust   in 2024 "), "rust-in-2024");
        assert_eq!(slugify("--already-slugged--"), "already-slugged");
        assert_eq!(slugify("Café au lait"), "caf-au-lait");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_reserved_slugs() {
        assert!(is_reserved_slug(&slugify("Mine")));
        assert!(is_reserved_slug(&slugify("  MINE! ")));
        assert!(!is_reserved_slug(&slugify("Mine craft")));
    }

    #[test]
    fn test_new_blog_is_draft_with_slug() {
        let blog = Blog::new(Uuid::new_v4(), "My First Post".into(), serde_json::json!({}));
        assert_eq!(blog.slug, "my-first-post");
        assert!(!blog.is_published);
    }

    #[test]
    fn test_visibility() {
        let author = Uuid::new_v4();
        let mut blog = Blog::new(author, "Draft".into(), serde_json::json!({}));

        assert!(blog.is_visible_to(Some(author)));
        assert!(!blog.is_visible_to(Some(Uuid::new_v4())));
        assert!(!blog.is_visible_to(None));

        blog.is_published = true;
        assert!(blog.is_visible_to(None));
    }

    #[test]
    fn test_rename_updates_slug() {
        let mut blog = Blog::new(Uuid::new_v4(), "Old".into(), serde_json::json!({}));
        blog.rename("Brand New Title".into());
        assert_eq!(blog.slug, "brand-new-title");
        assert_eq!(blog.title, "Brand New Title");
    }

    #[test]
    fn test_normalize_tags() {
        let tags = vec![" rust ".into(), "".into(), "web".into(), "rust".into()];
        assert_eq!(normalize_tags(tags), vec!["rust".to_string(), "web".to_string()]);
    }
}
