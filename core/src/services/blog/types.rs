//! Input types for blog operations

/// Fields of a new post
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: String,
    pub summary: Option<String>,
    pub content: serde_json::Value,
    pub cover_image_url: Option<String>,
    pub cover_image_public_id: Option<String>,
    pub tags: Vec<String>,
    pub is_published: bool,
}

/// Partial update of a post; `None` leaves a field as it is
#[derive(Debug, Clone, Default)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<serde_json::Value>,
    pub cover_image_url: Option<String>,
    pub cover_image_public_id: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_published: Option<bool>,
}
