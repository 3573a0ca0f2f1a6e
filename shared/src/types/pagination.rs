//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

const MIN_PER_PAGE: u32 = 1;
const MAX_PER_PAGE: u32 = 50;

/// Pagination parameters for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Number of items per page
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl Pagination {
    /// Create a new pagination with clamped values
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }.validate()
    }

    /// Calculate the offset for database queries
    ///
    /// Saturates, so a page far past the end yields an empty page.
    pub fn offset(&self) -> u32 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// Get the limit for database queries
    pub fn limit(&self) -> u32 {
        self.per_page
    }

    /// Validate and sanitize pagination parameters
    pub fn validate(mut self) -> Self {
        self.page = self.page.max(1);
        self.per_page = self.per_page.clamp(MIN_PER_PAGE, MAX_PER_PAGE);
        self
    }
}

/// Paginated response wrapper with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// The page's items
    pub items: Vec<T>,

    /// Current page number
    pub page: u32,

    /// Items per page
    pub per_page: u32,

    /// Total number of items
    pub total: u64,

    /// Total number of pages
    pub total_pages: u32,

    /// Whether there's a next page
    pub has_next: bool,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response
    pub fn new(items: Vec<T>, pagination: Pagination, total: u64) -> Self {
        let total_pages = Self::calculate_total_pages(total, pagination.per_page);
        Self {
            items,
            page: pagination.page,
            per_page: pagination.per_page,
            total,
            total_pages,
            has_next: pagination.page < total_pages,
        }
    }

    /// Transform the items using a function
    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            total_pages: self.total_pages,
            has_next: self.has_next,
        }
    }

    fn calculate_total_pages(total: u64, per_page: u32) -> u32 {
        if total == 0 || per_page == 0 {
            return 0;
        }
        total.div_ceil(per_page as u64) as u32
    }
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    10
}
