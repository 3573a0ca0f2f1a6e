//! Type definitions shared by the API layer
//!
//! - `pagination` - Pagination for list endpoints
//! - `response` - The `{success, message}` JSON envelope

pub mod pagination;
pub mod response;

pub use pagination::{PaginatedResponse, Pagination};
pub use response::ApiResponse;
