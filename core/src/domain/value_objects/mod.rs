//! Value objects representing immutable domain concepts.

pub mod auth_session;
pub mod blog_view;
pub mod user_profile;

// Re-export commonly used types
pub use auth_session::AuthSession;
pub use blog_view::BlogView;
pub use user_profile::{AuthorSummary, UserProfile};
