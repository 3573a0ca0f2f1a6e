//! Shared utilities and common types for the Scribe server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - The JSON response envelope and pagination types
//! - Utility functions (email validation, masking, etc.)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    MailConfig, OtpConfig, ServerConfig, SessionCookieConfig, StorageBackend,
};
pub use types::{ApiResponse, PaginatedResponse, Pagination};
pub use utils::{email, is_valid_email, mask_email, validation};
