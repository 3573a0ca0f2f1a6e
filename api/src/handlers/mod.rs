//! Cross-cutting handlers: error mapping, extractor configuration, health

pub mod error;
pub mod health;
pub mod request_config;

pub use error::{domain_error_parts, ApiError};
pub use health::{health_check, not_found};
