//! Domain entities representing core business objects.

pub mod blog;
pub mod one_time_code;
pub mod session;
pub mod user;

// Re-export commonly used types
pub use blog::{
    is_reserved_slug, normalize_tags, slugify, Blog, MAX_TAGS, MAX_TITLE_LENGTH, RESERVED_SLUGS,
};
pub use one_time_code::{OneTimeCode, OtpPurpose, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES};
pub use session::{SessionClaims, JWT_AUDIENCE, JWT_ISSUER, SESSION_EXPIRY_DAYS};
pub use user::User;
