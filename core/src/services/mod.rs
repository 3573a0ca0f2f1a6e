//! Business services containing domain logic and use cases.

pub mod auth;
pub mod blog;
pub mod mail;
pub mod otp;
pub mod password;
pub mod profile;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, RegistrationOutcome};
pub use blog::{BlogPatch, BlogService, NewBlog};
pub use mail::{MailMessage, MailerTrait};
pub use otp::{OtpDispatch, OtpService, OtpServiceConfig};
pub use password::PasswordHasher;
pub use profile::{ProfileService, ProfileUpdate};
pub use token::{TokenService, TokenServiceConfig};
