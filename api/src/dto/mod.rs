//! Request and response bodies, one set per endpoint group

pub mod auth;
pub mod blog;
pub mod user;

pub use auth::*;
pub use blog::*;
pub use user::*;
