pub mod blog;
pub mod user;

pub use blog::{BlogRepository, InMemoryBlogRepository};
pub use user::{InMemoryUserRepository, UserRepository};
