//! Route handlers grouped by resource

pub mod auth;
pub mod blogs;
pub mod users;

pub use crate::app::AppState;
