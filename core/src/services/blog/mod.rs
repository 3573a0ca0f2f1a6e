//! Blog service module

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::BlogService;
pub use types::{BlogPatch, NewBlog};
