//! Profile service module

mod service;

#[cfg(test)]
mod tests;

pub use service::{ProfileService, ProfileUpdate};
