//! # Scribe API
//!
//! HTTP surface of the Scribe blogging backend: routes, request DTOs,
//! session middleware and error rendering.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{create_app, AppState};
