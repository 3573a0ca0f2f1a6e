//! CORS middleware configuration for the browser client.
//!
//! The session travels in a cookie, so credentials are supported and the
//! allowed origins come from configuration rather than a wildcard.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use scribe_shared::config::CorsConfig;

/// Creates a CORS middleware instance from configuration
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(config.max_age)
        .supports_credentials();

    for origin in &config.allowed_origins {
        tracing::debug!(origin = %origin, "Adding allowed origin");
        cors = cors.allowed_origin(origin);
    }

    cors
}
