//! Extractor configuration
//!
//! Malformed bodies, paths and query strings are answered with the same
//! envelope as every other error.

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use super::error::ApiError;

/// JSON body extractor config with the payload size limit
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err: JsonPayloadError, req: &HttpRequest| {
            tracing::debug!(path = %req.path(), error = %err, "Rejected request body");
            let message = match err {
                JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                    "Request body is too large".to_string()
                }
                JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
                other => format!("Invalid request body: {}", other),
            };
            ApiError::BadRequest(message).into()
        })
}

/// Path extractor config; an unparsable id addresses nothing
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|_err, _req| ApiError::NotFound.into())
}

/// Query extractor config
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(format!("Invalid query string: {}", err)).into())
}
