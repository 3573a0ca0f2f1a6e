//! Health check endpoint

use actix_web::{web, HttpResponse};
use serde::Serialize;

use scribe_infra::database::DatabasePool;
use scribe_shared::types::ApiResponse;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub database: &'static str,
    pub timestamp: String,
}

/// Handler for GET /health
///
/// Reports `database: "disabled"` when running on in-memory storage. A
/// registered pool that fails `SELECT 1` turns the answer into a 503.
pub async fn health_check(pool: Option<web::Data<DatabasePool>>) -> HttpResponse {
    let database = match pool {
        None => "disabled",
        Some(pool) => match pool.health_check().await {
            Ok(true) => "up",
            _ => "down",
        },
    };

    let healthy = database != "down";
    let status = HealthStatus {
        status: if healthy { "healthy" } else { "degraded" },
        service: "scribe-api",
        version: env!("CARGO_PKG_VERSION"),
        database,
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    if healthy {
        HttpResponse::Ok().json(ApiResponse::success("Service is healthy", status))
    } else {
        tracing::warn!("Health check failed: database unreachable");
        HttpResponse::ServiceUnavailable().json(ApiResponse {
            success: false,
            message: "Database unreachable".to_string(),
            data: Some(status),
            error_code: Some("SERVICE_UNAVAILABLE".to_string()),
            errors: None,
        })
    }
}

/// Default handler for unknown routes
pub async fn not_found() -> Result<HttpResponse, super::error::ApiError> {
    Err(super::error::ApiError::NotFound)
}
