//! Error responses
//!
//! Every failure leaves the API as an `ApiResponse` envelope with a stable
//! `error_code`. Persistence and upstream failures are logged with detail
//! and answered with a generic message.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::collections::HashMap;
use std::fmt;
use validator::ValidationErrors;

use scribe_core::errors::{AuthError, DomainError, TokenError};
use scribe_shared::types::ApiResponse;

const INTERNAL_MESSAGE: &str = "Something went wrong. Please try again later";
const UPSTREAM_MESSAGE: &str = "Email delivery failed. Please try again later";

/// Error type returned by every handler
#[derive(Debug)]
pub enum ApiError {
    /// A domain operation failed
    Domain(DomainError),
    /// Request DTO failed `validator` checks
    Validation(HashMap<String, Vec<String>>),
    /// Body, path or query could not be parsed
    BadRequest(String),
    /// No route or resource at this path
    NotFound,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Domain(e) => write!(f, "{}", e),
            ApiError::Validation(errors) => write!(f, "Validation failed: {:?}", errors),
            ApiError::BadRequest(message) => write!(f, "Bad request: {}", message),
            ApiError::NotFound => write!(f, "Not found"),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApiError::Domain(error)
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        ApiError::Domain(error.into())
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        ApiError::Domain(error.into())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = HashMap::new();
        for (field, errors) in errors.field_errors() {
            let messages: Vec<String> = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            fields.insert(field.to_string(), messages);
        }
        ApiError::Validation(fields)
    }
}

/// Status, error code and client-facing message for a domain error
pub fn domain_error_parts(error: &DomainError) -> (StatusCode, &'static str, String) {
    match error {
        DomainError::Validation { message } => {
            (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message.clone())
        }
        DomainError::ValidationErr(e) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string()),
        DomainError::NotFound { resource } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{} not found", capitalize(resource)),
        ),
        DomainError::Conflict { message } => (StatusCode::CONFLICT, "CONFLICT", message.clone()),
        DomainError::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN", error.to_string()),
        DomainError::Upstream { .. } => (
            StatusCode::BAD_GATEWAY,
            "UPSTREAM_FAILURE",
            UPSTREAM_MESSAGE.to_string(),
        ),
        DomainError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            INTERNAL_MESSAGE.to_string(),
        ),
        DomainError::Auth(e) => {
            let (status, code) = match e {
                AuthError::UserNotFound => (StatusCode::BAD_REQUEST, "USER_NOT_FOUND"),
                AuthError::AlreadyVerified => (StatusCode::BAD_REQUEST, "ALREADY_VERIFIED"),
                AuthError::InvalidCode => (StatusCode::BAD_REQUEST, "INVALID_CODE"),
                AuthError::CodeExpired => (StatusCode::BAD_REQUEST, "CODE_EXPIRED"),
                AuthError::InvalidCredentials => (StatusCode::BAD_REQUEST, "INVALID_CREDENTIALS"),
                AuthError::EmailNotVerified => (StatusCode::BAD_REQUEST, "EMAIL_NOT_VERIFIED"),
                AuthError::Unauthenticated => (StatusCode::UNAUTHORIZED, "UNAUTHENTICATED"),
            };
            (status, code, e.to_string())
        }
        DomainError::Token(e) => match e {
            TokenError::TokenExpired => (StatusCode::UNAUTHORIZED, "TOKEN_EXPIRED", e.to_string()),
            TokenError::TokenInvalid => (StatusCode::UNAUTHORIZED, "TOKEN_INVALID", e.to_string()),
            TokenError::TokenGenerationFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                INTERNAL_MESSAGE.to_string(),
            ),
        },
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(e) => domain_error_parts(e).0,
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Domain(e) => {
                let (status, code, message) = domain_error_parts(e);
                if status.is_server_error() {
                    tracing::error!(error = %e, error_code = code, "Request failed");
                } else {
                    tracing::debug!(error = %e, error_code = code, "Request rejected");
                }

                let response = ApiResponse::error(code, message);
                match e {
                    DomainError::ValidationErr(v) => {
                        let mut fields = HashMap::new();
                        fields.insert(v.field().to_string(), vec![v.to_string()]);
                        response.with_field_errors(fields)
                    }
                    _ => response,
                }
            }
            ApiError::Validation(fields) => {
                tracing::debug!(fields = ?fields.keys().collect::<Vec<_>>(), "Request validation failed");
                ApiResponse::error("VALIDATION_ERROR", "Invalid request data")
                    .with_field_errors(fields.clone())
            }
            ApiError::BadRequest(message) => {
                ApiResponse::error("INVALID_REQUEST", message.clone())
            }
            ApiError::NotFound => {
                ApiResponse::error("NOT_FOUND", "The requested resource was not found")
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_core::errors::ValidationError;

    #[test]
    fn test_auth_errors_are_bad_requests() {
        for (error, code) in [
            (AuthError::InvalidCode, "INVALID_CODE"),
            (AuthError::CodeExpired, "CODE_EXPIRED"),
            (AuthError::EmailNotVerified, "EMAIL_NOT_VERIFIED"),
            (AuthError::UserNotFound, "USER_NOT_FOUND"),
        ] {
            let (status, mapped, _) = domain_error_parts(&error.into());
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(mapped, code);
        }
    }

    #[test]
    fn test_token_errors_have_distinct_codes() {
        let (expired_status, expired, _) = domain_error_parts(&TokenError::TokenExpired.into());
        let (invalid_status, invalid, _) = domain_error_parts(&TokenError::TokenInvalid.into());
        assert_eq!(expired_status, StatusCode::UNAUTHORIZED);
        assert_eq!(invalid_status, StatusCode::UNAUTHORIZED);
        assert_ne!(expired, invalid);
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let error = DomainError::internal("connection refused at 10.0.0.5");
        let (status, code, message) = domain_error_parts(&error);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "INTERNAL_ERROR");
        assert!(!message.contains("10.0.0.5"));

        let (status, _, message) = domain_error_parts(&DomainError::upstream("mail", "401 from relay"));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(!message.contains("401"));
    }

    #[test]
    fn test_resource_errors() {
        assert_eq!(
            domain_error_parts(&DomainError::not_found("blog")).0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(domain_error_parts(&DomainError::Forbidden).0, StatusCode::FORBIDDEN);
        assert_eq!(
            domain_error_parts(&DomainError::conflict("taken")).0,
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_field_validation_error_response() {
        let error = ApiError::from(DomainError::from(ValidationError::PasswordTooShort { min: 6 }));
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }
}
