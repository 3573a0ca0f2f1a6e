use actix_web::{web, HttpResponse};
use validator::Validate;

use scribe_core::repositories::{BlogRepository, UserRepository};
use scribe_core::services::mail::MailerTrait;
use scribe_shared::mask_email;
use scribe_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::{RegisterRequest, RegisterResponse};
use crate::handlers::error::ApiError;

/// Handler for POST /api/auth/register
///
/// Creates an unverified account and emails a verification code.
///
/// # Request Body
///
/// ```json
/// { "name": "Alice", "email": "alice@x.com", "password": "secret123" }
/// ```
///
/// # Response
///
/// - 201 Created: `{ "user_id": "...", "email": "alice@x.com" }`
/// - 200 OK: same body, when the email was registered but never verified
///   and a fresh code was sent instead
///
/// ## Errors
/// - 400 Bad Request: Missing or malformed fields
/// - 409 Conflict: Email belongs to a verified account
/// - 502 Bad Gateway: The verification email could not be sent
pub async fn register<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: MailerTrait + 'static,
{
    request.validate()?;

    tracing::info!(email = %mask_email(&request.email), "Processing registration");

    let outcome = state
        .auth_service
        .register(&request.name, &request.email, &request.password)
        .await?;

    let body = RegisterResponse {
        user_id: outcome.user_id,
        email: outcome.email,
    };

    let response = if outcome.created {
        HttpResponse::Created().json(ApiResponse::success(
            "Registration successful. Check your email for the verification code",
            body,
        ))
    } else {
        HttpResponse::Ok().json(ApiResponse::success(
            "Account is not verified yet. A new verification code has been sent",
            body,
        ))
    };

    Ok(response)
}
