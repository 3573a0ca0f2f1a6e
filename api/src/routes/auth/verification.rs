use actix_web::{web, HttpResponse};

use scribe_core::errors::{DomainError, ValidationError};
use scribe_core::repositories::{BlogRepository, UserRepository};
use scribe_core::services::mail::MailerTrait;
use scribe_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::{OtpSentResponse, SendVerifyOtpRequest, SessionResponse, VerifyEmailRequest};
use crate::handlers::error::ApiError;
use crate::middleware::auth::OptionalAuth;

use super::cookie::session_cookie;

/// Handler for POST /api/auth/send-verify-otp
///
/// Issues a new email verification code, overwriting any pending one. The
/// user is taken from `user_id` in the body, or from the session when the
/// body names none.
///
/// ## Errors
/// - 400 Bad Request: No user given, unknown user, or already verified
/// - 502 Bad Gateway: The email could not be sent
pub async fn send_verify_otp<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    auth: OptionalAuth,
    request: Option<web::Json<SendVerifyOtpRequest>>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: MailerTrait + 'static,
{
    let user_id = request
        .and_then(|r| r.into_inner().user_id)
        .or(auth.user_id())
        .ok_or_else(|| {
            DomainError::from(ValidationError::RequiredField {
                field: "user_id".to_string(),
            })
        })?;

    let dispatch = state.otp_service.issue_verification_otp(user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Verification code sent to your email",
        OtpSentResponse {
            expires_at: dispatch.expires_at,
        },
    )))
}

/// Handler for POST /api/auth/verify-email
///
/// Checks the emailed code, marks the account verified and opens a session.
///
/// # Request Body
///
/// ```json
/// { "user_id": "...", "otp": "012345" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid or expired code. A wrong code also discards
///   the pending one, so a new code must be requested.
pub async fn verify_email<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    request: web::Json<VerifyEmailRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: MailerTrait + 'static,
{
    let session = state
        .otp_service
        .verify_email(request.user_id, &request.otp)
        .await?;

    let cookie = session_cookie(&state.session_cookie, session.token, session.expires_in);

    Ok(HttpResponse::Ok().cookie(cookie).json(ApiResponse::success(
        "Email verified successfully",
        SessionResponse {
            user: session.user,
            expires_in: session.expires_in,
        },
    )))
}
