use actix_web::{web, HttpResponse};
use validator::Validate;

use scribe_core::repositories::{BlogRepository, UserRepository};
use scribe_core::services::mail::MailerTrait;
use scribe_shared::mask_email;
use scribe_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::{OtpSentResponse, ResetPasswordRequest, SendResetOtpRequest};
use crate::handlers::error::ApiError;

/// Handler for POST /api/auth/send-reset-otp
///
/// Emails a password reset code to a verified account.
///
/// ## Errors
/// - 400 Bad Request: No account with that email, or it is not verified
/// - 502 Bad Gateway: The email could not be sent
pub async fn send_reset_otp<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    request: web::Json<SendResetOtpRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: MailerTrait + 'static,
{
    request.validate()?;

    tracing::info!(email = %mask_email(&request.email), "Password reset requested");

    let dispatch = state.otp_service.issue_reset_otp(&request.email).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Password reset code sent to your email",
        OtpSentResponse {
            expires_at: dispatch.expires_at,
        },
    )))
}

/// Handler for POST /api/auth/reset-password
///
/// Sets a new password when the reset code matches. Existing sessions are
/// not revoked.
///
/// ## Errors
/// - 400 Bad Request: Password shorter than 8 characters, unknown email,
///   or an invalid or expired code
pub async fn reset_password<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    request: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: MailerTrait + 'static,
{
    request.validate()?;

    state
        .otp_service
        .reset_password(&request.email, &request.otp, &request.new_password)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Password has been reset successfully")))
}
