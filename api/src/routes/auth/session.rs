use actix_web::{web, HttpResponse};
use validator::Validate;

use scribe_core::repositories::{BlogRepository, UserRepository};
use scribe_core::services::mail::MailerTrait;
use scribe_shared::mask_email;
use scribe_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, SessionResponse, UserResponse};
use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthContext;

use super::cookie::{removal_cookie, session_cookie};

/// Handler for POST /api/auth/login
///
/// Opens a session for a verified account and sets the session cookie.
///
/// ## Errors
/// - 400 Bad Request: Unknown email or wrong password (one shared error),
///   or the account has not verified its email yet
pub async fn login<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: MailerTrait + 'static,
{
    request.validate()?;

    let session = state
        .auth_service
        .login(&request.email, &request.password)
        .await
        .map_err(|e| {
            tracing::info!(email = %mask_email(&request.email), error = %e, "Login rejected");
            e
        })?;

    let cookie = session_cookie(&state.session_cookie, session.token, session.expires_in);

    Ok(HttpResponse::Ok().cookie(cookie).json(ApiResponse::success(
        "Logged in successfully",
        SessionResponse {
            user: session.user,
            expires_in: session.expires_in,
        },
    )))
}

/// Handler for POST /api/auth/logout
///
/// Clears the session cookie. Tokens are stateless, so a copied token stays
/// valid until it expires.
pub async fn logout<U, B, M>(state: web::Data<AppState<U, B, M>>) -> HttpResponse
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: MailerTrait + 'static,
{
    HttpResponse::Ok()
        .cookie(removal_cookie(&state.session_cookie))
        .json(ApiResponse::ok("Logged out successfully"))
}

/// Handler for GET /api/auth/me
///
/// Answers the client's "is the session still good?" check with the
/// current profile.
///
/// ## Errors
/// - 401 Unauthorized: No session, an expired or invalid token, or the
///   user behind it no longer exists
pub async fn me<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: MailerTrait + 'static,
{
    let user = state.auth_service.current_user(auth.user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Authenticated", UserResponse { user })))
}
