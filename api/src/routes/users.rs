//! Profile endpoints for the signed-in user

use actix_web::{web, HttpResponse};
use validator::Validate;

use scribe_core::repositories::{BlogRepository, UserRepository};
use scribe_core::services::mail::MailerTrait;
use scribe_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::auth::UserResponse;
use crate::dto::user::UpdateProfileRequest;
use crate::handlers::error::ApiError;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/users/me
pub async fn get_profile<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: MailerTrait + 'static,
{
    let user = state.profile_service.get_profile(auth.user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Profile retrieved", UserResponse { user })))
}

/// Handler for PUT /api/users/me
///
/// Updates display name and avatar. Email and password cannot be changed here.
pub async fn update_profile<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    auth: AuthContext,
    request: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: MailerTrait + 'static,
{
    request.validate()?;

    let user = state
        .profile_service
        .update_profile(auth.user_id, request.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Profile updated", UserResponse { user })))
}
