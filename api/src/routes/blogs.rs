//! Blog endpoints
//!
//! Listing and reading are public; writes require a session and only the
//! author may change or delete a post.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use scribe_core::repositories::{BlogRepository, UserRepository};
use scribe_core::services::mail::MailerTrait;
use scribe_shared::types::{ApiResponse, Pagination};

use crate::app::AppState;
use crate::dto::blog::{BlogResponse, CreateBlogRequest, ListBlogsQuery, UpdateBlogRequest};
use crate::handlers::error::ApiError;
use crate::middleware::auth::{AuthContext, OptionalAuth};

/// Handler for GET /api/blogs
///
/// Published posts, newest first, paginated with `?page=&per_page=`.
pub async fn list_blogs<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    query: web::Query<ListBlogsQuery>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: MailerTrait + 'static,
{
    let page = state
        .blog_service
        .list_published(Pagination::from(query.into_inner()))
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Blogs retrieved", page)))
}

/// Handler for POST /api/blogs
///
/// ## Errors
/// - 400 Bad Request: Missing title, too many tags or an invalid cover URL
/// - 409 Conflict: The title produces a slug that is already taken
pub async fn create_blog<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    auth: AuthContext,
    request: web::Json<CreateBlogRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: MailerTrait + 'static,
{
    request.validate()?;

    let blog = state
        .blog_service
        .create(auth.user_id, request.into_inner().into())
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success("Blog created", BlogResponse { blog })))
}

/// Handler for GET /api/blogs/mine
pub async fn my_blogs<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: MailerTrait + 'static,
{
    let blogs = state.blog_service.list_by_author(auth.user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Blogs retrieved", blogs)))
}

/// Handler for GET /api/blogs/{slug}
///
/// Drafts are answered with 404 unless the session belongs to their author.
pub async fn get_blog<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    auth: OptionalAuth,
    slug: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: MailerTrait + 'static,
{
    let blog = state
        .blog_service
        .get_by_slug(&slug, auth.user_id())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Blog retrieved", BlogResponse { blog })))
}

/// Handler for PUT /api/blogs/{id}
///
/// ## Errors
/// - 403 Forbidden: The caller is not the author
/// - 404 Not Found: No post with this id
pub async fn update_blog<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    auth: AuthContext,
    id: web::Path<Uuid>,
    request: web::Json<UpdateBlogRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: MailerTrait + 'static,
{
    request.validate()?;

    let blog = state
        .blog_service
        .update(id.into_inner(), auth.user_id, request.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Blog updated", BlogResponse { blog })))
}

/// Handler for DELETE /api/blogs/{id}
pub async fn delete_blog<U, B, M>(
    state: web::Data<AppState<U, B, M>>,
    auth: AuthContext,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: MailerTrait + 'static,
{
    state.blog_service.delete(id.into_inner(), auth.user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Blog deleted")))
}
