//! Session authentication middleware.
//!
//! Reads the session JWT from the session cookie, falling back to an
//! `Authorization: Bearer` header, verifies it with the core `TokenService`
//! and injects an `AuthContext` into the request.
//!
//! The middleware works in two modes:
//! 1. Required: requests without a valid session are rejected with 401
//! 2. Optional: requests continue anonymously and handlers decide

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use scribe_core::errors::{AuthError, DomainError, TokenError};
use scribe_core::services::token::TokenService;

use crate::handlers::error::ApiError;

/// Authenticated caller injected into requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    /// User id from the session token's subject
    pub user_id: Uuid,
}

/// Why a presented session was not accepted
#[derive(Debug, Clone)]
struct SessionRejection(TokenError);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    Required,
    Optional,
}

/// Session authentication middleware factory
#[derive(Clone)]
pub struct SessionAuth {
    token_service: Arc<TokenService>,
    cookie_name: Rc<str>,
    mode: AuthMode,
}

impl SessionAuth {
    /// Reject requests without a valid session
    pub fn required(token_service: Arc<TokenService>, cookie_name: &str) -> Self {
        Self {
            token_service,
            cookie_name: Rc::from(cookie_name),
            mode: AuthMode::Required,
        }
    }

    /// Attach the session when present, continue anonymously otherwise
    pub fn optional(token_service: Arc<TokenService>, cookie_name: &str) -> Self {
        Self {
            mode: AuthMode::Optional,
            ..Self::required(token_service, cookie_name)
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
            cookie_name: Rc::clone(&self.cookie_name),
            mode: self.mode,
        }))
    }
}

/// Session authentication middleware service
pub struct SessionAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
    cookie_name: Rc<str>,
    mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for SessionAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token = extract_session_token(&req, &self.cookie_name);
        let outcome = self.token_service.authenticate(token.as_deref());
        let mode = self.mode;

        Box::pin(async move {
            match outcome {
                Ok(user_id) => {
                    req.extensions_mut().insert(AuthContext { user_id });
                }
                Err(error) => {
                    if let DomainError::Token(token_error) = &error {
                        tracing::debug!(path = %req.path(), error = %token_error, "Session token rejected");
                        req.extensions_mut().insert(SessionRejection(token_error.clone()));
                    }
                    if mode == AuthMode::Required {
                        let response = req.error_response(ApiError::from(error));
                        return Ok(response.map_into_right_body());
                    }
                }
            }

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Session token from the cookie, else from a Bearer header
fn extract_session_token(req: &ServiceRequest, cookie_name: &str) -> Option<String> {
    if let Some(cookie) = req.cookie(cookie_name) {
        if !cookie.value().trim().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// The error explaining why no session is attached
fn missing_session_error(req: &HttpRequest) -> ApiError {
    match req.extensions().get::<SessionRejection>() {
        Some(SessionRejection(token_error)) => token_error.clone().into(),
        None => AuthError::Unauthenticated.into(),
    }
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let context = req.extensions().get::<AuthContext>().copied();
        let result = context.ok_or_else(|| missing_session_error(req).into());

        ready(result)
    }
}

/// Extractor for optional authentication
pub struct OptionalAuth(pub Option<AuthContext>);

impl OptionalAuth {
    pub fn user_id(&self) -> Option<Uuid> {
        self.0.map(|ctx| ctx.user_id)
    }
}

impl FromRequest for OptionalAuth {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let auth = req.extensions().get::<AuthContext>().copied();
        ready(Ok(OptionalAuth(auth)))
    }
}
