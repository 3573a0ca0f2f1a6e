//! Application state and factory
//!
//! Builds the service graph from repositories, a mailer and configuration,
//! and wires it into an Actix-web application.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error,
};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use scribe_core::repositories::{BlogRepository, UserRepository};
use scribe_core::services::{
    AuthService, AuthServiceConfig, BlogService, MailerTrait, OtpService, OtpServiceConfig,
    PasswordHasher, ProfileService, TokenService, TokenServiceConfig,
};
use scribe_shared::config::{AppConfig, SessionCookieConfig};

use crate::handlers::{health_check, not_found, request_config};
use crate::middleware::{cors::create_cors, auth::SessionAuth};
use crate::routes::{auth, blogs, users};

/// Application state shared by every handler
pub struct AppState<U, B, M>
where
    U: UserRepository,
    B: BlogRepository,
    M: MailerTrait,
{
    pub auth_service: Arc<AuthService<U, M>>,
    pub otp_service: Arc<OtpService<U, M>>,
    pub profile_service: Arc<ProfileService<U>>,
    pub blog_service: Arc<BlogService<B, U>>,
    pub token_service: Arc<TokenService>,
    pub session_cookie: SessionCookieConfig,
}

impl<U, B, M> AppState<U, B, M>
where
    U: UserRepository,
    B: BlogRepository,
    M: MailerTrait,
{
    /// Build every service over the given storage and mailer
    pub fn new(
        user_repository: Arc<U>,
        blog_repository: Arc<B>,
        mailer: Arc<M>,
        config: &AppConfig,
    ) -> Self {
        let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));
        let password_hasher = PasswordHasher::new(config.auth.password_hash_cost);

        let otp_service = Arc::new(OtpService::new(
            user_repository.clone(),
            mailer,
            token_service.clone(),
            password_hasher,
            OtpServiceConfig::from(&config.otp),
        ));

        let auth_service = Arc::new(AuthService::new(
            user_repository.clone(),
            otp_service.clone(),
            token_service.clone(),
            password_hasher,
            AuthServiceConfig::default(),
        ));

        Self {
            auth_service,
            otp_service,
            profile_service: Arc::new(ProfileService::new(user_repository.clone())),
            blog_service: Arc::new(BlogService::new(blog_repository, user_repository)),
            token_service,
            session_cookie: config.auth.session.clone(),
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, B, M>(
    app_state: web::Data<AppState<U, B, M>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    B: BlogRepository + 'static,
    M: MailerTrait + 'static,
{
    let token_service = app_state.token_service.clone();
    let cookie_name = app_state.session_cookie.name.clone();
    let required = SessionAuth::required(token_service.clone(), &cookie_name);
    let optional = SessionAuth::optional(token_service, &cookie_name);

    App::new()
        .app_data(app_state)
        .app_data(request_config::json_config(config.server.max_payload_size))
        .app_data(request_config::path_config())
        .app_data(request_config::query_config())
        // Middleware runs bottom-up: CORS first, then request tracing
        .wrap(TracingLogger::default())
        .wrap(create_cors(&config.cors))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register::register::<U, B, M>))
                        .route(
                            "/send-verify-otp",
                            web::post()
                                .to(auth::verification::send_verify_otp::<U, B, M>)
                                .wrap(optional.clone()),
                        )
                        .route(
                            "/verify-email",
                            web::post().to(auth::verification::verify_email::<U, B, M>),
                        )
                        .route("/login", web::post().to(auth::session::login::<U, B, M>))
                        .route("/logout", web::post().to(auth::session::logout::<U, B, M>))
                        .route(
                            "/me",
                            web::get()
                                .to(auth::session::me::<U, B, M>)
                                .wrap(required.clone()),
                        )
                        .route(
                            "/send-reset-otp",
                            web::post().to(auth::password_reset::send_reset_otp::<U, B, M>),
                        )
                        .route(
                            "/reset-password",
                            web::post().to(auth::password_reset::reset_password::<U, B, M>),
                        ),
                )
                .service(
                    web::scope("/users")
                        .wrap(required.clone())
                        .route("/me", web::get().to(users::get_profile::<U, B, M>))
                        .route("/me", web::put().to(users::update_profile::<U, B, M>)),
                )
                .service(
                    web::scope("/blogs")
                        .route("", web::get().to(blogs::list_blogs::<U, B, M>))
                        .route(
                            "",
                            web::post()
                                .to(blogs::create_blog::<U, B, M>)
                                .wrap(required.clone()),
                        )
                        .route(
                            "/mine",
                            web::get()
                                .to(blogs::my_blogs::<U, B, M>)
                                .wrap(required.clone()),
                        )
                        .route(
                            "/{slug}",
                            web::get()
                                .to(blogs::get_blog::<U, B, M>)
                                .wrap(optional),
                        )
                        .route(
                            "/{id}",
                            web::put()
                                .to(blogs::update_blog::<U, B, M>)
                                .wrap(required.clone()),
                        )
                        .route(
                            "/{id}",
                            web::delete()
                                .to(blogs::delete_blog::<U, B, M>)
                                .wrap(required),
                        ),
                ),
        )
        .default_service(web::route().to(not_found))
}
