//! Shared setup for API integration tests

#![allow(dead_code)]

use actix_web::{cookie::Cookie, dev::ServiceResponse, web};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use scribe_api::app::AppState;
use scribe_core::repositories::{InMemoryBlogRepository, InMemoryUserRepository};
use scribe_infra::mail::{MailServiceAdapter, MockMailService};
use scribe_shared::config::AppConfig;

pub type TestState = AppState<InMemoryUserRepository, InMemoryBlogRepository, MailServiceAdapter>;

pub const PASSWORD: &str = "secret123";

/// In-memory application with a silent mock mailer
pub struct TestContext {
    pub state: web::Data<TestState>,
    pub config: AppConfig,
    pub mailer: MockMailService,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self::build(config, MockMailService::with_options(false, false))
    }

    /// Every mail send fails
    pub fn with_failing_mailer() -> Self {
        Self::build(test_config(), MockMailService::with_options(false, true))
    }

    fn build(config: AppConfig, mailer: MockMailService) -> Self {
        let state = AppState::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryBlogRepository::new()),
            Arc::new(MailServiceAdapter::new(mailer.clone())),
            &config,
        );

        Self {
            state: web::Data::new(state),
            config,
            mailer,
        }
    }

    /// Register and verify an account through the services, returning its
    /// id and session token
    pub async fn verified_user(&self, name: &str, email: &str) -> (Uuid, String) {
        let outcome = self
            .state
            .auth_service
            .register(name, email, PASSWORD)
            .await
            .expect("registration should succeed");
        let code = self.last_code_for(email);
        let session = self
            .state
            .otp_service
            .verify_email(outcome.user_id, &code)
            .await
            .expect("verification should succeed");

        (outcome.user_id, session.token)
    }

    /// Six-digit code from the latest mail sent to `email`
    pub fn last_code_for(&self, email: &str) -> String {
        let message = self
            .mailer
            .last_message_to(email)
            .unwrap_or_else(|| panic!("no mail sent to {}", email));

        message
            .text_body
            .split_whitespace()
            .find(|word| word.len() == 6 && word.chars().all(|c| c.is_ascii_digit()))
            .map(str::to_string)
            .expect("mail should contain a six-digit code")
    }
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.password_hash_cost = 4;
    config.auth.jwt.secret = "integration-test-secret".to_string();
    config
}

/// Session cookie set by a response
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    response
        .response()
        .cookies()
        .find(|c| c.name() == "token")
        .map(|c| c.into_owned())
}

pub fn error_code(body: &Value) -> &str {
    body["error_code"].as_str().unwrap_or_default()
}
