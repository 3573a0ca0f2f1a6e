//! Main authentication service implementation

use std::sync::Arc;
use uuid::Uuid;

use scribe_shared::utils::email::{is_valid_email, mask_email};
use scribe_shared::utils::validation::validators;

use crate::domain::entities::one_time_code::OtpPurpose;
use crate::domain::entities::user::User;
use crate::domain::value_objects::{AuthSession, UserProfile};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::mail::MailerTrait;
use crate::services::otp::OtpService;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::types::RegistrationOutcome;

/// Authentication service for registration, login and session lookup
pub struct AuthService<U, M>
where
    U: UserRepository,
    M: MailerTrait,
{
    /// User repository for credential records
    user_repository: Arc<U>,
    /// OTP lifecycle for the verification code sent on registration
    otp_service: Arc<OtpService<U, M>>,
    /// Token service for session JWTs
    token_service: Arc<TokenService>,
    /// Password hashing
    password_hasher: PasswordHasher,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, M> AuthService<U, M>
where
    U: UserRepository,
    M: MailerTrait,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        otp_service: Arc<OtpService<U, M>>,
        token_service: Arc<TokenService>,
        password_hasher: PasswordHasher,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            otp_service,
            token_service,
            password_hasher,
            config,
        }
    }

    /// Register an account and send its verification code
    ///
    /// Re-registering an unverified email re-sends the code to the existing
    /// record and keeps its stored name and password. A verified email is a
    /// conflict.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> DomainResult<RegistrationOutcome> {
        let name = name.trim();
        let email = email.trim();
        self.validate_registration(name, email, password)?;

        if let Some(existing) = self.user_repository.find_by_email(email).await? {
            if existing.is_verified {
                tracing::info!(
                    email = %mask_email(email),
                    event = "register_duplicate",
                    "Registration attempted for a verified email"
                );
                return Err(DomainError::conflict("Email is already registered"));
            }

            tracing::info!(
                user_id = %existing.id,
                event = "register_resend",
                "Unverified account re-registered, re-sending verification code"
            );
            let outcome = RegistrationOutcome {
                user_id: existing.id,
                email: existing.email.clone(),
                created: false,
            };
            self.otp_service
                .issue(existing, OtpPurpose::EmailVerification)
                .await?;
            return Ok(outcome);
        }

        let password_hash = self.password_hasher.hash(password)?;
        let user = User::new(name.to_string(), email.to_string(), password_hash);
        let user = self.user_repository.save(user).await?;

        tracing::info!(
            user_id = %user.id,
            email = %mask_email(&user.email),
            event = "user_registered",
            "New user registered"
        );

        let outcome = RegistrationOutcome {
            user_id: user.id,
            email: user.email.clone(),
            created: true,
        };
        self.otp_service
            .issue(user, OtpPurpose::EmailVerification)
            .await?;
        Ok(outcome)
    }

    /// Check credentials and start a session
    ///
    /// An unknown email and a wrong password fail the same way. An
    /// unverified account is rejected before its password is compared.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthSession> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::RequiredField { field: "email".into() }.into());
        }
        if password.is_empty() {
            return Err(ValidationError::RequiredField { field: "password".into() }.into());
        }

        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) => user,
            None => {
                tracing::warn!(
                    email = %mask_email(email),
                    event = "login_failed",
                    reason = "unknown_email",
                    "Login failed"
                );
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !user.is_verified {
            tracing::warn!(
                user_id = %user.id,
                event = "login_failed",
                reason = "unverified",
                "Login rejected for unverified account"
            );
            return Err(AuthError::EmailNotVerified.into());
        }

        if !self.password_hasher.verify(password, &user.password_hash)? {
            tracing::warn!(
                user_id = %user.id,
                event = "login_failed",
                reason = "wrong_password",
                "Login failed"
            );
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.token_service.generate_session_token(user.id)?;
        tracing::info!(user_id = %user.id, event = "login_success", "User logged in");

        Ok(AuthSession {
            token,
            expires_in: self.token_service.session_lifetime_seconds(),
            user: UserProfile::from(&user),
        })
    }

    /// Profile of the authenticated caller
    ///
    /// A valid token whose user no longer exists counts as unauthenticated.
    pub async fn current_user(&self, user_id: Uuid) -> DomainResult<UserProfile> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .map(|user| UserProfile::from(&user))
            .ok_or_else(|| AuthError::Unauthenticated.into())
    }

    fn validate_registration(&self, name: &str, email: &str, password: &str) -> DomainResult<()> {
        if !validators::not_blank(name) {
            return Err(ValidationError::RequiredField { field: "name".into() }.into());
        }
        if !validators::length_between(name, 1, self.config.max_name_length) {
            return Err(ValidationError::TooLong {
                field: "name".into(),
                max: self.config.max_name_length,
            }
            .into());
        }
        if email.is_empty() {
            return Err(ValidationError::RequiredField { field: "email".into() }.into());
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if password.is_empty() {
            return Err(ValidationError::RequiredField { field: "password".into() }.into());
        }
        if !validators::password_long_enough(password, self.config.min_password_length) {
            return Err(ValidationError::PasswordTooShort {
                min: self.config.min_password_length,
            }
            .into());
        }
        Ok(())
    }
}
