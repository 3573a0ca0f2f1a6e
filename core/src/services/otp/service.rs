//! OTP lifecycle: issue, deliver, verify and consume one-time codes

use chrono::{Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

use scribe_shared::utils::email::mask_email;
use scribe_shared::utils::validation::{validators, RESET_PASSWORD_MIN_LEN};

use crate::domain::entities::one_time_code::{OneTimeCode, OtpPurpose};
use crate::domain::entities::user::User;
use crate::domain::value_objects::{AuthSession, UserProfile};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::mail::{MailMessage, MailerTrait};
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

use super::config::OtpServiceConfig;
use super::types::OtpDispatch;

/// Result of comparing a submitted code against a slot
enum SlotCheck {
    Empty,
    Expired,
    Mismatch,
    Match,
}

/// Service managing the verification and password-reset code slots
///
/// Each user carries at most one live code per purpose. Issuing overwrites
/// the slot; a wrong guess empties it, so the user must request a new code.
pub struct OtpService<U: UserRepository, M: MailerTrait> {
    /// User repository holding the code slots
    user_repository: Arc<U>,
    /// Mail delivery for the codes
    mailer: Arc<M>,
    /// Token service for the session minted on verification
    token_service: Arc<TokenService>,
    /// Hasher for the password set through a reset
    password_hasher: PasswordHasher,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<U: UserRepository, M: MailerTrait> OtpService<U, M> {
    /// Create a new OTP service
    pub fn new(
        user_repository: Arc<U>,
        mailer: Arc<M>,
        token_service: Arc<TokenService>,
        password_hasher: PasswordHasher,
        config: OtpServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            mailer,
            token_service,
            password_hasher,
            config,
        }
    }

    /// Issue a fresh email verification code to an unverified user
    ///
    /// # Returns
    ///
    /// * `Err(AuthError::UserNotFound)` - No such user
    /// * `Err(AuthError::AlreadyVerified)` - Nothing left to verify
    /// * `Err(DomainError::Upstream)` - The code was stored but delivery failed
    pub async fn issue_verification_otp(&self, user_id: Uuid) -> DomainResult<OtpDispatch> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if user.is_verified {
            tracing::info!(
                user_id = %user.id,
                event = "otp_already_verified",
                "Verification code requested for a verified account"
            );
            return Err(AuthError::AlreadyVerified.into());
        }

        self.issue(user, OtpPurpose::EmailVerification).await
    }

    /// Verify the email verification code and start a session
    ///
    /// * no pending code: `InvalidCode`
    /// * expired: `CodeExpired`, the slot is left as is
    /// * wrong code: the slot is emptied, `InvalidCode`
    /// * correct: the user becomes verified and a session token is minted
    pub async fn verify_email(&self, user_id: Uuid, code: &str) -> DomainResult<AuthSession> {
        let mut user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        self.check_code(&mut user, OtpPurpose::EmailVerification, code)
            .await?;

        user.mark_verified();
        let user = self.user_repository.save(user).await?;

        tracing::info!(
            user_id = %user.id,
            event = "email_verified",
            "Email address verified"
        );

        let token = self.token_service.generate_session_token(user.id)?;
        Ok(AuthSession {
            token,
            expires_in: self.token_service.session_lifetime_seconds(),
            user: UserProfile::from(&user),
        })
    }

    /// Issue a password reset code to a verified user
    ///
    /// Answers `UserNotFound` for unknown addresses, so the endpoint reveals
    /// whether an account exists.
    pub async fn issue_reset_otp(&self, email: &str) -> DomainResult<OtpDispatch> {
        let email = email.trim();
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !user.is_verified {
            return Err(AuthError::EmailNotVerified.into());
        }

        self.issue(user, OtpPurpose::PasswordReset).await
    }

    /// Consume a reset code and store a new password
    ///
    /// The new password must have at least 8 characters; that is checked
    /// before the slot is looked at. No session is started.
    pub async fn reset_password(&self, email: &str, code: &str, new_password: &str) -> DomainResult<()> {
        if !validators::password_long_enough(new_password, RESET_PASSWORD_MIN_LEN) {
            return Err(ValidationError::PasswordTooShort {
                min: RESET_PASSWORD_MIN_LEN,
            }
            .into());
        }

        let email = email.trim();
        let mut user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        self.check_code(&mut user, OtpPurpose::PasswordReset, code)
            .await?;

        let password_hash = self.password_hasher.hash(new_password)?;
        user.set_password_hash(password_hash);
        user.clear_otp(OtpPurpose::PasswordReset);
        let user = self.user_repository.save(user).await?;

        tracing::info!(
            user_id = %user.id,
            event = "password_reset",
            "Password reset completed"
        );

        Ok(())
    }

    /// Generate, store and mail a code for `purpose`
    ///
    /// Overwrites any pending code for the same purpose. The code is stored
    /// before delivery and is not rolled back if delivery fails.
    pub(crate) async fn issue(&self, mut user: User, purpose: OtpPurpose) -> DomainResult<OtpDispatch> {
        let minutes = self.config.code_expiration_minutes;
        let otp = OneTimeCode::generate(Duration::minutes(minutes));
        let message = MailMessage::one_time_code(purpose, &user.email, &user.name, otp.code(), minutes);
        let expires_at = otp.expires_at();

        user.set_otp(purpose, otp);
        let user = self.user_repository.save(user).await?;

        tracing::info!(
            user_id = %user.id,
            email = %mask_email(&user.email),
            purpose = %purpose,
            event = "otp_generated",
            "Generated new one-time code"
        );

        let message_id = self.mailer.send(&message).await.map_err(|e| {
            tracing::error!(
                user_id = %user.id,
                purpose = %purpose,
                error = %e,
                event = "otp_delivery_failed",
                "Failed to deliver one-time code"
            );
            DomainError::upstream("mail", e)
        })?;

        tracing::info!(
            user_id = %user.id,
            message_id = %message_id,
            event = "otp_sent",
            "One-time code delivered"
        );

        Ok(OtpDispatch {
            expires_at,
            message_id,
        })
    }

    /// Compare `code` against the slot for `purpose`
    ///
    /// Returns `Ok(())` on a match and leaves the slot for the caller to
    /// clear together with its own changes. A mismatch empties the slot and
    /// persists that before failing.
    async fn check_code(&self, user: &mut User, purpose: OtpPurpose, code: &str) -> DomainResult<()> {
        let now = Utc::now();
        let check = match user.otp(purpose) {
            None => SlotCheck::Empty,
            Some(otp) if otp.is_expired_at(now) => SlotCheck::Expired,
            Some(otp) if otp.matches(code) => SlotCheck::Match,
            Some(_) => SlotCheck::Mismatch,
        };

        match check {
            SlotCheck::Match => Ok(()),
            SlotCheck::Empty => {
                tracing::warn!(
                    user_id = %user.id,
                    purpose = %purpose,
                    event = "otp_not_pending",
                    "Code submitted with no code pending"
                );
                Err(AuthError::InvalidCode.into())
            }
            SlotCheck::Expired => {
                tracing::warn!(
                    user_id = %user.id,
                    purpose = %purpose,
                    event = "otp_expired",
                    "Expired one-time code submitted"
                );
                Err(AuthError::CodeExpired.into())
            }
            SlotCheck::Mismatch => {
                user.clear_otp(purpose);
                self.user_repository.save(user.clone()).await?;
                tracing::warn!(
                    user_id = %user.id,
                    purpose = %purpose,
                    event = "otp_verification_failed",
                    "Wrong one-time code submitted, pending code discarded"
                );
                Err(AuthError::InvalidCode.into())
            }
        }
    }
}
