//! User entity representing a registered author in the Scribe system.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::one_time_code::{OneTimeCode, OtpPurpose};

/// User credential record
///
/// Holds the password hash and both one-time code slots, so it is never
/// serialized directly. Outward views go through `UserProfile`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Login email, unique and case-sensitive as stored
    pub email: String,

    /// bcrypt hash of the password
    pub password_hash: String,

    /// Whether the email address has been verified
    pub is_verified: bool,

    /// Pending email verification code
    pub verify_otp: Option<OneTimeCode>,

    /// Pending password reset code
    pub reset_otp: Option<OneTimeCode>,

    /// Avatar image URL at the media provider
    pub avatar_url: Option<String>,

    /// Media provider asset id for the avatar
    pub avatar_public_id: Option<String>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new unverified user
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            is_verified: false,
            verify_otp: None,
            reset_otp: None,
            avatar_url: None,
            avatar_public_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// The slot holding codes for `purpose`
    pub fn otp(&self, purpose: OtpPurpose) -> Option<&OneTimeCode> {
        match purpose {
            OtpPurpose::EmailVerification => self.verify_otp.as_ref(),
            OtpPurpose::PasswordReset => self.reset_otp.as_ref(),
        }
    }

    /// Store a new code, replacing any pending one for the same purpose
    pub fn set_otp(&mut self, purpose: OtpPurpose, otp: OneTimeCode) {
        match purpose {
            OtpPurpose::EmailVerification => self.verify_otp = Some(otp),
            OtpPurpose::PasswordReset => self.reset_otp = Some(otp),
        }
        self.updated_at = Utc::now();
    }

    /// Empty the slot for `purpose`
    pub fn clear_otp(&mut self, purpose: OtpPurpose) {
        match purpose {
            OtpPurpose::EmailVerification => self.verify_otp = None,
            OtpPurpose::PasswordReset => self.reset_otp = None,
        }
        self.updated_at = Utc::now();
    }

    /// Marks the email as verified and drops the verification code
    pub fn mark_verified(&mut self) {
        self.is_verified = true;
        self.verify_otp = None;
        self.updated_at = Utc::now();
    }

    /// Replaces the password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Applies profile changes; `None` leaves a field untouched
    pub fn update_profile(
        &mut self,
        name: Option<String>,
        avatar_url: Option<String>,
        avatar_public_id: Option<String>,
    ) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(url) = avatar_url {
            self.avatar_url = Some(url);
        }
        if let Some(public_id) = avatar_public_id {
            self.avatar_public_id = Some(public_id);
        }
        self.updated_at = Utc::now();
    }
}
