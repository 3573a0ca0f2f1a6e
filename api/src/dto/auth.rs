use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use scribe_core::domain::value_objects::UserProfile;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "Name is required (at most 50 characters)"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "A valid email is required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user_id: Uuid,
    pub email: String,
}

/// Body of POST /api/auth/send-verify-otp; the session is used when absent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SendVerifyOtpRequest {
    pub user_id: Option<Uuid>,
}

/// The code is checked by the OTP service only, so a malformed guess
/// consumes the pending code like any other wrong guess
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    pub user_id: Uuid,

    #[serde(default)]
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendResetOtpRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[serde(default)]
    pub otp: String,

    #[serde(default)]
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpSentResponse {
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

/// Body of every response that opens a session; the token itself is only
/// set as a cookie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user: UserProfile,
    pub expires_in: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: UserProfile,
}
