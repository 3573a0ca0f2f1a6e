//! Outbound mail messages

use serde::{Deserialize, Serialize};

use crate::domain::entities::one_time_code::OtpPurpose;

/// A single plain-text message to one recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub text_body: String,
}

impl MailMessage {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, text_body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            text_body: text_body.into(),
        }
    }

    /// The message carrying a one-time code
    pub fn one_time_code(
        purpose: OtpPurpose,
        to: &str,
        name: &str,
        code: &str,
        expiration_minutes: i64,
    ) -> Self {
        let (subject, action) = match purpose {
            OtpPurpose::EmailVerification => ("Verify your email", "verify your email address"),
            OtpPurpose::PasswordReset => ("Reset your password", "reset your password"),
        };

        let body = format!(
            "Hi {},\n\nUse the code {} to {}. It expires in {} minutes.\n\n\
             If you did not request this, you can ignore this email.\n",
            name, code, action, expiration_minutes
        );

        Self::new(to, subject, body)
    }
}
