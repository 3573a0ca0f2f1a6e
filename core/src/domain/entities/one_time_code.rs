//! One-time code slots for email verification and password reset.

use chrono::{DateTime, Duration, TimeZone, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};

/// Length of a one-time code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for one-time codes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// What a one-time code proves control of the mailbox for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtpPurpose {
    /// Confirms the address given at registration
    EmailVerification,
    /// Authorizes a password change
    PasswordReset,
}

impl OtpPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            OtpPurpose::EmailVerification => "email_verification",
            OtpPurpose::PasswordReset => "password_reset",
        }
    }
}

impl std::fmt::Display for OtpPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pending code and the instant it stops being accepted
///
/// A user record holds one `Option<OneTimeCode>` per purpose, so a slot is
/// either empty or carries both a code and its expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneTimeCode {
    code: String,
    expires_at: DateTime<Utc>,
}

impl OneTimeCode {
    /// Generate a fresh 6-digit code from the OS CSPRNG
    pub fn generate(ttl: Duration) -> Self {
        let value: u32 = OsRng.gen_range(0..1_000_000);
        Self {
            code: format!("{:06}", value),
            expires_at: Utc::now() + ttl,
        }
    }

    /// Rebuild a code from its stored parts
    pub fn from_parts(code: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            code: code.into(),
            expires_at,
        }
    }

    /// Rebuild a slot from its persisted columns
    ///
    /// A missing code, an empty code or a zero expiry all mean "no code pending".
    pub fn from_storage(code: Option<String>, expires_at_millis: i64) -> Option<Self> {
        match code {
            Some(code) if !code.is_empty() && expires_at_millis > 0 => {
                let expires_at = Utc.timestamp_millis_opt(expires_at_millis).single()?;
                Some(Self { code, expires_at })
            }
            _ => None,
        }
    }

    /// Split a slot into its persisted columns (`None`, 0 when empty)
    pub fn to_storage(slot: Option<&OneTimeCode>) -> (Option<String>, i64) {
        match slot {
            Some(otp) => (Some(otp.code.clone()), otp.expires_at_millis()),
            None => (None, 0),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Expiry as epoch milliseconds
    pub fn expires_at_millis(&self) -> i64 {
        self.expires_at.timestamp_millis()
    }

    /// A code is accepted strictly before its expiry instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Compare a submitted code in constant time
    pub fn matches(&self, candidate: &str) -> bool {
        let candidate = candidate.trim();
        if candidate.len() != self.code.len() {
            return false;
        }
        constant_time_eq(self.code.as_bytes(), candidate.as_bytes())
    }
}
