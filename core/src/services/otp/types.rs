//! Types for OTP lifecycle results

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of issuing a one-time code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtpDispatch {
    /// When the new code stops being accepted
    pub expires_at: DateTime<Utc>,
    /// Provider message id of the delivered email
    #[serde(skip)]
    pub message_id: String,
}
