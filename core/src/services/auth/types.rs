//! Types for authentication results

use serde::Serialize;
use uuid::Uuid;

/// Outcome of a registration request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationOutcome {
    pub user_id: Uuid,
    pub email: String,
    /// `false` when an unverified account already existed and only the
    /// verification code was re-sent
    #[serde(skip)]
    pub created: bool,
}
