//! Public projections of a user record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::User;

/// The caller's own profile
///
/// Password hash and one-time codes never leave the credential record; this
/// is the only shape in which a user is returned to a client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub is_verified: bool,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            is_verified: user.is_verified,
            avatar_url: user.avatar_url.clone(),
            created_at: user.created_at,
        }
    }
}

/// Author byline shown on blog posts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthorSummary {
    pub id: Uuid,
    pub name: String,
    pub avatar_url: Option<String>,
}

impl From<&User> for AuthorSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            avatar_url: user.avatar_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::one_time_code::{OneTimeCode, OtpPurpose};

    #[test]
    fn test_profile_never_serializes_secrets() {
        let mut user = User::new("Alice".into(), "alice@x.com".into(), "$2b$04$secret-hash".into());
        user.set_otp(
            OtpPurpose::EmailVerification,
            OneTimeCode::from_parts("123456", Utc::now()),
        );

        let json = serde_json::to_string(&UserProfile::from(&user)).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(!json.contains("123456"));
        assert!(!json.contains("password"));
        assert!(!json.contains("otp"));
        assert!(json.contains("\"email\":\"alice@x.com\""));
    }

    #[test]
    fn test_author_summary_hides_email() {
        let user = User::new("Alice".into(), "alice@x.com".into(), "hash".into());
        let json = serde_json::to_value(AuthorSummary::from(&user)).unwrap();
        assert!(json.get("email").is_none());
        assert_eq!(json["name"], "Alice");
    }
}
