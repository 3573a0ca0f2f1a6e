//! Result of a successful sign-in.

use super::user_profile::UserProfile;

/// A freshly minted session
///
/// The token goes into the session cookie; only `user` is echoed in the
/// response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    /// Signed session JWT
    pub token: String,

    /// Token lifetime in seconds
    pub expires_in: i64,

    /// The signed-in user's profile
    pub user: UserProfile,
}
