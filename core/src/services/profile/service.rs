//! Profile service for reading and editing the caller's own profile

use std::sync::Arc;
use uuid::Uuid;

use scribe_shared::utils::validation::validators;

use crate::domain::value_objects::UserProfile;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;

/// Maximum display name length
const MAX_NAME_LENGTH: usize = 50;

/// Profile changes; `None` leaves a field as it is
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    /// Media provider asset id, stored without validation
    pub avatar_public_id: Option<String>,
}

pub struct ProfileService<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> ProfileService<U> {
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    pub async fn get_profile(&self, user_id: Uuid) -> DomainResult<UserProfile> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .map(|user| UserProfile::from(&user))
            .ok_or_else(|| DomainError::not_found("user"))
    }

    pub async fn update_profile(&self, user_id: Uuid, update: ProfileUpdate) -> DomainResult<UserProfile> {
        let name = match update.name {
            Some(name) => {
                let name = name.trim().to_string();
                if !validators::not_blank(&name) {
                    return Err(ValidationError::RequiredField { field: "name".into() }.into());
                }
                if !validators::length_between(&name, 1, MAX_NAME_LENGTH) {
                    return Err(ValidationError::TooLong {
                        field: "name".into(),
                        max: MAX_NAME_LENGTH,
                    }
                    .into());
                }
                Some(name)
            }
            None => None,
        };

        if let Some(url) = &update.avatar_url {
            if !validators::is_valid_url(url) {
                return Err(ValidationError::InvalidFormat {
                    field: "avatar_url".into(),
                }
                .into());
            }
        }

        let mut user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("user"))?;

        user.update_profile(name, update.avatar_url, update.avatar_public_id);
        let user = self.user_repository.save(user).await?;

        tracing::info!(user_id = %user.id, event = "profile_updated", "Profile updated");
        Ok(UserProfile::from(&user))
    }
}
