//! Tests for the profile service

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{InMemoryUserRepository, UserRepository};
use crate::services::profile::{ProfileService, ProfileUpdate};

async fn setup() -> (ProfileService<InMemoryUserRepository>, Uuid) {
    let repo = Arc::new(InMemoryUserRepository::new());
    let user = repo
        .save(User::new("Alice".into(), "alice@x.com".into(), "hash".into()))
        .await
        .unwrap();
    (ProfileService::new(repo), user.id)
}

#[tokio::test]
async fn test_get_profile() {
    let (service, id) = setup().await;
    let profile = service.get_profile(id).await.unwrap();
    assert_eq!(profile.name, "Alice");

    assert!(matches!(
        service.get_profile(Uuid::new_v4()).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_update_profile() {
    let (service, id) = setup().await;
    let profile = service
        .update_profile(
            id,
            ProfileUpdate {
                name: Some("  Alicia ".into()),
                avatar_url: Some("https://res.cdn.example/a.png".into()),
                avatar_public_id: Some("avatars/a".into()),
            },
        )
        .await
        .unwrap();

    assert_eq!(profile.name, "Alicia");
    assert_eq!(profile.avatar_url.as_deref(), Some("https://res.cdn.example/a.png"));

    // Empty update keeps everything
    let unchanged = service.update_profile(id, ProfileUpdate::default()).await.unwrap();
    assert_eq!(unchanged.name, "Alicia");
}

#[tokio::test]
async fn test_update_profile_validation() {
    let (service, id) = setup().await;

    assert!(matches!(
        service
            .update_profile(id, ProfileUpdate { name: Some("   ".into()), ..Default::default() })
            .await,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { .. }))
    ));
    assert!(matches!(
        service
            .update_profile(id, ProfileUpdate { avatar_url: Some("javascript:alert(1)".into()), ..Default::default() })
            .await,
        Err(DomainError::ValidationErr(ValidationError::InvalidFormat { .. }))
    ));
    assert!(matches!(
        service
            .update_profile(id, ProfileUpdate { name: Some("x".repeat(51)), ..Default::default() })
            .await,
        Err(DomainError::ValidationErr(ValidationError::TooLong { max: 50, .. }))
    ));
}
