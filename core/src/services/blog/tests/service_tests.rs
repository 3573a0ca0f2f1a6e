//! Tests for the blog service

use std::sync::Arc;
use uuid::Uuid;

use scribe_shared::types::Pagination;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{InMemoryBlogRepository, InMemoryUserRepository, UserRepository};
use crate::services::blog::{BlogPatch, BlogService, NewBlog};

type Service = BlogService<InMemoryBlogRepository, InMemoryUserRepository>;

async fn setup() -> (Service, Uuid, Uuid) {
    let users = Arc::new(InMemoryUserRepository::new());
    let alice = users
        .save(User::new("Alice".into(), "alice@x.com".into(), "hash".into()))
        .await
        .unwrap();
    let bob = users
        .save(User::new("Bob".into(), "bob@x.com".into(), "hash".into()))
        .await
        .unwrap();
    let service = BlogService::new(Arc::new(InMemoryBlogRepository::new()), users);
    (service, alice.id, bob.id)
}

fn new_blog(title: &str, published: bool) -> NewBlog {
    NewBlog {
        title: title.to_string(),
        summary: Some("A short summary".into()),
        content: serde_json::json!({"type": "doc", "content": []}),
        cover_image_url: None,
        cover_image_public_id: None,
        tags: vec!["rust".into(), " web ".into(), "rust".into()],
        is_published: published,
    }
}

#[tokio::test]
async fn test_create_derives_slug_and_author() {
    let (service, alice, _) = setup().await;
    let view = service.create(alice, new_blog("Hello, World!", true)).await.unwrap();

    assert_eq!(view.slug, "hello-world");
    assert_eq!(view.tags, vec!["rust".to_string(), "web".to_string()]);
    let author = view.author.unwrap();
    assert_eq!(author.id, alice);
    assert_eq!(author.name, "Alice");
}

#[tokio::test]
async fn test_create_validation_and_conflict() {
    let (service, alice, bob) = setup().await;

    assert!(matches!(
        service.create(alice, new_blog("   ", true)).await,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { .. }))
    ));
    assert!(matches!(
        service.create(alice, new_blog("???", true)).await,
        Err(DomainError::ValidationErr(ValidationError::InvalidFormat { .. }))
    ));

    let mut no_content = new_blog("No content", true);
    no_content.content = serde_json::Value::Null;
    assert!(matches!(
        service.create(alice, no_content).await,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { field })) if field == "content"
    ));

    service.create(alice, new_blog("Same Title", true)).await.unwrap();
    assert!(matches!(
        service.create(bob, new_blog("same title", true)).await,
        Err(DomainError::Conflict { .. })
    ));
}

#[tokio::test]
async fn test_drafts_are_visible_to_author_only() {
    let (service, alice, bob) = setup().await;
    service.create(alice, new_blog("Secret Draft", false)).await.unwrap();

    assert!(service.get_by_slug("secret-draft", Some(alice)).await.is_ok());
    assert!(matches!(
        service.get_by_slug("secret-draft", Some(bob)).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        service.get_by_slug("secret-draft", None).await,
        Err(DomainError::NotFound { .. })
    ));

    let published = service.list_published(Pagination::default()).await.unwrap();
    assert_eq!(published.total, 0);

    let mine = service.list_by_author(alice).await.unwrap();
    assert_eq!(mine.len(), 1);
}

#[tokio::test]
async fn test_list_published_paginates() {
    let (service, alice, bob) = setup().await;
    for i in 0..3 {
        service.create(alice, new_blog(&format!("Alice post {}", i), true)).await.unwrap();
    }
    service.create(bob, new_blog("Bob post", true)).await.unwrap();

    let page = service.list_published(Pagination::new(1, 3)).await.unwrap();
    assert_eq!(page.total, 4);
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.total_pages, 2);
    assert!(page.has_next);
    assert!(page.items.iter().all(|b| b.author.is_some()));
}

#[tokio::test]
async fn test_update_by_author_renames_slug() {
    let (service, alice, _) = setup().await;
    let view = service.create(alice, new_blog("First Title", false)).await.unwrap();

    let updated = service
        .update(
            view.id,
            alice,
            BlogPatch {
                title: Some("Second Title".into()),
                is_published: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.slug, "second-title");
    assert!(updated.is_published);
    assert_eq!(updated.summary.as_deref(), Some("A short summary"));
    assert!(service.get_by_slug("second-title", None).await.is_ok());
}

#[tokio::test]
async fn test_update_and_delete_ownership() {
    let (service, alice, bob) = setup().await;
    let view = service.create(alice, new_blog("Owned", true)).await.unwrap();

    assert!(matches!(
        service.update(view.id, bob, BlogPatch::default()).await,
        Err(DomainError::Forbidden)
    ));
    assert!(matches!(service.delete(view.id, bob).await, Err(DomainError::Forbidden)));
    assert!(matches!(
        service.update(Uuid::new_v4(), alice, BlogPatch::default()).await,
        Err(DomainError::NotFound { .. })
    ));

    service.delete(view.id, alice).await.unwrap();
    assert!(matches!(
        service.delete(view.id, alice).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_update_to_taken_title_conflicts() {
    let (service, alice, _) = setup().await;
    service.create(alice, new_blog("Taken", true)).await.unwrap();
    let other = service.create(alice, new_blog("Free", true)).await.unwrap();

    assert!(matches!(
        service
            .update(other.id, alice, BlogPatch { title: Some("Taken".into()), ..Default::default() })
            .await,
        Err(DomainError::Conflict { .. })
    ));
}

#[tokio::test]
async fn test_reserved_slug_is_rejected() {
    let (service, alice, _) = setup().await;

    assert!(matches!(
        service.create(alice, new_blog("Mine", true)).await,
        Err(DomainError::ValidationErr(ValidationError::Reserved { field })) if field == "title"
    ));

    let view = service.create(alice, new_blog("Mine and yours", true)).await.unwrap();
    assert_eq!(view.slug, "mine-and-yours");
    assert!(matches!(
        service
            .update(
                view.id,
                alice,
                BlogPatch {
                    title: Some("MINE!".into()),
                    ..Default::default()
                },
            )
            .await,
        Err(DomainError::ValidationErr(ValidationError::Reserved { .. }))
    ));
}
