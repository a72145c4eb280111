//! Integration tests for the session lifecycle manager over the in-memory
//! store.

use std::sync::Arc;

use sessionhub_commons::{SessionId, SessionStatus, UserId};
use sessionhub_core::{CoreError, DraftInput, SessionFilters, SessionService, StoreSessionRepository};
use sessionhub_store::MemoryBackend;

fn service() -> SessionService {
    let backend = Arc::new(MemoryBackend::new());
    SessionService::new(Arc::new(StoreSessionRepository::new(backend)))
}

fn draft_input(title: &str, url: &str) -> DraftInput {
    DraftInput {
        id: None,
        title: Some(title.to_string()),
        tags: None,
        content_url: Some(url.to_string()),
    }
}

/// Creating a draft sets status=draft and the owner
#[tokio::test]
async fn test_create_draft() {
    let service = service();
    let owner = UserId::generate();

    let saved = service
        .save_draft(&owner, draft_input("T", "https://x/y.json"))
        .await
        .unwrap();

    assert!(saved.created);
    assert_eq!(saved.record.status, SessionStatus::Draft);
    assert_eq!(saved.record.user_id, owner);
    assert_eq!(saved.record.title, "T");
    assert_eq!(saved.record.created_at, saved.record.updated_at);
}

/// Create requires title and content_url; all violations are reported
#[tokio::test]
async fn test_create_draft_validation_aggregates() {
    let service = service();
    let owner = UserId::generate();

    let err = service
        .save_draft(&owner, DraftInput::default())
        .await
        .unwrap_err();

    match err {
        CoreError::Validation(violations) => {
            assert_eq!(violations.len(), 2, "both missing fields reported");
        }
        other => panic!("expected Validation, got {:?}", other),
    }
}

/// Bad content URL scheme is rejected on create
#[tokio::test]
async fn test_create_draft_rejects_bad_url() {
    let service = service();
    let owner = UserId::generate();

    let err = service
        .save_draft(&owner, draft_input("T", "file:///etc/passwd"))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));
}

/// Patch overwrites only supplied non-empty fields
#[tokio::test]
async fn test_update_draft_partial_patch() {
    let service = service();
    let owner = UserId::generate();
    let created = service
        .save_draft(&owner, draft_input("Original", "https://x/a.json"))
        .await
        .unwrap();

    let patched = service
        .save_draft(
            &owner,
            DraftInput {
                id: Some(created.record.id.clone()),
                title: Some("Renamed".to_string()),
                tags: None,
                content_url: Some(String::new()), // empty means "leave as is"
            },
        )
        .await
        .unwrap();

    assert!(!patched.created);
    assert_eq!(patched.record.title, "Renamed");
    assert_eq!(patched.record.content_url, "https://x/a.json");
    assert_eq!(patched.record.created_at, created.record.created_at);
}

/// Patching a published record silently demotes it back to draft
#[tokio::test]
async fn test_update_demotes_published_to_draft() {
    let service = service();
    let owner = UserId::generate();
    let created = service
        .save_draft(&owner, draft_input("T", "https://x/y.json"))
        .await
        .unwrap();
    let published = service.publish(&owner, &created.record.id).await.unwrap();
    assert_eq!(published.status, SessionStatus::Published);

    let saved = service
        .save_draft(
            &owner,
            DraftInput {
                id: Some(created.record.id.clone()),
                title: Some("Edited".to_string()),
                ..DraftInput::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(saved.record.status, SessionStatus::Draft);
}

/// Patching someone else's record fails NotFound, same as a missing id
#[tokio::test]
async fn test_update_not_owned_is_not_found() {
    let service = service();
    let owner = UserId::generate();
    let intruder = UserId::generate();
    let created = service
        .save_draft(&owner, draft_input("T", "https://x/y.json"))
        .await
        .unwrap();

    let err = service
        .save_draft(
            &intruder,
            DraftInput {
                id: Some(created.record.id.clone()),
                title: Some("Hijack".to_string()),
                ..DraftInput::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::NotFound));

    let err = service
        .save_draft(
            &owner,
            DraftInput {
                id: Some(SessionId::generate()),
                title: Some("Ghost".to_string()),
                ..DraftInput::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::NotFound));
}

/// Publish succeeds once, then fails NotFound (idempotence-resistant)
#[tokio::test]
async fn test_publish_twice() {
    let service = service();
    let owner = UserId::generate();
    let created = service
        .save_draft(&owner, draft_input("T", "https://x/y.json"))
        .await
        .unwrap();

    let published = service.publish(&owner, &created.record.id).await.unwrap();
    assert_eq!(published.status, SessionStatus::Published);

    let err = service
        .publish(&owner, &created.record.id)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::NotFound));
}

/// Publishing a record owned by someone else fails NotFound
#[tokio::test]
async fn test_publish_not_owned() {
    let service = service();
    let owner = UserId::generate();
    let intruder = UserId::generate();
    let created = service
        .save_draft(&owner, draft_input("T", "https://x/y.json"))
        .await
        .unwrap();

    let err = service
        .publish(&intruder, &created.record.id)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::NotFound));
}

/// get_owned conflates non-existence and non-ownership
#[tokio::test]
async fn test_get_owned_cross_user() {
    let service = service();
    let owner = UserId::generate();
    let other = UserId::generate();
    let created = service
        .save_draft(&owner, draft_input("T", "https://x/y.json"))
        .await
        .unwrap();

    let mine = service.get_owned(&owner, &created.record.id).await.unwrap();
    assert_eq!(mine.id, created.record.id);

    let err = service
        .get_owned(&other, &created.record.id)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::NotFound));
}

/// Public listing excludes drafts; owned listing includes them
#[tokio::test]
async fn test_listing_scopes() {
    let service = service();
    let owner = UserId::generate();
    let stranger = UserId::generate();

    let draft = service
        .save_draft(&owner, draft_input("My draft", "https://x/d.json"))
        .await
        .unwrap();
    let to_publish = service
        .save_draft(&owner, draft_input("My public", "https://x/p.json"))
        .await
        .unwrap();
    service.publish(&owner, &to_publish.record.id).await.unwrap();
    service
        .save_draft(&stranger, draft_input("Their draft", "https://x/s.json"))
        .await
        .unwrap();

    let public = service.list_public(&SessionFilters::default()).await.unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].id, to_publish.record.id);

    let owned = service
        .list_owned(&owner, &SessionFilters::default())
        .await
        .unwrap();
    assert_eq!(owned.len(), 2);
    assert!(owned.iter().any(|r| r.id == draft.record.id));
    assert!(owned.iter().all(|r| r.user_id == owner));
}

/// Owned listing honors the status filter
#[tokio::test]
async fn test_list_owned_status_filter() {
    let service = service();
    let owner = UserId::generate();

    service
        .save_draft(&owner, draft_input("Draft", "https://x/d.json"))
        .await
        .unwrap();
    let to_publish = service
        .save_draft(&owner, draft_input("Live", "https://x/p.json"))
        .await
        .unwrap();
    service.publish(&owner, &to_publish.record.id).await.unwrap();

    let drafts = service
        .list_owned(
            &owner,
            &SessionFilters {
                status: Some(SessionStatus::Draft),
                ..SessionFilters::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].title, "Draft");
}
