//! Unit tests for the scoped query builder and its predicate.

use chrono::{TimeZone, Utc};
use sessionhub_commons::{SessionId, SessionRecord, SessionStatus, UserId};
use sessionhub_core::filters::{parse_end_date, parse_start_date};
use sessionhub_core::{build_query, QueryScope, SessionFilters};

fn record(owner: &UserId, title: &str, status: SessionStatus) -> SessionRecord {
    let now = Utc::now();
    SessionRecord {
        id: SessionId::generate(),
        user_id: owner.clone(),
        title: title.to_string(),
        tags: vec![],
        content_url: "https://x/y.json".to_string(),
        status,
        created_at: now,
        updated_at: now,
    }
}

/// Public scope forces status=published even when the caller asks for drafts
#[test]
fn test_public_scope_never_matches_drafts() {
    let owner = UserId::generate();
    let draft = record(&owner, "Secret draft", SessionStatus::Draft);

    let filters = SessionFilters {
        status: Some(SessionStatus::Draft),
        ..SessionFilters::default()
    };
    let query = build_query(QueryScope::Public, &filters);

    assert_eq!(query.status, Some(SessionStatus::Published));
    assert!(!query.matches(&draft));
}

/// Public scope has no ownership term
#[test]
fn test_public_scope_matches_any_owner() {
    let query = build_query(QueryScope::Public, &SessionFilters::default());
    assert_eq!(query.owner_id, None);

    let published = record(&UserId::generate(), "Morning Yoga", SessionStatus::Published);
    assert!(query.matches(&published));
}

/// Owned scope forces the owner term and excludes other users' records
#[test]
fn test_owned_scope_restricts_owner() {
    let owner = UserId::generate();
    let other = UserId::generate();
    let query = build_query(QueryScope::Owned(owner.clone()), &SessionFilters::default());

    assert!(query.matches(&record(&owner, "Mine", SessionStatus::Draft)));
    assert!(query.matches(&record(&owner, "Mine too", SessionStatus::Published)));
    assert!(!query.matches(&record(&other, "Theirs", SessionStatus::Published)));
}

/// Owned scope honors a supplied status filter
#[test]
fn test_owned_scope_applies_status_filter() {
    let owner = UserId::generate();
    let filters = SessionFilters {
        status: Some(SessionStatus::Draft),
        ..SessionFilters::default()
    };
    let query = build_query(QueryScope::Owned(owner.clone()), &filters);

    assert!(query.matches(&record(&owner, "Draft", SessionStatus::Draft)));
    assert!(!query.matches(&record(&owner, "Live", SessionStatus::Published)));
}

/// Keyword matching is case-insensitive over title and content URL
#[test]
fn test_keyword_case_insensitive() {
    let owner = UserId::generate();
    let yoga = record(&owner, "Morning Yoga", SessionStatus::Published);

    for keyword in ["yoga", "YOGA", "Yoga"] {
        let filters = SessionFilters {
            keyword: Some(keyword.to_string()),
            ..SessionFilters::default()
        };
        let query = build_query(QueryScope::Public, &filters);
        assert!(query.matches(&yoga), "keyword {:?} should match", keyword);
    }

    let filters = SessionFilters {
        keyword: Some("meditation".to_string()),
        ..SessionFilters::default()
    };
    assert!(!build_query(QueryScope::Public, &filters).matches(&yoga));
}

/// Keyword also matches against the content URL
#[test]
fn test_keyword_matches_content_url() {
    let owner = UserId::generate();
    let mut rec = record(&owner, "Untitled", SessionStatus::Published);
    rec.content_url = "https://cdn.example.com/Flows/sunrise.json".to_string();

    let filters = SessionFilters {
        keyword: Some("flows".to_string()),
        ..SessionFilters::default()
    };
    assert!(build_query(QueryScope::Public, &filters).matches(&rec));
}

/// An empty keyword string is treated as not supplied
#[test]
fn test_empty_keyword_ignored() {
    let filters = SessionFilters {
        keyword: Some(String::new()),
        ..SessionFilters::default()
    };
    let query = build_query(QueryScope::Public, &filters);
    assert_eq!(query.keyword, None);
}

/// End date bound includes the whole calendar day
#[test]
fn test_end_date_inclusive_through_day() {
    let owner = UserId::generate();
    let filters = SessionFilters {
        end_date: Some(parse_end_date("2024-01-05").unwrap()),
        ..SessionFilters::default()
    };
    let query = build_query(QueryScope::Public, &filters);

    let mut last_second = record(&owner, "Late", SessionStatus::Published);
    last_second.created_at = Utc.with_ymd_and_hms(2024, 1, 5, 23, 59, 59).unwrap();
    assert!(query.matches(&last_second));

    let mut next_day = record(&owner, "Too late", SessionStatus::Published);
    next_day.created_at = Utc
        .with_ymd_and_hms(2024, 1, 6, 0, 0, 0)
        .unwrap()
        .checked_add_signed(chrono::Duration::milliseconds(1))
        .unwrap();
    assert!(!query.matches(&next_day));
}

/// Start date bound is inclusive at its literal instant
#[test]
fn test_start_date_inclusive_instant() {
    let owner = UserId::generate();
    let filters = SessionFilters {
        start_date: Some(parse_start_date("2024-01-05T10:00:00Z").unwrap()),
        ..SessionFilters::default()
    };
    let query = build_query(QueryScope::Public, &filters);

    let mut at_bound = record(&owner, "At bound", SessionStatus::Published);
    at_bound.created_at = Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap();
    assert!(query.matches(&at_bound));

    let mut before = record(&owner, "Before", SessionStatus::Published);
    before.created_at = Utc.with_ymd_and_hms(2024, 1, 5, 9, 59, 59).unwrap();
    assert!(!query.matches(&before));
}

/// Both bounds supplied restrict to the window
#[test]
fn test_date_window() {
    let owner = UserId::generate();
    let filters = SessionFilters {
        start_date: Some(parse_start_date("2024-01-01").unwrap()),
        end_date: Some(parse_end_date("2024-01-31").unwrap()),
        ..SessionFilters::default()
    };
    let query = build_query(QueryScope::Public, &filters);

    let mut inside = record(&owner, "Inside", SessionStatus::Published);
    inside.created_at = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    assert!(query.matches(&inside));

    let mut outside = record(&owner, "Outside", SessionStatus::Published);
    outside.created_at = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
    assert!(!query.matches(&outside));
}
