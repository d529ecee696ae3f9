//! Unit tests for the in-memory store: owner scoping, ordering,
//! idempotent deletes, and change-feed publication.

use smartmark::store::memory::MemoryStore;
use smartmark::store::{ChangeFeed, RemoteStore};
use smartmark::types::bookmark::{BookmarkPatch, NewBookmark};

fn record(title: &str, url: &str, user_id: &str) -> NewBookmark {
    NewBookmark {
        title: title.to_string(),
        url: url.to_string(),
        user_id: user_id.to_string(),
    }
}

#[tokio::test]
async fn test_insert_assigns_id_and_increasing_timestamps() {
    let store = MemoryStore::new();
    let a = store.insert(record("A", "https://a.com", "u1")).await.unwrap();
    let b = store.insert(record("B", "https://b.com", "u1")).await.unwrap();

    assert!(!a.id.is_empty());
    assert_ne!(a.id, b.id);
    assert!(b.created_at > a.created_at);
}

#[tokio::test]
async fn test_fetch_all_scopes_by_owner_and_sorts_newest_first() {
    let store = MemoryStore::new();
    store.insert(record("Mine 1", "https://a.com", "u1")).await.unwrap();
    store.insert(record("Theirs", "https://x.com", "u2")).await.unwrap();
    store.insert(record("Mine 2", "https://b.com", "u1")).await.unwrap();

    let mine = store.fetch_all("u1").await.unwrap();
    assert_eq!(mine.len(), 2);
    assert_eq!(mine[0].title, "Mine 2");
    assert_eq!(mine[1].title, "Mine 1");
    assert!(mine.iter().all(|b| b.user_id == "u1"));
}

/// The owner filter on update is mandatory: a matching id with a
/// different owner must be left untouched.
#[tokio::test]
async fn test_update_by_id_enforces_owner_filter() {
    let store = MemoryStore::new();
    let theirs = store.insert(record("Theirs", "https://x.com", "u2")).await.unwrap();

    let patch = BookmarkPatch {
        title: "Hijacked".to_string(),
        url: "https://evil.com".to_string(),
    };
    store.update_by_id(&theirs.id, "u1", patch).await.unwrap();

    let rows = store.fetch_all("u2").await.unwrap();
    assert_eq!(rows[0].title, "Theirs");
    assert_eq!(rows[0].url, "https://x.com");
}

#[tokio::test]
async fn test_update_by_id_rewrites_mutable_fields_only() {
    let store = MemoryStore::new();
    let mine = store.insert(record("Old", "https://old.com", "u1")).await.unwrap();

    let patch = BookmarkPatch {
        title: "New".to_string(),
        url: "https://new.com".to_string(),
    };
    store.update_by_id(&mine.id, "u1", patch).await.unwrap();

    let rows = store.fetch_all("u1").await.unwrap();
    assert_eq!(rows[0].title, "New");
    assert_eq!(rows[0].url, "https://new.com");
    assert_eq!(rows[0].id, mine.id);
    assert_eq!(rows[0].created_at, mine.created_at);
}

#[tokio::test]
async fn test_delete_by_id_is_idempotent_on_absence() {
    let store = MemoryStore::new();
    let a = store.insert(record("A", "https://a.com", "u1")).await.unwrap();

    store.delete_by_id(&a.id).await.unwrap();
    store.delete_by_id(&a.id).await.unwrap();
    store.delete_by_id("never-existed").await.unwrap();

    assert!(store.fetch_all("u1").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_by_ids_removes_batch() {
    let store = MemoryStore::new();
    let a = store.insert(record("A", "https://a.com", "u1")).await.unwrap();
    let b = store.insert(record("B", "https://b.com", "u1")).await.unwrap();
    let c = store.insert(record("C", "https://c.com", "u1")).await.unwrap();

    store.delete_by_ids(&[a.id, c.id]).await.unwrap();

    let rows = store.fetch_all("u1").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, b.id);
}

/// Every effective write publishes exactly one payload-free notification.
#[tokio::test]
async fn test_feed_fires_on_each_effective_write() {
    let store = MemoryStore::new();
    let mut sub = store.subscribe();

    let a = store.insert(record("A", "https://a.com", "u1")).await.unwrap();
    assert!(sub.try_changed());
    assert!(!sub.try_changed());

    let patch = BookmarkPatch {
        title: "A2".to_string(),
        url: "https://a.com".to_string(),
    };
    store.update_by_id(&a.id, "u1", patch).await.unwrap();
    assert!(sub.try_changed());

    store.delete_by_id(&a.id).await.unwrap();
    assert!(sub.try_changed());
    assert!(!sub.try_changed());
}

/// Writes that match no row do not ring the feed.
#[tokio::test]
async fn test_ineffective_writes_do_not_notify() {
    let store = MemoryStore::new();
    let a = store.insert(record("A", "https://a.com", "u1")).await.unwrap();
    let mut sub = store.subscribe();

    let patch = BookmarkPatch {
        title: "X".to_string(),
        url: "https://x.com".to_string(),
    };
    // Wrong owner: no row matched, no notification.
    store.update_by_id(&a.id, "u2", patch).await.unwrap();
    assert!(!sub.try_changed());

    store.delete_by_id("missing").await.unwrap();
    assert!(!sub.try_changed());

    store.delete_by_ids(&[]).await.unwrap();
    assert!(!sub.try_changed());
}

/// The feed fires for any owner's rows; scoping happens at reload time.
#[tokio::test]
async fn test_feed_fires_for_other_owners_rows() {
    let store = MemoryStore::new();
    let mut sub = store.subscribe();

    store.insert(record("Theirs", "https://x.com", "u2")).await.unwrap();
    assert!(sub.try_changed());
}
