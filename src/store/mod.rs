//! Remote store and change feed seams for Smartmark.
//!
//! The collection controller talks to the authoritative store only through
//! [`RemoteStore`], and learns about remote changes only through
//! [`ChangeFeed`]. Notifications carry no payload — they are invalidation
//! tokens, and the controller answers every one with a full reload.

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::types::bookmark::{Bookmark, BookmarkPatch, NewBookmark};
use crate::types::errors::{FetchError, WriteError};

pub mod memory;
pub mod rest;

/// Trait defining the authoritative bookmark store.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetches all bookmarks owned by `owner_id`, newest first.
    async fn fetch_all(&self, owner_id: &str) -> Result<Vec<Bookmark>, FetchError>;

    /// Inserts a new bookmark and returns the created record
    /// (id and timestamp assigned by the store).
    async fn insert(&self, record: NewBookmark) -> Result<Bookmark, WriteError>;

    /// Updates the mutable fields of one bookmark, scoped to `(id, owner_id)`.
    /// A write that matches no row succeeds without effect.
    async fn update_by_id(
        &self,
        id: &str,
        owner_id: &str,
        patch: BookmarkPatch,
    ) -> Result<(), WriteError>;

    /// Deletes one bookmark by id. Idempotent on absence.
    async fn delete_by_id(&self, id: &str) -> Result<(), WriteError>;

    /// Deletes a batch of bookmarks by id. Best-effort: partial-failure
    /// semantics are store-defined, callers reconcile by reloading.
    async fn delete_by_ids(&self, ids: &[String]) -> Result<(), WriteError>;
}

/// Trait defining the push channel for remote change notifications.
pub trait ChangeFeed {
    /// Subscribes to the feed. The subscription only observes changes
    /// published after this call; dropping it unsubscribes.
    fn subscribe(&self) -> ChangeSubscription;
}

/// A live subscription to a [`ChangeFeed`].
///
/// Each received notification means "the collection may have changed,
/// re-fetch". A lagged receiver collapses the missed notifications into
/// one, which is safe because a single full reload reconciles everything.
pub struct ChangeSubscription {
    rx: broadcast::Receiver<()>,
}

impl ChangeSubscription {
    /// Wraps a broadcast receiver as a subscription. Feed implementations
    /// outside this crate build their subscriptions through this.
    pub fn new(rx: broadcast::Receiver<()>) -> Self {
        Self { rx }
    }

    /// Waits for the next change notification.
    /// Returns `false` once the feed is closed.
    pub async fn changed(&mut self) -> bool {
        match self.rx.recv().await {
            Ok(()) => true,
            Err(broadcast::error::RecvError::Lagged(_)) => true,
            Err(broadcast::error::RecvError::Closed) => false,
        }
    }

    /// Consumes one queued notification without waiting.
    /// Returns `false` when no notification is pending.
    pub fn try_changed(&mut self) -> bool {
        match self.rx.try_recv() {
            Ok(()) => true,
            Err(broadcast::error::TryRecvError::Lagged(_)) => true,
            Err(broadcast::error::TryRecvError::Empty) => false,
            Err(broadcast::error::TryRecvError::Closed) => false,
        }
    }
}
