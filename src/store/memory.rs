//! In-process bookmark store for Smartmark.
//!
//! Implements both [`RemoteStore`] and [`ChangeFeed`] over a shared row
//! vector. Cloning a `MemoryStore` yields another handle onto the same
//! rows and the same feed, so several sessions can share one store — the
//! multi-client setup used by tests and the demo binary.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::types::bookmark::{Bookmark, BookmarkPatch, NewBookmark};
use crate::types::errors::{FetchError, WriteError};

use super::{ChangeFeed, ChangeSubscription, RemoteStore};

const FEED_CAPACITY: usize = 64;

/// Shared in-memory bookmark store with a built-in change feed.
#[derive(Clone)]
pub struct MemoryStore {
    rows: Arc<Mutex<Vec<Bookmark>>>,
    clock: Arc<AtomicI64>,
    notify: broadcast::Sender<()>,
}

impl MemoryStore {
    pub fn new() -> Self {
        let base = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64;
        let (notify, _) = broadcast::channel(FEED_CAPACITY);
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
            clock: Arc::new(AtomicI64::new(base)),
            notify,
        }
    }

    /// Returns a strictly increasing timestamp, so `created_at` is a
    /// total order per store.
    fn next_timestamp(&self) -> i64 {
        self.clock.fetch_add(1, Ordering::SeqCst)
    }

    /// Publishes one change notification. Send errors mean no subscriber
    /// is listening, which is fine.
    fn publish(&self) {
        let _ = self.notify.send(());
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    async fn fetch_all(&self, owner_id: &str) -> Result<Vec<Bookmark>, FetchError> {
        let rows = self
            .rows
            .lock()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let mut owned: Vec<Bookmark> = rows
            .iter()
            .filter(|b| b.user_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn insert(&self, record: NewBookmark) -> Result<Bookmark, WriteError> {
        let bookmark = Bookmark {
            id: Uuid::new_v4().to_string(),
            title: record.title,
            url: record.url,
            user_id: record.user_id,
            created_at: self.next_timestamp(),
        };
        {
            let mut rows = self
                .rows
                .lock()
                .map_err(|e| WriteError::Transport(e.to_string()))?;
            rows.push(bookmark.clone());
        }
        self.publish();
        Ok(bookmark)
    }

    async fn update_by_id(
        &self,
        id: &str,
        owner_id: &str,
        patch: BookmarkPatch,
    ) -> Result<(), WriteError> {
        let modified = {
            let mut rows = self
                .rows
                .lock()
                .map_err(|e| WriteError::Transport(e.to_string()))?;
            match rows
                .iter_mut()
                .find(|b| b.id == id && b.user_id == owner_id)
            {
                Some(row) => {
                    row.title = patch.title;
                    row.url = patch.url;
                    true
                }
                // Owner filter matched nothing: not an error, just no-op.
                None => false,
            }
        };
        if modified {
            self.publish();
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), WriteError> {
        let removed = {
            let mut rows = self
                .rows
                .lock()
                .map_err(|e| WriteError::Transport(e.to_string()))?;
            let before = rows.len();
            rows.retain(|b| b.id != id);
            rows.len() != before
        };
        if removed {
            self.publish();
        }
        Ok(())
    }

    async fn delete_by_ids(&self, ids: &[String]) -> Result<(), WriteError> {
        if ids.is_empty() {
            return Ok(());
        }
        let removed = {
            let mut rows = self
                .rows
                .lock()
                .map_err(|e| WriteError::Transport(e.to_string()))?;
            let before = rows.len();
            rows.retain(|b| !ids.contains(&b.id));
            rows.len() != before
        };
        if removed {
            self.publish();
        }
        Ok(())
    }
}

impl ChangeFeed for MemoryStore {
    fn subscribe(&self) -> ChangeSubscription {
        ChangeSubscription::new(self.notify.subscribe())
    }
}
