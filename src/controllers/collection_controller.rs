//! Collection controller for Smartmark.
//!
//! Single source of truth for "what bookmarks does this user have right
//! now", and the only component that writes to the remote store. Remote
//! change notifications are invalidation signals: the controller answers
//! each one with a full reload and replaces the collection wholesale,
//! never patching it incrementally. Correctness over efficiency — bookmark
//! volumes are small, and stale or ghost entries cost more than an extra
//! round trip.

use tracing::debug;

use crate::store::RemoteStore;
use crate::types::bookmark::{Bookmark, BookmarkPatch, NewBookmark};
use crate::types::errors::{CollectionError, FetchError, ValidationError};
use crate::types::user::User;

use super::edit_session::EditSession;
use super::selection_model::SelectionModel;

/// Prefixes `https://` unless an `http://` or `https://` scheme is already
/// present. Idempotent; trims surrounding whitespace.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Outcome of a batch delete, reconciled against a fresh reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchDeleteReport {
    /// How many ids the caller asked to delete.
    pub requested: usize,
    /// Ids that still exist after the delete and reload.
    pub failed_ids: Vec<String>,
}

impl BatchDeleteReport {
    pub fn all_deleted(&self) -> bool {
        self.failed_ids.is_empty()
    }
}

/// Owns the materialized bookmark collection for one authenticated user,
/// together with its selection subset and edit session.
pub struct CollectionController<S> {
    store: S,
    user: User,
    bookmarks: Vec<Bookmark>,
    selection: SelectionModel,
    edit: EditSession,
}

impl<S: RemoteStore> CollectionController<S> {
    pub fn new(store: S, user: User) -> Self {
        Self {
            store,
            user,
            bookmarks: Vec::new(),
            selection: SelectionModel::new(),
            edit: EditSession::Closed,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Current materialized view, newest first.
    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn edit(&self) -> &EditSession {
        &self.edit
    }

    /// Ids of the current collection, in view order.
    pub fn ids(&self) -> Vec<String> {
        self.bookmarks.iter().map(|b| b.id.clone()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    fn contains(&self, id: &str) -> bool {
        self.bookmarks.iter().any(|b| b.id == id)
    }

    /// Re-fetches the collection and replaces it atomically.
    ///
    /// On failure the previous collection, selection, and edit state are
    /// all retained. On success the selection resets to empty and an edit
    /// session whose target vanished is closed, so both invariants hold
    /// against the new membership.
    pub async fn load(&mut self) -> Result<(), FetchError> {
        let mut rows = self.store.fetch_all(&self.user.id).await?;
        // The feed may fire for other users' rows; never trust the store
        // to have scoped the result.
        rows.retain(|b| b.user_id == self.user.id);
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        debug!(count = rows.len(), "collection reloaded");

        self.bookmarks = rows;
        self.selection.clear();
        if let Some(buf) = self.edit.buffer() {
            if !self.contains(&buf.target_id) {
                self.edit.cancel();
            }
        }
        Ok(())
    }

    /// Creates a bookmark owned by the session user.
    ///
    /// Validates locally, normalizes the url, and inserts. The collection
    /// is not touched here: the change feed notification triggers the
    /// reload that materializes the new row.
    pub async fn add(&mut self, title: &str, url: &str) -> Result<Bookmark, CollectionError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        let url = url.trim();
        if url.is_empty() {
            return Err(ValidationError::EmptyUrl.into());
        }

        let record = NewBookmark {
            title: title.to_string(),
            url: normalize_url(url),
            user_id: self.user.id.clone(),
        };
        let created = self.store.insert(record).await?;
        Ok(created)
    }

    /// Deletes one bookmark. Idempotent with respect to absence: deleting
    /// an id the store no longer holds is not a local error.
    ///
    /// The id is pruned from the selection immediately so the selection
    /// invariant holds before the feed-triggered reload lands.
    pub async fn remove(&mut self, id: &str) -> Result<(), CollectionError> {
        self.store.delete_by_id(id).await?;
        self.selection.remove(id);
        Ok(())
    }

    /// Deletes a batch of bookmarks. No-op on empty input.
    ///
    /// The selection is cleared unconditionally — batch-delete intent is
    /// spent once issued. The store's batch semantics are best-effort, so
    /// after the write the controller always reloads and diffs the
    /// requested ids against what remains, reporting survivors instead of
    /// silently assuming success.
    pub async fn remove_many(
        &mut self,
        ids: &[String],
    ) -> Result<BatchDeleteReport, CollectionError> {
        if ids.is_empty() {
            return Ok(BatchDeleteReport {
                requested: 0,
                failed_ids: Vec::new(),
            });
        }

        self.selection.clear();
        let outcome = self.store.delete_by_ids(ids).await;
        self.load().await?;
        outcome?;

        let failed_ids: Vec<String> = ids
            .iter()
            .filter(|id| self.contains(id.as_str()))
            .cloned()
            .collect();
        Ok(BatchDeleteReport {
            requested: ids.len(),
            failed_ids,
        })
    }

    /// Writes new title/url for the bookmark currently being edited.
    ///
    /// Preconditions: the edit session is open on `id`, and both fields
    /// are non-empty after trimming. The write is scoped to
    /// `(id, owner = session user)` as a defense-in-depth filter on top of
    /// whatever access policy the store enforces. On success the edit
    /// session closes and the collection reloads immediately — the
    /// controller does not assume the feed fires before the caller needs
    /// fresh data. On failure the buffer stays open for retry.
    pub async fn update(
        &mut self,
        id: &str,
        title: &str,
        url: &str,
    ) -> Result<(), CollectionError> {
        if !self.edit.is_editing(id) {
            return Err(CollectionError::NoEditTarget(id.to_string()));
        }
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        let url = url.trim();
        if url.is_empty() {
            return Err(ValidationError::EmptyUrl.into());
        }

        let patch = BookmarkPatch {
            title: title.to_string(),
            url: normalize_url(url),
        };
        self.store.update_by_id(id, &self.user.id, patch).await?;

        self.edit.cancel();
        self.load().await?;
        Ok(())
    }

    /// Opens an edit on a bookmark currently in the collection.
    /// Returns `false` (and leaves any open edit untouched) for unknown ids.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        match self.bookmarks.iter().find(|b| b.id == id) {
            Some(bookmark) => {
                let bookmark = bookmark.clone();
                self.edit.begin(&bookmark);
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit.cancel();
    }

    pub fn set_draft_title(&mut self, title: &str) {
        self.edit.set_title(title);
    }

    pub fn set_draft_url(&mut self, url: &str) {
        self.edit.set_url(url);
    }

    /// Commits the open edit by delegating to [`update`](Self::update).
    pub async fn commit_edit(&mut self) -> Result<(), CollectionError> {
        let buf = match self.edit.buffer() {
            Some(buf) => buf.clone(),
            None => return Err(CollectionError::NoEditTarget(String::new())),
        };
        self.update(&buf.target_id, &buf.title, &buf.url).await
    }

    /// Flips selection of `id`, guarded by current membership so the
    /// selection can never reference a bookmark outside the collection.
    pub fn toggle_selected(&mut self, id: &str) {
        if self.contains(id) {
            self.selection.toggle(id);
        } else {
            self.selection.remove(id);
        }
    }

    /// Select-all toggle over the current collection snapshot.
    pub fn toggle_select_all(&mut self) {
        let ids = self.ids();
        self.selection.toggle_all(&ids);
    }
}
