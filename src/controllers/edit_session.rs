//! Exclusive single-item edit workflow.
//!
//! The edit state is a tagged variant rather than nullable fields, so
//! "at most one edit in flight" is structural. State machine:
//! Closed → Open (on begin) → Closed (on cancel or successful commit).

use crate::types::bookmark::Bookmark;

/// Working draft for one bookmark edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub target_id: String,
    pub title: String,
    pub url: String,
}

/// Single-slot edit session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Closed,
    Open(EditBuffer),
}

impl EditSession {
    /// Opens an edit seeded with the target's current title and url.
    /// Starting a new edit while one is open silently replaces it.
    pub fn begin(&mut self, bookmark: &Bookmark) {
        *self = EditSession::Open(EditBuffer {
            target_id: bookmark.id.clone(),
            title: bookmark.title.clone(),
            url: bookmark.url.clone(),
        });
    }

    /// Discards the buffer without writing.
    pub fn cancel(&mut self) {
        *self = EditSession::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, EditSession::Open(_))
    }

    /// Whether an edit is open on the given bookmark.
    pub fn is_editing(&self, id: &str) -> bool {
        matches!(self, EditSession::Open(buf) if buf.target_id == id)
    }

    pub fn buffer(&self) -> Option<&EditBuffer> {
        match self {
            EditSession::Open(buf) => Some(buf),
            EditSession::Closed => None,
        }
    }

    /// Updates the draft title. No-op while closed.
    pub fn set_title(&mut self, title: &str) {
        if let EditSession::Open(buf) = self {
            buf.title = title.to_string();
        }
    }

    /// Updates the draft url. No-op while closed.
    pub fn set_url(&mut self, url: &str) {
        if let EditSession::Open(buf) = self {
            buf.url = url.to_string();
        }
    }
}
