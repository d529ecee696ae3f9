use serde::{Deserialize, Serialize};

/// A saved bookmark as materialized from the remote store.
///
/// `id` and `created_at` are assigned by the store on insert and never
/// change afterwards; only `title` and `url` are mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    pub user_id: String,
    pub created_at: i64,
}

/// Insert payload for a new bookmark. The store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub user_id: String,
}

/// Update payload, restricted to the mutable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkPatch {
    pub title: String,
    pub url: String,
}
