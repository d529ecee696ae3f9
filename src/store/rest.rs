//! HTTP-backed bookmark store for Smartmark.
//!
//! Implements [`RemoteStore`] against a PostgREST-style API: owner and id
//! scoping travel as query-string filters (`user_id=eq.…`, `id=in.(…)`),
//! ordering is requested server-side, and inserts ask for the created row
//! back via `Prefer: return=representation`.
//!
//! The realtime transport is not bundled here; any push channel can drive
//! reloads by implementing the `ChangeFeed` trait.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::types::bookmark::{Bookmark, BookmarkPatch, NewBookmark};
use crate::types::errors::{FetchError, WriteError};

use super::RemoteStore;

const ENV_API_URL: &str = "SMARTMARK_API_URL";
const ENV_API_KEY: &str = "SMARTMARK_API_KEY";

fn default_table() -> String {
    "bookmarks".to_string()
}

/// Connection settings for a [`RestStore`].
#[derive(Debug, Clone, Deserialize)]
pub struct RestConfig {
    /// Service root, e.g. `https://project.example.co`.
    pub base_url: String,
    /// API key, sent both as `apikey` header and bearer token.
    pub api_key: String,
    /// Record collection name.
    #[serde(default = "default_table")]
    pub table: String,
}

impl RestConfig {
    /// Reads the connection settings from the environment.
    /// Returns `None` unless both URL and key are present.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var(ENV_API_URL).ok()?;
        let api_key = std::env::var(ENV_API_KEY).ok()?;
        Some(Self {
            base_url,
            api_key,
            table: default_table(),
        })
    }
}

/// Builds a PostgREST `in.(…)` filter value from a list of ids.
pub fn id_in_filter(ids: &[String]) -> String {
    format!("in.({})", ids.join(","))
}

/// Bookmark store backed by a PostgREST-style HTTP API.
pub struct RestStore {
    client: reqwest::Client,
    config: RestConfig,
}

impl RestStore {
    pub fn new(config: RestConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Full URL of the bookmark table endpoint.
    pub fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.table
        )
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }

    fn classify_fetch(status: StatusCode, body: String) -> FetchError {
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            FetchError::Unauthorized(body)
        } else {
            FetchError::Transport(format!("{}: {}", status, body))
        }
    }
}

#[async_trait]
impl RemoteStore for RestStore {
    async fn fetch_all(&self, owner_id: &str) -> Result<Vec<Bookmark>, FetchError> {
        let response = self
            .authed(self.client.get(self.table_url()))
            .query(&[
                ("user_id", format!("eq.{}", owner_id)),
                ("order", "created_at.desc".to_string()),
                ("select", "*".to_string()),
            ])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::classify_fetch(status, body));
        }

        response
            .json::<Vec<Bookmark>>()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }

    async fn insert(&self, record: NewBookmark) -> Result<Bookmark, WriteError> {
        let response = self
            .authed(self.client.post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(&[record])
            .send()
            .await
            .map_err(|e| WriteError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WriteError::Rejected(format!("{}: {}", status, body)));
        }

        let mut created: Vec<Bookmark> = response
            .json()
            .await
            .map_err(|e| WriteError::Transport(e.to_string()))?;
        match created.pop() {
            Some(bookmark) => Ok(bookmark),
            None => Err(WriteError::Rejected(
                "insert returned no representation".to_string(),
            )),
        }
    }

    async fn update_by_id(
        &self,
        id: &str,
        owner_id: &str,
        patch: BookmarkPatch,
    ) -> Result<(), WriteError> {
        let response = self
            .authed(self.client.patch(self.table_url()))
            .query(&[
                ("id", format!("eq.{}", id)),
                ("user_id", format!("eq.{}", owner_id)),
            ])
            .json(&patch)
            .send()
            .await
            .map_err(|e| WriteError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WriteError::Rejected(format!("{}: {}", status, body)));
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), WriteError> {
        let response = self
            .authed(self.client.delete(self.table_url()))
            .query(&[("id", format!("eq.{}", id))])
            .send()
            .await
            .map_err(|e| WriteError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WriteError::Rejected(format!("{}: {}", status, body)));
        }
        Ok(())
    }

    async fn delete_by_ids(&self, ids: &[String]) -> Result<(), WriteError> {
        if ids.is_empty() {
            return Ok(());
        }
        let response = self
            .authed(self.client.delete(self.table_url()))
            .query(&[("id", id_in_filter(ids))])
            .send()
            .await
            .map_err(|e| WriteError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WriteError::Rejected(format!("{}: {}", status, body)));
        }
        Ok(())
    }
}
