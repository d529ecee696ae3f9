//! Session lifecycle for Smartmark.
//!
//! A [`Session`] is the explicit object behind "signed in with a live
//! collection": constructed only after authentication succeeds, it owns
//! the collection controller and the change-feed subscription, and tears
//! both down on sign-out. There is no process-wide singleton; every
//! session carries its own state.

use tracing::warn;

use crate::auth::AuthProvider;
use crate::controllers::collection_controller::CollectionController;
use crate::store::{ChangeFeed, ChangeSubscription, RemoteStore};
use crate::types::errors::{AuthError, FetchError, SessionError};
use crate::types::user::User;

/// An established, live-synchronized bookmark session.
pub struct Session<A, S> {
    auth: A,
    controller: CollectionController<S>,
    subscription: ChangeSubscription,
}

impl<A: AuthProvider, S: RemoteStore> Session<A, S> {
    /// Establishes a session: resolves the current user, subscribes to the
    /// change feed, and performs the initial load.
    ///
    /// The subscription is acquired before the first fetch so a change
    /// landing between the two is still observed. `AuthRequired` means no
    /// user is signed in — the caller redirects rather than retries.
    pub async fn establish<F: ChangeFeed>(
        auth: A,
        store: S,
        feed: &F,
    ) -> Result<Self, SessionError> {
        let user = auth
            .current_user()
            .await
            .map_err(|e| SessionError::Auth(e.to_string()))?
            .ok_or(SessionError::AuthRequired)?;

        let subscription = feed.subscribe();
        let mut controller = CollectionController::new(store, user);
        controller
            .load()
            .await
            .map_err(SessionError::InitialFetch)?;

        Ok(Self {
            auth,
            controller,
            subscription,
        })
    }

    pub fn user(&self) -> &User {
        self.controller.user()
    }

    pub fn controller(&self) -> &CollectionController<S> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut CollectionController<S> {
        &mut self.controller
    }

    /// Drains queued change notifications, running one full reload per
    /// notification — reloads are deliberately not coalesced, and the last
    /// one's result is authoritative. Returns the number of reloads run.
    pub async fn process_pending_changes(&mut self) -> Result<usize, FetchError> {
        let mut reloads = 0;
        while self.subscription.try_changed() {
            if let Err(e) = self.controller.load().await {
                warn!(error = %e, "feed-triggered reload failed");
                return Err(e);
            }
            reloads += 1;
        }
        Ok(reloads)
    }

    /// Waits for the next change notification and reloads.
    /// Returns `None` once the feed is closed.
    pub async fn wait_for_change(&mut self) -> Option<Result<(), FetchError>> {
        if !self.subscription.changed().await {
            return None;
        }
        Some(self.controller.load().await)
    }

    /// Tears the session down: releases the feed subscription, drops the
    /// collection/selection/edit state, and signs out at the provider.
    pub async fn sign_out(self) -> Result<(), AuthError> {
        let Session {
            auth,
            controller,
            subscription,
        } = self;
        // Unsubscribe first so no further reloads can be attempted.
        drop(subscription);
        drop(controller);
        auth.sign_out().await
    }
}
