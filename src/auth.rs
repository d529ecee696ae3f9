//! Authentication seam for Smartmark.
//!
//! The core only needs two things from the auth layer: who the current
//! user is, and a way to sign out. The OAuth redirect dance lives behind
//! this trait, outside the crate.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::types::errors::AuthError;
use crate::types::user::User;

/// Trait defining the auth provider surface consumed by the core.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// The currently authenticated user, or `None` when no session exists.
    /// Absence is a redirect condition for the caller, not an error.
    async fn current_user(&self) -> Result<Option<User>, AuthError>;

    /// Ends the provider-side session.
    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// In-process auth provider for tests and the demo binary.
pub struct MemoryAuth {
    user: Mutex<Option<User>>,
}

impl MemoryAuth {
    /// A provider with an already-established session for `user`.
    pub fn signed_in(user: User) -> Self {
        Self {
            user: Mutex::new(Some(user)),
        }
    }

    /// A provider with no session.
    pub fn signed_out() -> Self {
        Self {
            user: Mutex::new(None),
        }
    }
}

#[async_trait]
impl AuthProvider for MemoryAuth {
    async fn current_user(&self) -> Result<Option<User>, AuthError> {
        let user = self
            .user
            .lock()
            .map_err(|e| AuthError::Provider(e.to_string()))?;
        Ok(user.clone())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let mut user = self
            .user
            .lock()
            .map_err(|e| AuthError::SignOut(e.to_string()))?;
        user.take();
        Ok(())
    }
}
