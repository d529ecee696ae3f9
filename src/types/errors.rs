use std::fmt;

// === ValidationError ===

/// Input errors caught locally, before any remote call is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The bookmark title is empty after trimming.
    EmptyTitle,
    /// The bookmark URL is empty after trimming.
    EmptyUrl,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyTitle => write!(f, "Bookmark title must not be empty"),
            ValidationError::EmptyUrl => write!(f, "Bookmark URL must not be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

// === FetchError ===

/// Errors from read operations against the remote store.
///
/// A failed fetch never mutates the local collection; the previous
/// (possibly stale) view is retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure (network, timeout, malformed response).
    Transport(String),
    /// The store rejected the read for auth reasons.
    Unauthorized(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "Fetch failed: {}", msg),
            FetchError::Unauthorized(msg) => write!(f, "Fetch unauthorized: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

// === WriteError ===

/// Errors from create/update/delete operations against the remote store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
    /// Transport-level failure (network, timeout, malformed response).
    Transport(String),
    /// The store rejected the write (policy, constraint, bad payload).
    Rejected(String),
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::Transport(msg) => write!(f, "Write failed: {}", msg),
            WriteError::Rejected(msg) => write!(f, "Write rejected: {}", msg),
        }
    }
}

impl std::error::Error for WriteError {}

// === AuthError ===

/// Errors from the auth provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The provider could not report the current user.
    Provider(String),
    /// Sign-out failed at the provider.
    SignOut(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Provider(msg) => write!(f, "Auth provider error: {}", msg),
            AuthError::SignOut(msg) => write!(f, "Sign-out failed: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

// === CollectionError ===

/// Errors surfaced by collection mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// A required field failed local validation.
    Validation(ValidationError),
    /// Reading from the remote store failed.
    Fetch(FetchError),
    /// Writing to the remote store failed.
    Write(WriteError),
    /// An update was requested for an id that is not the open edit target.
    NoEditTarget(String),
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::Validation(e) => write!(f, "{}", e),
            CollectionError::Fetch(e) => write!(f, "{}", e),
            CollectionError::Write(e) => write!(f, "{}", e),
            CollectionError::NoEditTarget(id) => {
                write!(f, "No edit in progress for bookmark: {}", id)
            }
        }
    }
}

impl std::error::Error for CollectionError {}

impl From<ValidationError> for CollectionError {
    fn from(e: ValidationError) -> Self {
        CollectionError::Validation(e)
    }
}

impl From<FetchError> for CollectionError {
    fn from(e: FetchError) -> Self {
        CollectionError::Fetch(e)
    }
}

impl From<WriteError> for CollectionError {
    fn from(e: WriteError) -> Self {
        CollectionError::Write(e)
    }
}

// === SessionError ===

/// Errors establishing a synchronized session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No authenticated user — redirect condition, not a recoverable error.
    AuthRequired,
    /// The auth provider failed while resolving the current user.
    Auth(String),
    /// The initial collection load failed.
    InitialFetch(FetchError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::AuthRequired => write!(f, "No authenticated user"),
            SessionError::Auth(msg) => write!(f, "Auth provider error: {}", msg),
            SessionError::InitialFetch(e) => write!(f, "Initial load failed: {}", e),
        }
    }
}

impl std::error::Error for SessionError {}
