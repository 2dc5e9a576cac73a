//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RolodexError`] via `From`, so callers only ever match on three kinds.

/// Top-level error shared by every layer.
#[derive(Debug, thiserror::Error)]
pub enum RolodexError {
    /// The caller supplied something that cannot be acted upon.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed (connectivity, constraint, decoding).
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input that was rejected before reaching storage.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The identifier is not an integer.
    #[error("Invalid ID")]
    InvalidId(String),

    /// The request payload could not be decoded into a person.
    #[error("{0}")]
    MalformedPayload(String),
}

/// A lookup that matched nothing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up.
    pub entity: &'static str,
    /// Identifier that was looked up, rendered as text.
    pub id: String,
}
