//! Errors raised by the actor plumbing rather than by an entity.
//!
//! Entity failures travel inside [`FrameworkError::EntityError`]; a typed client downcasts
//! them back into its own error enum.

/// Failure of a request sent through a [`ResourceClient`](crate::ResourceClient).
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The actor's receiver is gone; the request was never delivered.
    #[error("actor is not running")]
    ActorClosed,
    /// The actor took the request but never answered it.
    #[error("actor dropped the reply")]
    ActorDropped,
    /// No live record has this id.
    #[error("no record with id {0}")]
    NotFound(String),
    /// An entity hook rejected the request.
    #[error("entity rejected request: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
    /// The snapshot file could not be read or written.
    #[error("snapshot storage failed: {0}")]
    Storage(String),
}

impl FrameworkError {
    /// True when the actor itself is unreachable, as opposed to refusing the request.
    pub fn is_disconnected(&self) -> bool {
        matches!(self, Self::ActorClosed | Self::ActorDropped)
    }
}
