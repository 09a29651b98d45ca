//! Error types for the Menu actor.

use thiserror::Error;

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// The menu item data provided is invalid.
    #[error("Menu item validation error: {0}")]
    Validation(String),

    /// The requested menu item was not found.
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// The menu snapshot could not be written.
    #[error("Menu storage error: {0}")]
    Storage(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for MenuError {
    fn from(msg: String) -> Self {
        MenuError::ActorCommunication(msg)
    }
}
