//! Error types for the Order actor.

use crate::menu_actor::MenuError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// A required field of the order is missing. The message is shown to clients as-is.
    #[error("{0}")]
    Validation(String),

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// Resolving an order line against the menu failed for a reason other than
    /// the item not existing.
    #[error("Menu lookup failed: {0}")]
    MenuLookup(#[from] MenuError),

    /// The order snapshot could not be written.
    #[error("Order storage error: {0}")]
    Storage(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunication(msg)
    }
}
