//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).

pub mod menu_client;
pub mod order_client;

pub use menu_client::*;
pub use order_client::*;

use actor_framework::FrameworkError;

/// Recovers a resource error that travelled through the actor as `EntityError`.
///
/// Anything else is handed back unchanged so the caller can classify it.
pub(crate) fn unwrap_entity_error<E>(e: FrameworkError) -> Result<E, FrameworkError>
where
    E: std::error::Error + 'static,
{
    match e {
        FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
            Ok(err) => Ok(*err),
            Err(other) => Err(FrameworkError::EntityError(other)),
        },
        other => Err(other),
    }
}
