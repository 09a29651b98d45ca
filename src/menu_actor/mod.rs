//! # Menu Actor
//!
//! The catalog of dishes. It is filled once at startup from [`starter_menu`] when empty and
//! only read afterwards; orders copy name and price out of it when they are placed.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`MenuItem`]
//! - [`error`] - [`MenuError`] type for type-safe error handling
//! - [`seed`] - the fixed starter menu
//! - [`new()`] / [`open()`] - Factory functions for an in-memory or snapshot-backed actor
//!
//! The menu actor has no dependencies (`Context = ()`).

pub mod entity;
pub mod error;
pub mod seed;

pub use error::*;
pub use seed::starter_menu;

use crate::model::MenuItem;
use actor_framework::{FrameworkError, ResourceActor, ResourceClient};
use std::path::Path;

/// Creates a new in-memory Menu actor and its client.
pub fn new() -> (ResourceActor<MenuItem>, ResourceClient<MenuItem>) {
    ResourceActor::new(32)
}

/// Creates a Menu actor backed by the snapshot file at `path`.
pub fn open(
    path: &Path,
) -> Result<(ResourceActor<MenuItem>, ResourceClient<MenuItem>), FrameworkError> {
    ResourceActor::with_snapshot(32, path)
}
