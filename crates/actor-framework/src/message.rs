//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::record::Filter;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Each actor manages one type of resource (the [`ActorEntity`]). Instead of ad-hoc
/// messages for every operation, requests are standardized around lifecycle operations
/// that apply to almost any persistent resource.
///
/// - **Create**: Uses [`ActorEntity::Create`] to initialize a new resource.
/// - **Get**: Fetches the current state of a live resource by ID.
/// - **List**: Returns every live resource matching a [`Filter`], in creation order.
/// - **Count**: Number of live resources.
/// - **Update**: Uses [`ActorEntity::Update`] to modify an existing resource.
/// - **Delete**: Soft delete. The record is marked deleted and retained.
/// - **Purge**: Hard delete of every record matching a [`Filter`], soft-deleted ones included.
/// - **Action**: Executes a custom [`ActorEntity::Action`].
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: Filter<T>,
        respond_to: Response<Vec<T>>,
    },
    Count {
        respond_to: Response<usize>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Purge {
        filter: Filter<T>,
        respond_to: Response<usize>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
