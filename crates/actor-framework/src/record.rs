//! # Stored Records
//!
//! Every entity held by a [`ResourceActor`](crate::ResourceActor) is wrapped in a
//! [`Record`] that carries its soft-delete marker. A soft-deleted record stays in the
//! store (and in the snapshot file) but is invisible to `Get`, `List`, `Count`,
//! `Update`, `Delete` and `Action`. Only `Purge` removes records for good.

use crate::entity::ActorEntity;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::fmt;

/// An entity plus its soft-delete marker.
#[derive(Debug, Clone)]
pub struct Record<T> {
    pub entity: T,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl<T> Record<T> {
    pub fn new(entity: T) -> Self {
        Self {
            entity,
            deleted_at: None,
        }
    }

    pub fn is_live(&self) -> bool {
        self.deleted_at.is_none()
    }
}

/// The actor's store: records keyed by id, kept in creation order.
pub type Store<T> = IndexMap<<T as ActorEntity>::Id, Record<T>>;

/// A predicate over entities, used by `List` and `Purge` requests.
pub struct Filter<T>(Box<dyn Fn(&T) -> bool + Send + Sync>);

impl<T> Filter<T> {
    pub fn new(predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self(Box::new(predicate))
    }

    /// Matches every entity.
    pub fn all() -> Self {
        Self(Box::new(|_| true))
    }

    pub fn matches(&self, entity: &T) -> bool {
        (self.0)(entity)
    }
}

impl<T> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Filter(..)")
    }
}
