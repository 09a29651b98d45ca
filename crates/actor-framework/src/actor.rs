//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that manages the lifecycle
//! and state of entities. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the entity store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::record::{Record, Store};
use crate::snapshot::Snapshot;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each `ResourceActor` processes its own messages *sequentially* in a loop, so every
/// request is atomic with respect to the store and no `Mutex` or `RwLock` is needed.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Dish { id: u32 }
/// #[derive(Debug)] struct DishCreate;
/// #[derive(Debug)] struct DishUpdate;
/// #[derive(Debug)] enum DishAction {}
/// #[derive(Debug, thiserror::Error)] #[error("dish error")] struct DishError;
///
/// #[async_trait]
/// impl ActorEntity for Dish {
///     type Id = u32;
///     type Create = DishCreate;
///     type Update = DishUpdate;
///     type Action = DishAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = DishError;
///
///     fn from_create_params(id: u32, _: DishCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     async fn on_update(&mut self, _: DishUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, a: DishAction, _: &()) -> Result<(), Self::Error> { match a {} }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Dish>::new(10);
///     tokio::spawn(actor.run(()));
///     let id = client.create(DishCreate).await.unwrap();
///     assert_eq!(id, 1);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: builds the entity with the next `u32` id, runs `on_create`, inserts it.
///   The id counter only advances when the entity is actually stored.
/// * **Get / List / Count**: see live records only.
/// * **Update / Action**: run the entity hook on a live record.
/// * **Delete**: runs `on_delete`, then marks the record deleted (soft delete).
/// * **Purge**: removes every matching record, soft-deleted ones included.
///
/// When a snapshot is attached, each mutation is written to disk before it is
/// acknowledged. A failed write rolls the mutation back and answers
/// [`FrameworkError::Storage`].
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Store<T>,
    next_id: u32,
    snapshot: Option<Snapshot<T>>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new in-memory `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. If the channel is full,
    /// calls to the client wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Store::<T>::new(),
            next_id: 1,
            snapshot: None,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Borrows only the snapshot and the store, so the future stays `Send`.
    fn persist(&self) -> impl Future<Output = Result<(), FrameworkError>> + Send + '_ {
        let snapshot = self.snapshot.as_ref();
        let store = &self.store;
        let next_id = self.next_id;
        async move {
            match snapshot {
                Some(snapshot) => snapshot.save(store, next_id).await,
                None => Ok(()),
            }
        }
    }

    /// Advances the id counter past ids already in the store, so a create never
    /// overwrites a record loaded with a stale counter.
    fn skip_taken_ids(&mut self) {
        let start = self.next_id;
        while self.store.contains_key(&T::Id::from(self.next_id)) {
            self.next_id += 1;
        }
        if self.next_id != start {
            warn!(from = start, to = self.next_id, "Id counter behind stored records, skipped ahead");
        }
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Order" instead of "restaurant_orders::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    self.skip_taken_ids();
                    let id = T::Id::from(self.next_id);

                    let mut item = match T::from_create_params(id.clone(), params) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                    };
                    if let Err(e) = item.on_create(&context).await {
                        warn!(entity_type, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }

                    self.store.insert(id.clone(), Record::new(item));
                    self.next_id += 1;
                    if let Err(e) = self.persist().await {
                        error!(entity_type, %id, error = %e, "Snapshot failed, create rolled back");
                        self.store.shift_remove(&id);
                        self.next_id -= 1;
                        let _ = respond_to.send(Err(e));
                        continue;
                    }
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(id));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self
                        .store
                        .get(&id)
                        .filter(|record| record.is_live())
                        .map(|record| record.entity.clone());
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { filter, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|record| record.is_live() && filter.matches(&record.entity))
                        .map(|record| record.entity.clone())
                        .collect();
                    debug!(entity_type, matched = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Count { respond_to } => {
                    let count = self.store.values().filter(|r| r.is_live()).count();
                    debug!(entity_type, count, "Count");
                    let _ = respond_to.send(Ok(count));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(record) = self.store.get_mut(&id).filter(|r| r.is_live()) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    let before = record.entity.clone();
                    if let Err(e) = record.entity.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        record.entity = before;
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    let updated = record.entity.clone();

                    if let Err(e) = self.persist().await {
                        error!(entity_type, %id, error = %e, "Snapshot failed, update rolled back");
                        if let Some(record) = self.store.get_mut(&id) {
                            record.entity = before;
                        }
                        let _ = respond_to.send(Err(e));
                        continue;
                    }
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(updated));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(record) = self.store.get_mut(&id).filter(|r| r.is_live()) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    if let Err(e) = record.entity.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    record.deleted_at = Some(Utc::now());

                    if let Err(e) = self.persist().await {
                        error!(entity_type, %id, error = %e, "Snapshot failed, delete rolled back");
                        if let Some(record) = self.store.get_mut(&id) {
                            record.deleted_at = None;
                        }
                        let _ = respond_to.send(Err(e));
                        continue;
                    }
                    info!(entity_type, %id, "Soft-deleted");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Purge { filter, respond_to } => {
                    let before = self.snapshot.as_ref().map(|_| self.store.clone());
                    let size = self.store.len();
                    self.store.retain(|_, record| !filter.matches(&record.entity));
                    let removed = size - self.store.len();

                    if removed > 0 {
                        if let Err(e) = self.persist().await {
                            error!(entity_type, error = %e, "Snapshot failed, purge rolled back");
                            if let Some(store) = before {
                                self.store = store;
                            }
                            let _ = respond_to.send(Err(e));
                            continue;
                        }
                    }
                    info!(entity_type, removed, size = self.store.len(), "Purged");
                    let _ = respond_to.send(Ok(removed));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(record) = self.store.get_mut(&id).filter(|r| r.is_live()) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    let before = record.entity.clone();
                    let result = record
                        .entity
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));

                    let result = match result {
                        Ok(value) => match self.persist().await {
                            Ok(()) => Ok(value),
                            Err(e) => {
                                if let Some(record) = self.store.get_mut(&id) {
                                    record.entity = before;
                                }
                                Err(e)
                            }
                        },
                        Err(e) => Err(e),
                    };
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

impl<T> ResourceActor<T>
where
    T: ActorEntity + Serialize + DeserializeOwned,
    T::Id: Serialize + DeserializeOwned,
{
    /// Creates a `ResourceActor` whose store is mirrored to the JSON file at `path`.
    ///
    /// Existing contents are loaded first, and ids continue from the stored counter.
    pub fn with_snapshot(
        buffer_size: usize,
        path: impl Into<PathBuf>,
    ) -> Result<(Self, ResourceClient<T>), FrameworkError> {
        let (snapshot, restored) = Snapshot::<T>::open(path)?;
        let (mut actor, client) = Self::new(buffer_size);
        actor.store = restored.store;
        actor.next_id = restored.next_id;
        actor.snapshot = Some(snapshot);
        actor.skip_taken_ids();
        Ok((actor, client))
    }
}
