//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent resource actors on Tokio. Each resource type
//! (menu items, orders, ...) gets its own [`ResourceActor`], which owns the store for that
//! type and processes requests one at a time. Callers talk to it through a cloneable
//! [`ResourceClient`].
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - domain data plus lifecycle hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message loop, soft-delete store, optional snapshot
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed requests over channels
//!
//! Requests cover the usual lifecycle of a stored resource: create, get, filtered list,
//! count, update, soft delete, filtered purge, and entity-specific actions. Because one
//! actor handles one request at a time, every request is atomic with respect to its store.
//!
//! ```rust
//! use actor_framework::{ActorEntity, Filter, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Ticket { id: u32, table: u32, done: bool }
//!
//! #[derive(Debug)] struct TicketCreate { table: u32 }
//! #[derive(Debug)] struct TicketUpdate { done: bool }
//! #[derive(Debug)] enum TicketAction {}
//! #[derive(Debug, thiserror::Error)] #[error("ticket error")] struct TicketError;
//!
//! #[async_trait]
//! impl ActorEntity for Ticket {
//!     type Id = u32;
//!     type Create = TicketCreate;
//!     type Update = TicketUpdate;
//!     type Action = TicketAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = TicketError;
//!
//!     fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, table: params.table, done: false })
//!     }
//!
//!     async fn on_update(&mut self, update: TicketUpdate, _: &()) -> Result<(), Self::Error> {
//!         self.done = update.done;
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, a: TicketAction, _: &()) -> Result<(), Self::Error> {
//!         match a {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Ticket>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let first = client.create(TicketCreate { table: 4 }).await.unwrap();
//!     client.create(TicketCreate { table: 9 }).await.unwrap();
//!     client.update(first, TicketUpdate { done: true }).await.unwrap();
//!
//!     let open = client.list(Filter::new(|t: &Ticket| !t.done)).await.unwrap();
//!     assert_eq!(open.len(), 1);
//!
//!     let purged = client.purge(Filter::new(|t: &Ticket| t.done)).await.unwrap();
//!     assert_eq!(purged, 1);
//!     assert_eq!(client.count().await.unwrap(), 1);
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are passed to `run()`, not `new()`. Create every actor first, then start each
//! one with the clients it needs: an order actor can be started with a menu client and consult
//! it from `on_create`.
//!
//! ## Persistence
//!
//! [`ResourceActor::with_snapshot`] mirrors the store to a JSON file and reloads it on start.
//! See the [`snapshot`] module.
//!
//! ## Testing
//!
//! [`mock::MockClient`] hands out a real `ResourceClient<T>` answered from scripted
//! expectations, so code around a client can be tested without spawning its actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod record;
pub mod snapshot;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use record::{Filter, Record, Store};
pub use snapshot::Snapshot;
