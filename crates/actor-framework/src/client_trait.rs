//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: default `get`, `list_all`, `count`
//! and `delete` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, Filter, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read and delete operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Table { id: u32 }
/// #[derive(Debug)] struct TableCreate;
/// #[derive(Debug)] struct TableUpdate;
/// #[derive(Debug)] enum TableAction {}
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct TableError(String);
///
/// impl From<String> for TableError {
///     fn from(s: String) -> Self { TableError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Table {
///     type Id = u32;
///     type Create = TableCreate;
///     type Update = TableUpdate;
///     type Action = TableAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = TableError;
///
///     fn from_create_params(id: u32, _: TableCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     async fn on_update(&mut self, _: TableUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, a: TableAction, _: &()) -> Result<(), Self::Error> { match a {} }
/// }
///
/// struct TableClient {
///     inner: ResourceClient<Table>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Table> for TableClient {
///     type Error = TableError;
///
///     fn inner(&self) -> &ResourceClient<Table> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         TableError(e.to_string())
///     }
/// }
///
/// async fn usage(client: TableClient) {
///     // get(), list_all(), count() and delete() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.count().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a live entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Every live entity, in creation order.
    #[tracing::instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(Filter::all()).await.map_err(Self::map_error)
    }

    /// Number of live entities.
    #[tracing::instrument(skip(self))]
    async fn count(&self) -> Result<usize, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().count().await.map_err(Self::map_error)
    }

    /// Soft-delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
