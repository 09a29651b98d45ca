//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>`; menu lookups for new orders happen
//! inside the Order actor's `on_create` hook.
use crate::clients::unwrap_entity_error;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderUpdate};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, Filter, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match unwrap_entity_error::<OrderError>(e) {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(FrameworkError::Storage(msg)) => OrderError::Storage(msg),
            Err(other) => {
                if other.is_disconnected() {
                    warn!(error = %other, "Order actor unreachable");
                }
                OrderError::ActorCommunication(other.to_string())
            }
        }
    }
}

fn is_active(order: &Order) -> bool {
    !order.status.is_completed()
}

fn is_history(order: &Order) -> bool {
    order.status.is_completed()
}

impl OrderClient {
    /// Places an order and returns it as stored, with every resolved item.
    #[instrument(skip(self, params), fields(table = params.table_number))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "create_order called");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order_id = %id, "Order placed");

        self.get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// Orders the kitchen still has to work on: every status except `completed`.
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> Result<Vec<Order>, OrderError> {
        self.inner
            .list(Filter::new(is_active))
            .await
            .map_err(Self::map_error)
    }

    /// Completed orders.
    #[instrument(skip(self))]
    pub async fn list_history(&self) -> Result<Vec<Order>, OrderError> {
        self.inner
            .list(Filter::new(is_history))
            .await
            .map_err(Self::map_error)
    }

    /// Sets the status of an order. Returns `None` when no such order exists;
    /// that case is not an error.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, OrderError> {
        match self.inner.update(id, OrderUpdate { status }).await {
            Ok(order) => Ok(Some(order)),
            Err(FrameworkError::NotFound(_)) => {
                warn!(order_id = %id, "Status update matched no order");
                Ok(None)
            }
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Permanently removes every completed order, soft-deleted ones included.
    /// Returns how many were removed.
    #[instrument(skip(self))]
    pub async fn purge_history(&self) -> Result<usize, OrderError> {
        let removed = self
            .inner
            .purge(Filter::new(is_history))
            .await
            .map_err(Self::map_error)?;
        info!(removed, "History purged");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_list, expect_purge, MockClient};

    fn order_with_status(id: u32, status: &str) -> Order {
        let mut order = Order::new(OrderId(id), 1, "Ana");
        order.status = OrderStatus::from(status);
        order
    }

    #[tokio::test]
    async fn test_create_order_rereads_stored_order() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create().return_ok(OrderId(4));
        mock.expect_get(OrderId(4))
            .return_ok(Some(order_with_status(4, "pending")));

        let client = OrderClient::new(mock.client());
        let order = client
            .create_order(OrderCreate {
                table_number: 1,
                customer_name: "Ana".into(),
                items: vec![],
            })
            .await
            .unwrap();

        assert_eq!(order.id, OrderId(4));
        mock.verify();
    }

    #[tokio::test]
    async fn test_validation_error_survives_the_actor_boundary() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(OrderError::Validation(
                "missing".into(),
            ))));

        let client = OrderClient::new(mock.client());
        let result = client.create_order(OrderCreate::default()).await;

        assert_eq!(result.unwrap_err(), OrderError::Validation("missing".into()));
    }

    #[tokio::test]
    async fn test_list_active_filters_out_completed() {
        let (generic, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(generic);

        let task = tokio::spawn(async move { client.list_active().await });

        let (filter, responder) = expect_list(&mut receiver).await.expect("Expected List");
        assert!(filter.matches(&order_with_status(1, "pending")));
        assert!(filter.matches(&order_with_status(2, "on-hold")));
        assert!(!filter.matches(&order_with_status(3, "completed")));
        responder.send(Ok(vec![])).unwrap();

        assert!(task.await.unwrap().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_purge_targets_completed_only() {
        let (generic, mut receiver) = create_mock_client::<Order>(10);
        let client = OrderClient::new(generic);

        let task = tokio::spawn(async move { client.purge_history().await });

        let (filter, responder) = expect_purge(&mut receiver).await.expect("Expected Purge");
        assert!(filter.matches(&order_with_status(1, "completed")));
        assert!(!filter.matches(&order_with_status(2, "")));
        responder.send(Ok(2)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_unknown_order_is_not_an_error() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_update(OrderId(99))
            .return_err(FrameworkError::NotFound("order_99".into()));

        let client = OrderClient::new(mock.client());
        let result = client
            .update_status(OrderId(99), OrderStatus::Completed)
            .await
            .unwrap();

        assert!(result.is_none());
        mock.verify();
    }

    #[tokio::test]
    async fn test_update_storage_failure_is_reported() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_update(OrderId(1))
            .return_err(FrameworkError::Storage("disk full".into()));

        let client = OrderClient::new(mock.client());
        let result = client.update_status(OrderId(1), OrderStatus::Completed).await;

        assert!(matches!(result, Err(OrderError::Storage(_))));
    }
}
