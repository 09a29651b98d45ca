//! ActorEntity implementation for [`Order`].
//!
//! Orders depend on the menu: `on_create` looks up every requested line through the injected
//! [`MenuClient`] and snapshots name and price into an [`OrderItem`]. Lines whose menu item
//! does not exist are dropped. The order and all its items are inserted in one store
//! operation once `on_create` returns.

use crate::clients::MenuClient;
use crate::model::{Order, OrderCreate, OrderId, OrderItem, OrderItemId, OrderUpdate};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use chrono::Utc;
use std::convert::Infallible;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Context = MenuClient;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        params.validate()?;
        let mut order = Order::new(id, params.table_number, params.customer_name);
        order.requested = params.items;
        Ok(order)
    }

    /// Resolves requested lines against the menu.
    async fn on_create(&mut self, menu: &MenuClient) -> Result<(), Self::Error> {
        let requested = std::mem::take(&mut self.requested);
        let wanted = requested.len();

        for line in requested {
            let Some(menu_item) = menu.get(line.menu_item_id).await? else {
                debug!(order_id = %self.id, menu_item_id = %line.menu_item_id, "Unknown menu item, line skipped");
                continue;
            };
            self.items.push(OrderItem {
                id: OrderItemId::new(),
                order_id: self.id,
                menu_item_id: menu_item.id,
                name: menu_item.name,
                quantity: line.quantity,
                price: menu_item.price,
                created_at: self.created_at,
                updated_at: self.created_at,
            });
        }

        info!(order_id = %self.id, resolved = self.items.len(), wanted, "Order lines resolved");
        Ok(())
    }

    /// Stores the new status verbatim.
    async fn on_update(
        &mut self,
        update: OrderUpdate,
        _ctx: &MenuClient,
    ) -> Result<(), Self::Error> {
        self.status = update.status;
        self.updated_at = Utc::now();
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Infallible,
        _ctx: &MenuClient,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}
