//! # Order Actor
//!
//! The order ledger: every order placed at the restaurant, active or completed.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] / [`open()`] - Factory functions for an in-memory or snapshot-backed actor
//!
//! ## Dependencies
//!
//! The Order actor's context is a [`MenuClient`](crate::clients::MenuClient). Start it with
//! `actor.run(menu_client)` so order lines can be resolved against the menu.
//!
//! ## Usage
//!
//! ```rust
//! use restaurant_orders::clients::{MenuClient, OrderClient};
//! use restaurant_orders::model::{MenuItemCreate, OrderCreate, OrderLine};
//! use restaurant_orders::{menu_actor, order_actor};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (menu, menu_generic) = menu_actor::new();
//!     let (orders, order_generic) = order_actor::new();
//!     let menu_client = MenuClient::new(menu_generic);
//!     let order_client = OrderClient::new(order_generic);
//!
//!     tokio::spawn(menu.run(()));
//!     tokio::spawn(orders.run(menu_client.clone()));
//!
//!     let dish = menu_client
//!         .create_menu_item(MenuItemCreate::new("Portuguesa Light", "", Decimal::new(1499, 2)))
//!         .await?;
//!     let order = order_client
//!         .create_order(OrderCreate {
//!             table_number: 5,
//!             customer_name: "Alice".into(),
//!             items: vec![OrderLine::new(dish.0, 2)],
//!         })
//!         .await?;
//!     assert_eq!(order.items.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Order;
use actor_framework::{FrameworkError, ResourceActor, ResourceClient};
use std::path::Path;

/// Creates a new in-memory Order actor and its client.
pub fn new() -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(32)
}

/// Creates an Order actor backed by the snapshot file at `path`.
pub fn open(path: &Path) -> Result<(ResourceActor<Order>, ResourceClient<Order>), FrameworkError> {
    ResourceActor::with_snapshot(32, path)
}
