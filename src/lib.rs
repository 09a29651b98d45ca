//! # Restaurant Orders
//!
//! An order-management backend for a small restaurant: it serves the menu, takes orders
//! from tables, feeds the kitchen queue and keeps a history of completed orders.
//!
//! Built on the resource actors of [`actor_framework`]: the menu and the order ledger are
//! each owned by one actor that processes requests sequentially.
//!
//! ## Module Tour
//!
//! - [`model`] - [`MenuItem`](model::MenuItem), [`Order`](model::Order) and their payloads
//! - [`menu_actor`], [`order_actor`] - entity implementations, errors and actor factories
//! - [`clients`] - [`MenuClient`](clients::MenuClient) and [`OrderClient`](clients::OrderClient),
//!   the domain operations on top of the generic client
//! - [`lifecycle`] - [`RestaurantSystem`](lifecycle::RestaurantSystem) starts, wires, seeds and
//!   stops the actors; [`setup_tracing`](lifecycle::setup_tracing)
//! - [`api`] - the axum router
//! - [`config`] - command-line and environment settings
//!
//! ## Order Lifecycle
//!
//! A new order is `pending`. The kitchen moves it through any statuses it likes; every order
//! whose status is not exactly `completed` is on the kitchen queue. Completed orders form the
//! history until it is cleared, which deletes them for good.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --data-dir ./data
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
