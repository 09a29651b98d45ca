//! # System Lifecycle & Orchestration
//!
//! Starting, wiring, seeding and shutting down the restaurant's actors.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them when they start:
//!
//! ```rust,ignore
//! let (menu_actor, menu_generic) = menu_actor::new();
//! let (order_actor, order_generic) = order_actor::new();
//! let menu_client = MenuClient::new(menu_generic);
//!
//! tokio::spawn(menu_actor.run(()));
//! tokio::spawn(order_actor.run(menu_client.clone())); // Order::Context = MenuClient
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - every actor task is joined
//!
//! The dependency graph is acyclic (orders depend on the menu, never the reverse), so
//! closing the channels is enough to stop everything.
//!
//! ## Storage
//!
//! [`RestaurantSystem::new`] keeps state in memory. [`RestaurantSystem::with_data_dir`]
//! mirrors each actor's store to a JSON snapshot ([`MENU_FILE`], [`ORDERS_FILE`]).

pub mod restaurant_system;
pub mod tracing;

pub use restaurant_system::*;
pub use self::tracing::setup_tracing;
