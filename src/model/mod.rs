//! Pure data structures implementing the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! plus the payloads used to create and update them.

pub mod menu_item;
pub mod order;

pub use menu_item::*;
pub use order::*;
