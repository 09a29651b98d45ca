use crate::clients::{MenuClient, OrderClient};
use crate::menu_actor::{self, starter_menu, MenuError};
use crate::model::{MenuItem, Order};
use crate::order_actor;
use actor_framework::{FrameworkError, ResourceActor, ResourceClient};
use std::path::Path;
use tracing::{error, info};

/// Snapshot file of the menu inside the data directory.
pub const MENU_FILE: &str = "menu.json";
/// Snapshot file of the order ledger inside the data directory.
pub const ORDERS_FILE: &str = "orders.json";

/// The runtime orchestrator for the restaurant: the menu and the order ledger.
///
/// `RestaurantSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping both actors
/// - **Dependency Wiring**: the Order actor runs with a `MenuClient` as its context
/// - **Seeding**: filling an empty menu with the starter dishes
///
/// # Example
///
/// ```ignore
/// let system = RestaurantSystem::new();
/// system.seed_menu().await?;
///
/// let order = system.order_client.create_order(params).await?;
///
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    /// Client for interacting with the Menu actor
    pub menu_client: MenuClient,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handles for the running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Starts both actors with in-memory stores.
    pub fn new() -> Self {
        let (menu_actor, menu_generic) = menu_actor::new();
        let (order_actor, order_generic) = order_actor::new();
        Self::start(menu_actor, menu_generic, order_actor, order_generic)
    }

    /// Starts both actors backed by snapshot files in `dir`.
    ///
    /// Existing snapshots are loaded, so orders and menu survive a restart.
    pub fn with_data_dir(dir: &Path) -> Result<Self, FrameworkError> {
        let (menu_actor, menu_generic) = menu_actor::open(&dir.join(MENU_FILE))?;
        let (order_actor, order_generic) = order_actor::open(&dir.join(ORDERS_FILE))?;
        info!(dir = %dir.display(), "Using snapshot storage");
        Ok(Self::start(
            menu_actor,
            menu_generic,
            order_actor,
            order_generic,
        ))
    }

    fn start(
        menu_actor: ResourceActor<MenuItem>,
        menu_generic: ResourceClient<MenuItem>,
        order_actor: ResourceActor<Order>,
        order_generic: ResourceClient<Order>,
    ) -> Self {
        let menu_client = MenuClient::new(menu_generic);
        let order_client = OrderClient::new(order_generic);

        // Menu has no dependencies; orders resolve their lines through the menu
        let menu_handle = tokio::spawn(menu_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(menu_client.clone()));

        Self {
            menu_client,
            order_client,
            handles: vec![order_handle, menu_handle],
        }
    }

    /// Fills an empty menu with [`starter_menu`]. Returns how many dishes were added.
    pub async fn seed_menu(&self) -> Result<usize, MenuError> {
        self.menu_client.seed_if_empty(starter_menu()).await
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients closes the channels. The Order actor exits first and releases
    /// its `MenuClient`, which lets the Menu actor exit too. Any client clones handed out
    /// (for example to the HTTP state) must be dropped before calling this.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.menu_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for RestaurantSystem {
    fn default() -> Self {
        Self::new()
    }
}
