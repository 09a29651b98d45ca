//! # Menu Client
//!
//! Provides a high-level API for interacting with the `MenuItem` actor.
//! It wraps a `ResourceClient<MenuItem>` and exposes domain-specific methods.
use crate::clients::unwrap_entity_error;
use crate::menu_actor::MenuError;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the Menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match unwrap_entity_error::<MenuError>(e) {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => MenuError::NotFound(id),
            Err(FrameworkError::Storage(msg)) => MenuError::Storage(msg),
            Err(other) => {
                if other.is_disconnected() {
                    warn!(error = %other, "Menu actor unreachable");
                }
                MenuError::ActorCommunication(other.to_string())
            }
        }
    }
}

impl MenuClient {
    /// Every dish on the menu, in the order it was added.
    #[instrument(skip(self))]
    pub async fn list_menu(&self) -> Result<Vec<MenuItem>, MenuError> {
        self.list_all().await
    }

    #[instrument(skip(self))]
    pub async fn create_menu_item(&self, params: MenuItemCreate) -> Result<MenuItemId, MenuError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Changes a dish. Orders already placed keep the name and price they were placed with.
    #[instrument(skip(self))]
    pub async fn update_menu_item(
        &self,
        id: MenuItemId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Inserts `items` only when the menu is empty. Returns how many were inserted.
    ///
    /// A non-empty menu is left alone even if it differs from `items`.
    #[instrument(skip(self, items), fields(items = items.len()))]
    pub async fn seed_if_empty(&self, items: Vec<MenuItemCreate>) -> Result<usize, MenuError> {
        let existing = self.count().await?;
        if existing > 0 {
            info!(existing, "Menu already populated, seeding skipped");
            return Ok(0);
        }

        let mut inserted = 0;
        for item in items {
            self.create_menu_item(item).await?;
            inserted += 1;
        }
        info!(inserted, "Menu seeded");
        Ok(inserted)
    }
}
