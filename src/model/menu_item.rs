//! A dish on the restaurant menu.
//!
//! # Actor Framework
//! [`MenuItem`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! Related payloads:
//! - Creation parameters ([`MenuItemCreate`])
//! - Update parameters ([`MenuItemUpdate`])

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for menu items. Serialized as a bare number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "menu_item_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MenuItem {
    /// Builds a menu item stamped with the current time.
    pub fn new(id: MenuItemId, params: MenuItemCreate) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            category: params.category,
            image_url: params.image_url,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Payload for adding a dish to the menu.
#[derive(Debug, Clone)]
pub struct MenuItemCreate {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub image_url: String,
}

impl MenuItemCreate {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            category: String::new(),
            image_url: String::new(),
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

// Partial update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}
