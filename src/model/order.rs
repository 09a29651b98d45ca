//! Customer orders and the line items they own.
//!
//! [`Order`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait (see
//! `order_actor::entity`). Its [`OrderItem`]s are embedded in the order record, so an order
//! and its items are always stored, listed and purged together.

use crate::model::MenuItemId;
use crate::order_actor::OrderError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Message returned for every create request missing a required field.
pub const REQUIRED_FIELDS_MESSAGE: &str = "table number, customer name and items are required";

/// Type-safe identifier for Orders. Serialized as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Identifier of a single order line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderItemId(pub Uuid);

impl OrderItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OrderItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for OrderItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of an order.
///
/// The kitchen only distinguishes `completed` from everything else. Any other string a
/// client sends is kept verbatim in [`OrderStatus::Other`] and counts as active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Completed,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Other(s) => s,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, OrderStatus::Completed)
    }
}

impl From<String> for OrderStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pending" => OrderStatus::Pending,
            "completed" => OrderStatus::Completed,
            _ => OrderStatus::Other(s),
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(s: &str) -> Self {
        OrderStatus::from(s.to_string())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resolved line of an order. Name and price are copied from the menu item when the
/// order is placed and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub menu_item_id: MenuItemId,
    pub name: String,
    pub quantity: i32,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub table_number: u32,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Lines awaiting resolution against the menu. Only populated between construction
    /// and `on_create`.
    #[serde(skip)]
    pub(crate) requested: Vec<OrderLine>,
}

impl Order {
    /// Creates a pending order with no items yet.
    pub fn new(id: OrderId, table_number: u32, customer_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            table_number,
            customer_name: customer_name.into(),
            items: Vec::new(),
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
            requested: Vec::new(),
        }
    }
}

/// A requested line: which dish, how many.
///
/// Missing fields default to zero. A zero or unknown `menu_item_id` simply resolves to nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderLine {
    pub menu_item_id: MenuItemId,
    pub quantity: i32,
}

impl OrderLine {
    pub fn new(menu_item_id: u32, quantity: i32) -> Self {
        Self {
            menu_item_id: MenuItemId(menu_item_id),
            quantity,
        }
    }
}

/// Payload for placing an order. Doubles as the HTTP request body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderCreate {
    pub table_number: u32,
    pub customer_name: String,
    pub items: Vec<OrderLine>,
}

impl OrderCreate {
    /// Table number, customer name and at least one line must be present.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.table_number == 0 || self.customer_name.is_empty() || self.items.is_empty() {
            return Err(OrderError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        }
        Ok(())
    }
}

/// Status change request. Doubles as the HTTP request body.
///
/// A missing or `null` `status` sets the empty string, like any other unrecognized value.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderUpdate {
    #[serde(default = "blank_status", deserialize_with = "status_or_blank")]
    pub status: OrderStatus,
}

fn blank_status() -> OrderStatus {
    OrderStatus::Other(String::new())
}

fn status_or_blank<'de, D>(deserializer: D) -> Result<OrderStatus, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let status = Option::<String>::deserialize(deserializer)?;
    Ok(status.map(OrderStatus::from).unwrap_or_else(blank_status))
}
