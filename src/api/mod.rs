//! # HTTP API
//!
//! axum routes over the restaurant clients. Handlers only translate between HTTP and the
//! client calls; all order rules live in the actors.
//!
//! | Method | Path | Response |
//! |---|---|---|
//! | GET | `/api/menu` | every menu item |
//! | POST | `/api/orders` | the created order (201) |
//! | GET | `/api/orders/kitchen` | orders not yet completed |
//! | PUT | `/api/orders/{id}/status` | `{message}` |
//! | GET | `/api/orders/history` | completed orders |
//! | DELETE | `/api/orders/clear` | `{message}` |
//! | GET | `/health` | `{status, version}` |
//! | GET | `/`, `/kitchen` | static pages |

pub mod error;
pub mod health;
pub mod menu;
pub mod orders;

pub use error::ApiError;

use crate::clients::{MenuClient, OrderClient};
use crate::lifecycle::RestaurantSystem;
use axum::Router;
use serde::Serialize;
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

/// Shared handler state: clones of the actor clients.
#[derive(Clone)]
pub struct AppState {
    pub menu: MenuClient,
    pub orders: OrderClient,
}

impl AppState {
    pub fn new(system: &RestaurantSystem) -> Self {
        Self {
            menu: system.menu_client.clone(),
            orders: system.order_client.clone(),
        }
    }
}

/// `{"message": "..."}` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Build the full application: API routes, static pages, CORS and request tracing.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .merge(menu::router())
        .merge(orders::router())
        .merge(health::router())
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route_service("/kitchen", ServeFile::new(static_dir.join("kitchen.html")))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
