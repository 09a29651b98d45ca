//! Order routes: placing orders, the kitchen queue, status changes and history.

use crate::api::{ApiError, AppState, MessageResponse};
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate, REQUIRED_FIELDS_MESSAGE};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use tracing::{debug, error, warn};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/orders", post(create_order))
        .route("/api/orders/kitchen", get(list_kitchen))
        .route("/api/orders/history", get(list_history))
        .route("/api/orders/clear", delete(clear_history))
        .route("/api/orders/{id}/status", put(update_status))
}

/// `POST /api/orders`
///
/// A body that cannot be read as an order gets the same answer as one with missing fields.
async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<OrderCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let Json(params) = payload.map_err(|rejection| {
        debug!(%rejection, "Unreadable order body");
        ApiError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())
    })?;

    let order = state.orders.create_order(params).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// `GET /api/orders/kitchen`
async fn list_kitchen(State(state): State<AppState>) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(state.orders.list_active().await?))
}

/// `GET /api/orders/history`
async fn list_history(State(state): State<AppState>) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(state.orders.list_history().await?))
}

/// `PUT /api/orders/{id}/status`
///
/// The body is checked first. An id that matches nothing, including one that is not a
/// number, still answers 200.
async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<OrderUpdate>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(OrderUpdate { status }) = payload.map_err(|rejection| {
        debug!(%rejection, "Unreadable status body");
        ApiError::MalformedRequest
    })?;

    match id.parse::<u32>() {
        Ok(raw) => {
            state
                .orders
                .update_status(OrderId(raw), status.clone())
                .await
                .map_err(|e| {
                    error!(order_id = raw, error = %e, "Status update failed");
                    ApiError::UpdateFailed
                })?;
        }
        Err(_) => warn!(%id, "Status update for non-numeric id ignored"),
    }

    Ok(Json(MessageResponse::new(format!(
        "status updated to {status}"
    ))))
}

/// `DELETE /api/orders/clear`
async fn clear_history(State(state): State<AppState>) -> Result<Json<MessageResponse>, ApiError> {
    state.orders.purge_history().await?;
    Ok(Json(MessageResponse::new("history cleared")))
}
