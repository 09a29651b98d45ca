use crate::api::{ApiError, AppState};
use crate::model::MenuItem;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/menu", get(list_menu))
}

/// `GET /api/menu`
async fn list_menu(State(state): State<AppState>) -> Result<Json<Vec<MenuItem>>, ApiError> {
    let items = state.menu.list_menu().await?;
    Ok(Json(items))
}
