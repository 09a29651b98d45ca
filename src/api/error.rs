//! HTTP error type. Every failure is answered with `{"error": "<message>"}`.

use crate::menu_actor::MenuError;
use crate::order_actor::OrderError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or unreadable fields in a new order.
    #[error("{0}")]
    Validation(String),

    /// A body that is not the expected JSON.
    #[error("invalid JSON")]
    MalformedRequest,

    /// The status change could not be stored.
    #[error("failed to update order")]
    UpdateFailed,

    /// Any other failure behind the API. The detail is logged, not returned.
    #[error("internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedRequest => StatusCode::BAD_REQUEST,
            ApiError::UpdateFailed | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!(error = %detail, "Request failed");
        }
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::Validation(msg) => ApiError::Validation(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<MenuError> for ApiError {
    fn from(e: MenuError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_keeps_message_and_is_client_error() {
        let err = ApiError::from(OrderError::Validation("table number missing".into()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "table number missing");
    }

    #[test]
    fn infrastructure_errors_hide_detail() {
        let err = ApiError::from(OrderError::Storage("/data/orders.json: disk full".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "internal server error");
    }
}
