//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cart::CartError;
use checkout::CheckoutError;
use thiserror::Error;

/// API-level error type that maps to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found.
    #[error("{0}")]
    NotFound(String),

    /// A query or body parameter is missing, non-numeric, or not positive.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// The request body is not valid JSON for the endpoint.
    #[error("Invalid JSON payload")]
    MalformedPayload,

    /// The product exists but has no units left.
    #[error("Product out of stock: {0}")]
    OutOfStock(String),

    /// Cart aggregator error.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Checkout protocol error.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, body) = match self {
            ApiError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "error": message }),
            ),
            ApiError::Checkout(CheckoutError::Stock(_)) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "ok": false, "error": message }),
            ),
            ApiError::InvalidParameter(_)
            | ApiError::MalformedPayload
            | ApiError::OutOfStock(_)
            | ApiError::Cart(_)
            | ApiError::Checkout(CheckoutError::EmptyCart) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": message }),
            ),
        };

        tracing::debug!(status = status.as_u16(), error = %message, "request rejected");
        (status, axum::Json(body)).into_response()
    }
}
