//! Checkout endpoint.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use chrono::{DateTime, Utc};
use common::CustomerId;
use domain::Order;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::routes::carts::CartItemResponse;
use crate::routes::{json_object, positive};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[serde(default)]
    pub customer_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: u64,
    pub items: Vec<CartItemResponse>,
    pub total: f64,
    pub placed_at: DateTime<Utc>,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id().value(),
            items: order.lines().iter().map(CartItemResponse::from).collect(),
            total: order.total().as_decimal(),
            placed_at: order.placed_at(),
        }
    }
}

/// POST /checkout: turn the customer's cart into an order.
#[tracing::instrument(skip(state, body))]
pub async fn checkout(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<OrderResponse>, ApiError> {
    let req: CheckoutRequest = json_object(&body)?;
    let customer_id = CustomerId::new(positive(req.customer_id, "customerId")?);

    let order = state.checkout.checkout(customer_id)?;
    Ok(Json(OrderResponse::from(&order)))
}
