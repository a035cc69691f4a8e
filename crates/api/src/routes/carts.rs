//! Cart endpoints.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use common::{CustomerId, ProductId};
use domain::CartLine;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::routes::{json_object, positive, query_param};
use crate::state::AppState;

// -- Request types --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    #[serde(default)]
    pub customer_id: i64,
    #[serde(default)]
    pub product_id: i64,
    #[serde(default = "default_qty")]
    pub qty: i64,
}

fn default_qty() -> i64 {
    1
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartQuery {
    pub customer_id: Option<String>,
}

// -- Response types --

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemResponse {
    pub product_id: u32,
    pub product_name: String,
    pub unit_price: f64,
    pub qty: u32,
    pub subtotal: f64,
}

impl From<&CartLine> for CartItemResponse {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id.value(),
            product_name: line.product_name.clone(),
            unit_price: line.unit_price.as_decimal(),
            qty: line.quantity,
            subtotal: line.subtotal().as_decimal(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub customer_id: u32,
    pub items: Vec<CartItemResponse>,
    pub subtotal: f64,
}

// -- Handlers --

/// POST /cart/add: add units of a product to a customer's cart.
#[tracing::instrument(skip(state, body))]
pub async fn add(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<OkResponse>, ApiError> {
    let req: AddToCartRequest = json_object(&body)?;

    let customer_id = CustomerId::new(positive(req.customer_id, "customerId")?);
    let product_id = ProductId::new(positive(req.product_id, "productId")?);
    let qty = positive(req.qty, "qty")?;

    let product = state
        .store
        .find_by_id(product_id)
        .ok_or_else(|| ApiError::NotFound(format!("Product not found: {product_id}")))?;
    if !product.is_in_stock() {
        return Err(ApiError::OutOfStock(product.name().to_string()));
    }

    state.sessions.add_product(customer_id, &product, qty)?;
    tracing::info!(%customer_id, %product_id, qty, "item added to cart");

    Ok(Json(OkResponse { ok: true }))
}

/// GET /cart?customerId={id}: view a customer's cart.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CartQuery>,
) -> Result<Json<CartResponse>, ApiError> {
    let customer_id = CustomerId::new(query_param(query.customer_id.as_deref(), "customerId")?);

    let lines = state.sessions.get_cart(customer_id);
    let subtotal = lines.iter().map(CartLine::subtotal).sum::<common::Money>();

    Ok(Json(CartResponse {
        customer_id: customer_id.value(),
        items: lines.iter().map(CartItemResponse::from).collect(),
        subtotal: subtotal.as_decimal(),
    }))
}
