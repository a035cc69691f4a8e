//! Catalog read endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use common::ProductId;
use domain::Product;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::routes::query_param;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().value(),
            name: product.name().to_string(),
            description: product.description().to_string(),
            price: product.price().as_decimal(),
            stock: product.stock(),
        }
    }
}

/// GET /products: list every product in the catalog.
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<ProductResponse>> {
    Json(state.store.list().iter().map(ProductResponse::from).collect())
}

/// GET /product?id={id}: look up a single product.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<ProductResponse>, ApiError> {
    let id = ProductId::new(query_param(query.id.as_deref(), "id")?);
    let product = state
        .store
        .find_by_id(id)
        .ok_or_else(|| ApiError::NotFound(format!("Product not found: {id}")))?;
    Ok(Json(ProductResponse::from(&product)))
}
