//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub products: usize,
    pub active_carts: usize,
}

/// GET /health: liveness plus a glance at the in-memory state.
pub async fn check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        products: state.store.product_count(),
        active_carts: state.sessions.cart_count(),
    })
}
