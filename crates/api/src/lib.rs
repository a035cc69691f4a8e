//! HTTP API server with observability for the online store.
//!
//! Provides REST endpoints for browsing the catalog, filling a cart and
//! checking out, with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use cart::SessionManager;
use catalog::{CatalogError, Store, demo_products};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::metrics::MetricsState;
pub use state::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(MetricsState {
            handle: metrics_handle,
            app: state.clone(),
        });

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/products", get(routes::products::list))
        .route("/product", get(routes::products::get))
        .route("/cart/add", post(routes::carts::add))
        .route("/cart", get(routes::carts::get))
        .route("/checkout", post(routes::orders::checkout))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state: the demo catalog and no carts.
pub fn create_default_state() -> Result<Arc<AppState>, CatalogError> {
    let store = Store::with_products(demo_products())?;
    tracing::info!(products = store.product_count(), "catalog seeded");
    Ok(Arc::new(AppState::new(store, SessionManager::new())))
}
