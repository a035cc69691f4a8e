//! Prometheus metrics endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use metrics_exporter_prometheus::PrometheusHandle;

use crate::state::AppState;

/// State for the metrics route: the exporter handle plus the store, whose
/// gauges are refreshed on every scrape.
#[derive(Clone)]
pub struct MetricsState {
    pub handle: PrometheusHandle,
    pub app: Arc<AppState>,
}

/// GET /metrics: returns Prometheus-formatted metrics.
pub async fn get(State(metrics_state): State<MetricsState>) -> impl IntoResponse {
    let app = &metrics_state.app;
    metrics::gauge!("catalog_products").set(app.store.product_count() as f64);
    metrics::gauge!("catalog_stock_units").set(
        app.store
            .list()
            .iter()
            .map(|p| f64::from(p.stock()))
            .sum::<f64>(),
    );
    metrics::gauge!("active_carts").set(app.sessions.cart_count() as f64);

    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics_state.handle.render(),
    )
}
