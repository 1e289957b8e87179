//! Axum router wiring for the exporter endpoints.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .route("/metrics.json", get(ops::metrics_json))
        .route("/gauges/:name", get(ops::gauge))
        .with_state(state)
}
