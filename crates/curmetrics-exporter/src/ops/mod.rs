//! Operational HTTP endpoints.
//!
//! - `/healthz`       : liveness
//! - `/metrics`       : Prometheus text format
//! - `/metrics.json`  : full snapshot as JSON
//! - `/gauges/:name`  : one gauge by catalog name

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use curmetrics_core::{Metric, MetricValue};

use crate::app_state::AppState;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let snapshot = state.registry().snapshot();
    let body = state.renderer().render(&snapshot);
    tracing::debug!(bytes = body.len(), "metrics scrape");

    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}

pub async fn metrics_json(State(state): State<AppState>) -> Response {
    Json(state.registry().snapshot()).into_response()
}

pub async fn gauge(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match name.parse::<Metric>() {
        Ok(metric) => Json(MetricValue {
            metric,
            name: metric.name(),
            description: metric.description(),
            value: state.registry().get(metric),
        })
        .into_response(),
        Err(e) => {
            tracing::debug!(%name, code = e.code(), "gauge lookup failed");
            (StatusCode::NOT_FOUND, e.code()).into_response()
        }
    }
}
