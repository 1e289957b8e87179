//! curmetrics exporter
//!
//! Serves the process-wide gauge registry over HTTP.
//! - Config: `$CURMETRICS_CONFIG` or `curmetrics.yaml` (defaults if absent)
//! - Endpoints: /healthz, /metrics, /metrics.json, /gauges/:name

use tracing_subscriber::{fmt, EnvFilter};

use curmetrics_exporter::{app_state, config, router};

const DEFAULT_CONFIG_PATH: &str = "curmetrics.yaml";

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::var("CURMETRICS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let cfg = config::load_or_default(&path).expect("config load failed");
    let listen = cfg.exporter.listen_addr().expect("exporter.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg, curmetrics_core::global());
    let app = router::build_router(state);

    tracing::info!(%listen, gauges = curmetrics_core::count(), "curmetrics-exporter starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
