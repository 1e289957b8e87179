//! Shared application state for the exporter.

use std::sync::Arc;

use curmetrics_core::CurrentMetrics;

use crate::config::ExporterConfig;
use crate::obs::PrometheusRenderer;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    registry: &'static CurrentMetrics,
    renderer: PrometheusRenderer,
}

impl AppState {
    /// `registry` is normally [`curmetrics_core::global`]; tests pass an
    /// isolated, leaked instance.
    pub fn new(cfg: ExporterConfig, registry: &'static CurrentMetrics) -> Self {
        let renderer = PrometheusRenderer::new(&cfg.exporter.namespace, cfg.exporter.include_zero);
        Self {
            inner: Arc::new(AppStateInner { cfg, registry, renderer }),
        }
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> &'static CurrentMetrics {
        self.inner.registry
    }

    pub fn renderer(&self) -> &PrometheusRenderer {
        &self.inner.renderer
    }
}
