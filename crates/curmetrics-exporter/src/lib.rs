//! curmetrics exporter library entry.
//!
//! Exposes the gauge registry to monitoring backends: strict YAML config,
//! Prometheus/JSON rendering, and the axum router serving them. Consumed by
//! the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
