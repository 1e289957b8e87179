//! Rendering of gauge snapshots for monitoring backends.

pub mod prometheus;

pub use prometheus::PrometheusRenderer;
