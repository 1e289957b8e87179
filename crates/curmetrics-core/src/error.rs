//! Shared error type across curmetrics crates.
//!
//! Gauge mutation itself never fails; these errors only come from the edges
//! where untyped input enters (metric names, exporter configuration).

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, CurrentMetricsError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum CurrentMetricsError {
    #[error("unknown metric: {0}")]
    UnknownMetric(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("io: {0}")]
    Io(String),
}

impl CurrentMetricsError {
    /// Stable machine-readable code, used in logs and HTTP error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            CurrentMetricsError::UnknownMetric(_) => "UNKNOWN_METRIC",
            CurrentMetricsError::InvalidConfig(_) => "INVALID_CONFIG",
            CurrentMetricsError::UnsupportedVersion(_) => "UNSUPPORTED_VERSION",
            CurrentMetricsError::Io(_) => "IO",
        }
    }
}
