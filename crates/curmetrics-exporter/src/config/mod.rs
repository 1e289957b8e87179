//! Exporter config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use curmetrics_core::error::{CurrentMetricsError, Result};

pub use schema::{ExporterConfig, ExporterSection};

pub fn load_from_file(path: &str) -> Result<ExporterConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| CurrentMetricsError::Io(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    let cfg: ExporterConfig = serde_yaml::from_str(s)
        .map_err(|e| CurrentMetricsError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Like [`load_from_file`], but a missing file yields the defaults.
pub fn load_or_default(path: &str) -> Result<ExporterConfig> {
    if !Path::new(path).exists() {
        tracing::warn!(%path, "config file not found, using defaults");
        return Ok(ExporterConfig::default());
    }
    load_from_file(path)
}
