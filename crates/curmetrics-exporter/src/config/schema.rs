use std::net::SocketAddr;

use serde::Deserialize;
use curmetrics_core::error::{CurrentMetricsError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub exporter: ExporterSection,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            version: 1,
            exporter: ExporterSection::default(),
        }
    }
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(CurrentMetricsError::UnsupportedVersion(self.version));
        }

        self.exporter.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Prefix for exported metric names; empty means no prefix.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Export gauges that currently read zero.
    #[serde(default = "default_include_zero")]
    pub include_zero: bool,
}

impl Default for ExporterSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            namespace: default_namespace(),
            include_zero: default_include_zero(),
        }
    }
}

impl ExporterSection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.parse::<SocketAddr>().is_err() {
            return Err(CurrentMetricsError::InvalidConfig(format!(
                "exporter.listen must be a socket address, got {:?}",
                self.listen
            )));
        }
        if !is_valid_namespace(&self.namespace) {
            return Err(CurrentMetricsError::InvalidConfig(format!(
                "exporter.namespace must match [a-zA-Z_:][a-zA-Z0-9_:]*, got {:?}",
                self.namespace
            )));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen
            .parse()
            .map_err(|e| CurrentMetricsError::InvalidConfig(format!("exporter.listen: {e}")))
    }
}

fn is_valid_namespace(ns: &str) -> bool {
    let mut chars = ns.chars();
    match chars.next() {
        None => true,
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
        }
        Some(_) => false,
    }
}

fn default_listen() -> String {
    "127.0.0.1:9363".into()
}
fn default_namespace() -> String {
    "curmetrics".into()
}
fn default_include_zero() -> bool {
    true
}
