//! Prometheus text exposition of a gauge snapshot.
//!
//! Exported names are `<namespace>_<snake_case metric name>`, e.g.
//! `TCPConnection` becomes `curmetrics_tcp_connection`. Names are computed
//! once at construction so a scrape only formats values.

use std::fmt::Write;

use curmetrics_core::{Metric, Snapshot};

/// Helper to escape HELP text.
fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

/// `CamelCase` (with acronyms) to `snake_case`.
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

#[derive(Debug, Clone)]
pub struct PrometheusRenderer {
    names: Vec<String>,
    include_zero: bool,
}

impl PrometheusRenderer {
    pub fn new(namespace: &str, include_zero: bool) -> Self {
        let names = Metric::ALL
            .iter()
            .map(|m| {
                if namespace.is_empty() {
                    snake_case(m.name())
                } else {
                    format!("{namespace}_{}", snake_case(m.name()))
                }
            })
            .collect();
        Self { names, include_zero }
    }

    /// Exported name of `metric`.
    pub fn name(&self, metric: Metric) -> &str {
        &self.names[metric.index()]
    }

    /// Render in Prometheus text exposition format.
    pub fn render(&self, snapshot: &Snapshot) -> String {
        let mut out = String::with_capacity(snapshot.len() * 128);
        for e in snapshot {
            if e.value == 0 && !self.include_zero {
                continue;
            }
            let name = self.name(e.metric);
            let _ = writeln!(out, "# HELP {} {}", name, escape_help(e.description));
            let _ = writeln!(out, "# TYPE {} gauge", name);
            let _ = writeln!(out, "{} {}", name, e.value);
        }
        out
    }
}
