//! Top-level facade crate for curmetrics.
//!
//! Re-exports the core registry and the exporter so users can depend on a single crate.

pub mod core {
    pub use curmetrics_core::*;
}

pub mod exporter {
    pub use curmetrics_exporter::*;
}

pub use curmetrics_core::{Increment, Metric};
