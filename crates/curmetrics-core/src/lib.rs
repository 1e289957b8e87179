//! curmetrics core: the current-metrics catalog, gauge registry, and scoped
//! increment guard.
//!
//! A gauge holds the *current* level of some activity (queries executing,
//! files open, bytes cached). Code that starts an activity takes an
//! [`Increment`] guard; the gauge goes back down when the guard is dropped,
//! on every exit path.
//!
//! This crate carries no runtime or transport dependencies so it can sit on
//! the hot path of any engine component.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod catalog;
pub mod error;
pub mod increment;
pub mod registry;
pub mod snapshot;

pub use catalog::{count, describe, Metric};
pub use error::{CurrentMetricsError, Result};
pub use increment::Increment;
pub use registry::{add, get, global, increment, set, sub, CurrentMetrics, Value};
pub use snapshot::{MetricValue, Snapshot};
