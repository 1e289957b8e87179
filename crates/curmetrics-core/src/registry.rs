//! Gauge registry: one atomic `i64` per catalog entry.
//!
//! Every mutation is a single relaxed atomic operation. Relaxed is enough
//! for gauges: each read-modify-write is still indivisible, so concurrent
//! adds and subtracts are never lost, while readers only get an approximate
//! snapshot with no ordering relative to other slots.

use std::sync::atomic::{AtomicI64, Ordering};

use crate::catalog::Metric;
use crate::increment::Increment;
use crate::snapshot::Snapshot;

/// Gauge value type.
pub type Value = i64;

/// Table of current gauge values.
///
/// A process-wide instance is available through [`global`]. Components that
/// want isolation (tests, embedded engines) construct their own and pass a
/// reference around.
pub struct CurrentMetrics {
    values: [AtomicI64; Metric::COUNT],
}

impl CurrentMetrics {
    /// All gauges start at zero.
    pub const fn new() -> Self {
        #[allow(clippy::declare_interior_mutable_const)]
        const ZERO: AtomicI64 = AtomicI64::new(0);
        Self {
            values: [ZERO; Metric::COUNT],
        }
    }

    #[inline]
    pub(crate) fn slot(&self, metric: Metric) -> &AtomicI64 {
        &self.values[metric.index()]
    }

    /// Overwrite the gauge. Last writer wins against concurrent adds, so use
    /// this only for gauges recomputed wholesale by a single owner.
    pub fn set(&self, metric: Metric, value: Value) {
        tracing::trace!(%metric, value, "gauge set");
        self.slot(metric).store(value, Ordering::Relaxed);
    }

    /// Atomically add `delta`.
    #[inline]
    pub fn add(&self, metric: Metric, delta: Value) {
        self.slot(metric).fetch_add(delta, Ordering::Relaxed);
    }

    /// Atomically subtract `delta`.
    #[inline]
    pub fn sub(&self, metric: Metric, delta: Value) {
        self.add(metric, delta.wrapping_neg());
    }

    /// Increment by 1.
    #[inline]
    pub fn inc(&self, metric: Metric) {
        self.add(metric, 1);
    }

    /// Decrement by 1.
    #[inline]
    pub fn dec(&self, metric: Metric) {
        self.add(metric, -1);
    }

    /// Current value.
    #[inline]
    pub fn get(&self, metric: Metric) -> Value {
        self.slot(metric).load(Ordering::Relaxed)
    }

    /// `(metric, value)` for every gauge, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, Value)> + '_ {
        Metric::ALL.into_iter().map(move |m| (m, self.get(m)))
    }

    /// Read every gauge once.
    pub fn snapshot(&self) -> Snapshot {
        let snap: Snapshot = self.iter().collect();
        tracing::trace!(non_zero = snap.non_zero().count(), "gauge snapshot taken");
        snap
    }

    /// Add `amount` to `metric` until the returned guard is dropped or
    /// destroyed.
    pub fn increment(&self, metric: Metric, amount: Value) -> Increment<'_> {
        Increment::new(metric, self.slot(metric), amount)
    }

    /// `increment(metric, 1)`.
    pub fn increment_one(&self, metric: Metric) -> Increment<'_> {
        self.increment(metric, 1)
    }
}

impl Default for CurrentMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CurrentMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(m, v)| (m.name(), v)))
            .finish()
    }
}

static GLOBAL: CurrentMetrics = CurrentMetrics::new();

/// Process-wide registry. Lives until the process exits.
#[inline]
pub fn global() -> &'static CurrentMetrics {
    &GLOBAL
}

/// [`CurrentMetrics::set`] on the process-wide registry.
#[inline]
pub fn set(metric: Metric, value: Value) {
    GLOBAL.set(metric, value);
}

/// [`CurrentMetrics::add`] on the process-wide registry.
#[inline]
pub fn add(metric: Metric, delta: Value) {
    GLOBAL.add(metric, delta);
}

/// [`CurrentMetrics::sub`] on the process-wide registry.
#[inline]
pub fn sub(metric: Metric, delta: Value) {
    GLOBAL.sub(metric, delta);
}

/// [`CurrentMetrics::get`] on the process-wide registry.
#[inline]
pub fn get(metric: Metric) -> Value {
    GLOBAL.get(metric)
}

/// [`CurrentMetrics::increment`] on the process-wide registry.
#[inline]
pub fn increment(metric: Metric, amount: Value) -> Increment<'static> {
    GLOBAL.increment(metric, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_registry_is_zero() {
        let reg = CurrentMetrics::new();
        assert!(reg.iter().all(|(_, v)| v == 0));
        assert_eq!(reg.iter().count(), Metric::COUNT);
    }

    #[test]
    fn set_add_sub() {
        let reg = CurrentMetrics::new();
        reg.set(Metric::MemoryTracking, 1000);
        reg.add(Metric::MemoryTracking, 500);
        reg.sub(Metric::MemoryTracking, 200);
        assert_eq!(reg.get(Metric::MemoryTracking), 1300);

        // other slots untouched
        assert_eq!(reg.get(Metric::Query), 0);
    }

    #[test]
    fn inc_dec_and_negative_values() {
        let reg = CurrentMetrics::new();
        reg.inc(Metric::Merge);
        reg.inc(Metric::Merge);
        reg.dec(Metric::Merge);
        assert_eq!(reg.get(Metric::Merge), 1);

        reg.sub(Metric::ReadonlyReplica, 3);
        assert_eq!(reg.get(Metric::ReadonlyReplica), -3);
    }

    #[test]
    fn set_overwrites() {
        let reg = CurrentMetrics::new();
        reg.add(Metric::MarkCacheBytes, 42);
        reg.set(Metric::MarkCacheBytes, 7);
        assert_eq!(reg.get(Metric::MarkCacheBytes), 7);
    }

    #[test]
    fn debug_lists_names() {
        let reg = CurrentMetrics::new();
        reg.set(Metric::TCPConnection, 5);
        let s = format!("{reg:?}");
        assert!(s.contains("\"TCPConnection\": 5"));
    }
}
