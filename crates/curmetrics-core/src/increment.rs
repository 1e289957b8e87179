//! Scoped increment guard.
//!
//! An [`Increment`] adds its amount to a gauge when created and subtracts it
//! exactly once when it is dropped (normal exit, early return, `?`, or panic
//! unwind), unless it was retired earlier with [`Increment::destroy`].
//!
//! ```
//! use curmetrics_core::{CurrentMetrics, Metric};
//!
//! let reg = CurrentMetrics::new();
//! {
//!     let _query = reg.increment_one(Metric::Query);
//!     assert_eq!(reg.get(Metric::Query), 1);
//! }
//! assert_eq!(reg.get(Metric::Query), 0);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::catalog::Metric;
use crate::registry::Value;

/// Live contribution of one activity to one gauge.
///
/// The slot is `None` once the guard is empty (destroyed, taken from, or
/// built with [`Increment::empty`]); an empty guard never touches a
/// registry again.
#[must_use = "dropping the guard immediately undoes the increment"]
pub struct Increment<'a> {
    target: Option<(Metric, &'a AtomicI64)>,
    amount: Value,
}

impl<'a> Increment<'a> {
    pub(crate) fn new(metric: Metric, slot: &'a AtomicI64, amount: Value) -> Self {
        slot.fetch_add(amount, Ordering::Relaxed);
        Self {
            target: Some((metric, slot)),
            amount,
        }
    }

    /// A guard that owns nothing.
    pub const fn empty() -> Self {
        Self {
            target: None,
            amount: 0,
        }
    }

    /// Amount currently contributed.
    pub fn amount(&self) -> Value {
        self.amount
    }

    /// Whether this guard still owes a subtraction.
    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Gauge this guard contributes to, while active.
    pub fn metric(&self) -> Option<Metric> {
        self.target.map(|(m, _)| m)
    }

    /// Re-base the contribution to `new_amount`, applying only the delta.
    /// On an empty guard this does nothing.
    pub fn change_to(&mut self, new_amount: Value) {
        let Some((_, slot)) = self.target else { return; };
        slot.fetch_add(new_amount.wrapping_sub(self.amount), Ordering::Relaxed);
        self.amount = new_amount;
    }

    /// Subtract the contribution now instead of at drop. Idempotent.
    pub fn destroy(&mut self) {
        if let Some((_, slot)) = self.target.take() {
            slot.fetch_sub(self.amount, Ordering::Relaxed);
        }
    }

    /// Move the responsibility out of `self`, leaving an empty guard behind.
    ///
    /// Useful when the guard lives in a place that must stay initialized,
    /// such as a struct field.
    pub fn take(&mut self) -> Increment<'a> {
        std::mem::take(self)
    }
}

impl Default for Increment<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl Drop for Increment<'_> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl fmt::Debug for Increment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Increment")
            .field("metric", &self.metric())
            .field("amount", &self.amount)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{CurrentMetrics, Metric};

    #[test]
    fn drop_undoes_increment() {
        let reg = CurrentMetrics::new();
        {
            let inc = reg.increment(Metric::OpenFileForRead, 3);
            assert_eq!(reg.get(Metric::OpenFileForRead), 3);
            assert!(inc.is_active());
            assert_eq!(inc.metric(), Some(Metric::OpenFileForRead));
        }
        assert_eq!(reg.get(Metric::OpenFileForRead), 0);
    }

    #[test]
    fn destroy_is_idempotent() {
        let reg = CurrentMetrics::new();
        let mut inc = reg.increment(Metric::Merge, 2);
        inc.destroy();
        assert_eq!(reg.get(Metric::Merge), 0);
        inc.destroy();
        assert!(!inc.is_active());
        drop(inc);
        assert_eq!(reg.get(Metric::Merge), 0);
    }

    #[test]
    fn take_leaves_empty_guard() {
        let reg = CurrentMetrics::new();
        let mut src = reg.increment_one(Metric::Query);
        let dst = src.take();
        assert!(!src.is_active());
        assert!(dst.is_active());
        assert_eq!(reg.get(Metric::Query), 1);

        drop(src);
        assert_eq!(reg.get(Metric::Query), 1);
        drop(dst);
        assert_eq!(reg.get(Metric::Query), 0);
    }

    #[test]
    fn assigning_over_live_guard_retires_it() {
        let reg = CurrentMetrics::new();
        let mut slot = reg.increment(Metric::Read, 5);
        assert!(slot.is_active());
        assert_eq!(reg.get(Metric::Read), 5);
        slot = reg.increment(Metric::Read, 1);
        assert_eq!(reg.get(Metric::Read), 1);
        drop(slot);
        assert_eq!(reg.get(Metric::Read), 0);
    }

    #[test]
    fn change_to_applies_only_delta() {
        let reg = CurrentMetrics::new();
        reg.set(Metric::UncompressedCacheBytes, 100);

        let mut inc = reg.increment(Metric::UncompressedCacheBytes, 10);
        for k in [50, 5, 0, 64] {
            inc.change_to(k);
            assert_eq!(reg.get(Metric::UncompressedCacheBytes), 100 + k);
            assert_eq!(inc.amount(), k);
        }
        drop(inc);
        assert_eq!(reg.get(Metric::UncompressedCacheBytes), 100);
    }

    #[test]
    fn empty_guard_is_inert() {
        let reg = CurrentMetrics::new();
        let mut inc = super::Increment::empty();
        inc.change_to(10);
        inc.destroy();
        assert_eq!(inc.amount(), 0);
        assert_eq!(inc.metric(), None);
        drop(inc);
        assert!(reg.iter().all(|(_, v)| v == 0));
    }
}
