//! Point-in-time copy of every gauge, for reporting.

use serde::Serialize;

use crate::catalog::Metric;
use crate::registry::Value;

/// One gauge as seen by a reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricValue {
    pub metric: Metric,
    pub name: &'static str,
    pub description: &'static str,
    pub value: Value,
}

/// Values of all gauges in catalog order.
///
/// Each slot is read once; slots are not read at the same instant, so under
/// concurrent mutation the snapshot is only approximately consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    entries: Vec<MetricValue>,
}

impl Snapshot {
    pub fn get(&self, metric: Metric) -> Option<Value> {
        self.entries
            .iter()
            .find(|e| e.metric == metric)
            .map(|e| e.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetricValue> {
        self.entries.iter()
    }

    /// Entries whose value is not zero.
    pub fn non_zero(&self) -> impl Iterator<Item = &MetricValue> {
        self.entries.iter().filter(|e| e.value != 0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Metric, Value)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (Metric, Value)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(metric, value)| MetricValue {
                metric,
                name: metric.name(),
                description: metric.description(),
                value,
            })
            .collect();
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a MetricValue;
    type IntoIter = std::slice::Iter<'a, MetricValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::{CurrentMetrics, Metric};

    #[test]
    fn snapshot_copies_every_gauge() {
        let reg = CurrentMetrics::new();
        reg.set(Metric::MarkCacheFiles, 12);
        let _q = reg.increment_one(Metric::Query);

        let snap = reg.snapshot();
        assert_eq!(snap.len(), Metric::COUNT);
        assert_eq!(snap.get(Metric::MarkCacheFiles), Some(12));
        assert_eq!(snap.get(Metric::Query), Some(1));

        let names: Vec<_> = snap.non_zero().map(|e| e.name).collect();
        assert_eq!(names, vec!["Query", "MarkCacheFiles"]);
    }

    #[test]
    fn snapshot_is_detached_from_registry() {
        let reg = CurrentMetrics::new();
        reg.set(Metric::Merge, 1);
        let snap = reg.snapshot();
        reg.set(Metric::Merge, 9);
        assert_eq!(snap.get(Metric::Merge), Some(1));
    }

    #[test]
    fn serializes_to_json() {
        let reg = CurrentMetrics::new();
        reg.set(Metric::TCPConnection, 4);
        let json = serde_json::to_value(reg.snapshot()).unwrap();
        let first = &json["entries"][9];
        assert_eq!(first["metric"], "TCPConnection");
        assert_eq!(first["name"], "TCPConnection");
        assert_eq!(first["value"], 4);
        assert_eq!(first["description"], "Number of connections to the native TCP server");
    }
}
