//! Process-wide registry. Kept in its own test binary so no other test
//! touches the global gauges.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use curmetrics_core::{self as cm, Metric};

#[test]
fn global_registry_lifecycle() {
    for m in Metric::ALL {
        assert_eq!(cm::get(m), 0, "{m} not zero at start");
    }

    cm::set(Metric::MemoryTracking, 1000);
    cm::add(Metric::MemoryTracking, 500);
    cm::sub(Metric::MemoryTracking, 200);
    assert_eq!(cm::get(Metric::MemoryTracking), 1300);

    {
        let _q = cm::increment(Metric::Query, 1);
        assert_eq!(cm::global().get(Metric::Query), 1);
        assert_eq!(cm::global().snapshot().get(Metric::Query), Some(1));
    }
    assert_eq!(cm::get(Metric::Query), 0);

    assert_eq!(cm::count(), Metric::COUNT);
    assert_eq!(cm::describe(Metric::TCPConnection), Metric::TCPConnection.description());
}
