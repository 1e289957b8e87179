//! Metric catalog: the closed set of gauges the registry can track.
//!
//! Identifiers, names and descriptions are generated from a single table so
//! they cannot drift apart. Identifiers are dense (`0..Metric::COUNT`) and are
//! used directly as registry slot indices.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{CurrentMetricsError, Result};

macro_rules! define_metrics {
    ($( $name:ident => $desc:literal, )+) => {
        /// Gauge identifier.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub enum Metric {
            $( #[doc = $desc] $name, )+
        }

        impl Metric {
            /// Number of identifiers in the catalog.
            pub const COUNT: usize = [$( Metric::$name ),+].len();

            /// Every identifier, in catalog (index) order.
            pub const ALL: [Metric; Metric::COUNT] = [$( Metric::$name ),+];

            /// Stable textual name, e.g. `"Query"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $( Metric::$name => stringify!($name), )+
                }
            }

            /// Human-readable description.
            pub const fn description(self) -> &'static str {
                match self {
                    $( Metric::$name => $desc, )+
                }
            }
        }
    };
}

define_metrics! {
    Query => "Number of executing queries",
    Merge => "Number of executing background merges",
    ReplicatedFetch => "Number of data parts being fetched from replicas",
    ReplicatedSend => "Number of data parts being sent to replicas",
    ReplicatedChecks => "Number of data parts being checked for consistency",
    BackgroundPoolTask => "Number of active tasks in the background pool",
    DiskSpaceReservedForMerge => "Disk space reserved for currently running background merges, in bytes",
    DistributedSend => "Number of connections sending data to remote servers for distributed inserts",
    QueryPreempted => "Number of queries stopped and waiting due to priority",
    TCPConnection => "Number of connections to the native TCP server",
    HTTPConnection => "Number of connections to the HTTP server",
    InterserverConnection => "Number of connections from other replicas to fetch parts",
    OpenFileForRead => "Number of files open for reading",
    OpenFileForWrite => "Number of files open for writing",
    Read => "Number of read syscalls in flight",
    Write => "Number of write syscalls in flight",
    SendExternalTables => "Number of connections sending external tables to remote servers",
    QueryThread => "Number of query processing threads",
    ReadonlyReplica => "Number of replicated tables currently in read-only state",
    MemoryTracking => "Total memory allocated by the server, in bytes",
    MarkCacheBytes => "Total size of the mark cache, in bytes",
    MarkCacheFiles => "Number of mark files cached in the mark cache",
    UncompressedCacheBytes => "Total size of the uncompressed cache, in bytes",
    UncompressedCacheCells => "Number of cells in the uncompressed cache",
    ReplicasMaxQueueSize => "Maximum replication queue size across replicated tables",
    ReplicasMaxInsertsInQueue => "Maximum number of inserts queued for replication across tables",
    ReplicasMaxMergesInQueue => "Maximum number of merges queued for replication across tables",
    ReplicasSumQueueSize => "Sum of replication queue sizes across replicated tables",
    ReplicasSumInsertsInQueue => "Sum of inserts queued for replication across tables",
    ReplicasSumMergesInQueue => "Sum of merges queued for replication across tables",
    ReplicasMaxAbsoluteDelay => "Maximum replica lag behind the freshest part, in seconds",
    ReplicasMaxRelativeDelay => "Maximum lag relative to the freshest replica of the same table, in seconds",
    MaxPartCountForPartition => "Maximum number of data parts in any single partition",
}

impl Metric {
    /// Slot index in the registry.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Checked conversion from a raw slot index.
    pub fn from_index(index: usize) -> Option<Metric> {
        Metric::ALL.get(index).copied()
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = CurrentMetricsError;

    fn from_str(s: &str) -> Result<Self> {
        Metric::ALL
            .iter()
            .copied()
            .find(|m| m.name() == s)
            .ok_or_else(|| CurrentMetricsError::UnknownMetric(s.to_string()))
    }
}

/// Total number of metric identifiers.
#[inline]
pub const fn count() -> usize {
    Metric::COUNT
}

/// Description of `metric`.
#[inline]
pub const fn describe(metric: Metric) -> &'static str {
    metric.description()
}
