//! Query instrumentation for the event store.

use metrics::histogram;
use std::time::Instant;

/// Histogram recording per-query latency, labeled by query name.
const QUERY_DURATION_HISTOGRAM: &str = "event_store_query_duration_seconds";

/// Times one event-store query, recording its duration when dropped.
///
/// Recording on drop means early returns and error paths are counted
/// alongside successful queries.
pub struct QueryTimer {
    query: &'static str,
    started: Instant,
}

impl QueryTimer {
    /// Starts timing the named query.
    pub fn start(query: &'static str) -> Self {
        Self {
            query,
            started: Instant::now(),
        }
    }
}

impl Drop for QueryTimer {
    fn drop(&mut self) {
        histogram!(QUERY_DURATION_HISTOGRAM, "query" => self.query)
            .record(self.started.elapsed().as_secs_f64());
    }
}
