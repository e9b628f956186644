//! Request counters and a sliding window of recent search latencies.

use serde::Serialize;
use std::collections::VecDeque;
use std::time::Duration;

/// Number of recent search latencies kept for percentile reporting.
pub const LATENCY_WINDOW: usize = 1024;

/// Latency statistics over the current window, in microseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LatencySummary {
    pub samples: usize,
    pub avg_us: f64,
    pub p50_us: f64,
    pub p95_us: f64,
    pub p99_us: f64,
}

/// Counts inserts and searches and keeps the last `capacity` search latencies.
///
/// Counters are lifetime totals; percentiles only cover the window, so memory
/// stays fixed no matter how many requests the server handles.
#[derive(Debug)]
pub struct MetricsCollector {
    recent_searches_us: VecDeque<f64>,
    capacity: usize,
    searches: u64,
    inserts: u64,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::with_capacity(LATENCY_WINDOW)
    }

    /// Create a collector keeping at most `capacity` latency samples (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            recent_searches_us: VecDeque::with_capacity(capacity),
            capacity,
            searches: 0,
            inserts: 0,
        }
    }

    pub fn record_search(&mut self, elapsed: Duration) {
        self.searches += 1;
        if self.recent_searches_us.len() == self.capacity {
            self.recent_searches_us.pop_front();
        }
        self.recent_searches_us
            .push_back(elapsed.as_secs_f64() * 1_000_000.0);
    }

    pub fn record_insert(&mut self) {
        self.inserts += 1;
    }

    pub fn searches(&self) -> u64 {
        self.searches
    }

    pub fn inserts(&self) -> u64 {
        self.inserts
    }

    /// Number of latency samples currently held.
    pub fn window_len(&self) -> usize {
        self.recent_searches_us.len()
    }

    /// Average and nearest-rank percentiles over the window. Sorts once.
    pub fn latency_summary(&self) -> LatencySummary {
        if self.recent_searches_us.is_empty() {
            return LatencySummary::default();
        }

        let mut sorted: Vec<f64> = self.recent_searches_us.iter().copied().collect();
        sorted.sort_by(f64::total_cmp);

        let last = sorted.len() - 1;
        let at = |p: f64| sorted[((p / 100.0) * last as f64).round() as usize];

        LatencySummary {
            samples: sorted.len(),
            avg_us: sorted.iter().sum::<f64>() / sorted.len() as f64,
            p50_us: at(50.0),
            p95_us: at(95.0),
            p99_us: at(99.0),
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}
