//! Cache Statistics Module
//!
//! Tracks cache activity: read hits and misses plus every way an entry leaves.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of reads that returned a value
    pub hits: u64,
    /// Number of reads that returned nothing (absent or expired)
    pub misses: u64,
    /// Number of entries removed because their TTL elapsed
    pub expirations: u64,
    /// Number of entries evicted by the capacity pass
    pub overflows: u64,
    /// Number of entries removed by an explicit delete
    pub deletions: u64,
    /// Current number of entries across all namespaces
    pub total_entries: usize,
    /// Current number of non-empty namespaces
    pub namespaces: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    pub fn record_overflow(&mut self) {
        self.overflows += 1;
    }

    pub fn record_deletion(&mut self) {
        self.deletions += 1;
    }
}
