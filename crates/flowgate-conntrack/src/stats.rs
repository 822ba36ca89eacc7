//! Flow Table Statistics
//!
//! Lock-free counters for table activity, sampled without stopping the
//! dataplane.

use std::sync::atomic::{AtomicU64, Ordering};

/// Table counters (cache-line aligned)
#[derive(Debug)]
#[repr(C, align(64))]
pub struct TableStats {
    pub flows_created: AtomicU64,
    pub flows_updated: AtomicU64,
    pub evictions: AtomicU64,
    pub lookup_hits: AtomicU64,
    pub lookup_misses: AtomicU64,
}

impl Default for TableStats {
    fn default() -> Self {
        Self {
            flows_created: AtomicU64::new(0),
            flows_updated: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
            lookup_hits: AtomicU64::new(0),
            lookup_misses: AtomicU64::new(0),
        }
    }
}

impl TableStats {
    #[inline(always)]
    pub fn record_create(&self) {
        self.flows_created.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn record_update(&self) {
        self.flows_updated.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn record_hit(&self) {
        self.lookup_hits.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn record_miss(&self) {
        self.lookup_misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Copy the counters into a plain snapshot
    pub fn snapshot(&self) -> TableStatsSnapshot {
        TableStatsSnapshot {
            flows_created: self.flows_created.load(Ordering::Relaxed),
            flows_updated: self.flows_updated.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            lookup_hits: self.lookup_hits.load(Ordering::Relaxed),
            lookup_misses: self.lookup_misses.load(Ordering::Relaxed),
        }
    }
}

/// Stats snapshot (non-atomic)
#[derive(Debug, Clone, Default)]
pub struct TableStatsSnapshot {
    pub flows_created: u64,
    pub flows_updated: u64,
    pub evictions: u64,
    pub lookup_hits: u64,
    pub lookup_misses: u64,
}

impl TableStatsSnapshot {
    /// Fraction of lookups that found a tracked flow
    pub fn hit_rate(&self) -> f64 {
        let total = self.lookup_hits + self.lookup_misses;
        if total == 0 {
            return 0.0;
        }
        self.lookup_hits as f64 / total as f64
    }
}
