//! Bounded flow store
//!
//! Create-or-update access to [`Flow`]s by cookie, with strict
//! least-recently-touched eviction once the capacity bound is exceeded.
//!
//! Recency is tracked by an ordered map (hash map plus intrusive recency
//! list), so promotion and eviction are both O(1). Only `set_flow` counts as
//! a touch; `get_flow` never reorders entries.

use crate::flow::{Flow, FlowUpdate};
use crate::stats::{TableStats, TableStatsSnapshot};
use crate::DEFAULT_TABLE_CAPACITY;
use flowgate_common::{FlowCookie, FlowgateError, FlowgateResult};
use lru::LruCache;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Flow table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Maximum number of tracked flows
    pub capacity: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_TABLE_CAPACITY,
        }
    }
}

/// Bounded store of per-connection filtering decisions.
///
/// The table exclusively owns every flow it holds: flows are created on the
/// first `set_flow` for an unseen cookie, mutated in place on later calls,
/// and destroyed only by eviction or when the table is dropped. There is no
/// per-cookie removal.
///
/// # Thread Safety
///
/// A single mutex serializes each operation, so a read-modify-write of a
/// flow's fields and the eviction that may follow are atomic with respect to
/// other callers. Construct one table per pipeline and share it by
/// reference; the backing map is never process-global.
#[derive(Debug)]
pub struct FlowTable {
    flows: Mutex<LruCache<FlowCookie, Flow>>,
    stats: TableStats,
}

impl FlowTable {
    /// Create a table from config.
    ///
    /// A zero capacity is rejected; `capacity` is unsigned, so a negative
    /// bound is unrepresentable.
    pub fn new(config: TableConfig) -> FlowgateResult<Self> {
        let capacity = NonZeroUsize::new(config.capacity).ok_or_else(|| {
            FlowgateError::ConfigError("flow table capacity must be at least 1".to_string())
        })?;

        Ok(Self {
            flows: Mutex::new(LruCache::new(capacity)),
            stats: TableStats::default(),
        })
    }

    /// Create a table with an explicit capacity bound
    pub fn with_capacity(capacity: usize) -> FlowgateResult<Self> {
        Self::new(TableConfig { capacity })
    }

    /// Create or update the flow for `cookie`, returning the resulting state.
    ///
    /// Updates merge: only the fields the update carries an explicit value
    /// for are overwritten. Every call is a recency touch, moving the cookie
    /// to the most-recently-touched end. If an insert pushes the table past
    /// capacity, the least-recently-touched flow is evicted.
    pub fn set_flow(&self, cookie: FlowCookie, update: FlowUpdate) -> Flow {
        let mut flows = self.flows.lock();

        if let Some(flow) = flows.get_mut(&cookie) {
            flow.apply(&update);
            let updated = *flow;
            self.stats.record_update();
            tracing::trace!(%cookie, "flow updated");
            return updated;
        }

        let mut flow = Flow::new(cookie);
        flow.apply(&update);
        if let Some((victim, _)) = flows.push(cookie, flow) {
            self.stats.record_eviction();
            tracing::debug!(cookie = %victim, "evicted least-recently-touched flow");
        }
        self.stats.record_create();
        tracing::trace!(%cookie, "flow created");
        flow
    }

    /// Look up the flow for `cookie`.
    ///
    /// Absence is a normal outcome, not a failure. Lookups do not refresh
    /// recency; only `set_flow` protects a flow from eviction.
    pub fn get_flow(&self, cookie: FlowCookie) -> Option<Flow> {
        let flows = self.flows.lock();
        let found = flows.peek(&cookie).copied();
        match found {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }
        found
    }

    /// Number of tracked flows
    pub fn len(&self) -> usize {
        self.flows.lock().len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Capacity bound
    pub fn capacity(&self) -> usize {
        self.flows.lock().cap().get()
    }

    /// Sample the activity counters
    pub fn stats(&self) -> TableStatsSnapshot {
        self.stats.snapshot()
    }
}
