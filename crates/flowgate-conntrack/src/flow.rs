//! Per-connection filtering state
//!
//! A [`Flow`] accumulates the permission signals the inspection pipeline has
//! produced so far for one connection and collapses them into an aggregate
//! verdict on demand.

use flowgate_common::{Direction, FlowCookie, Tristate, Verdict};
use std::fmt;

/// Accumulated inspection state for one tracked connection.
///
/// The `Display` impl renders a diagnostic summary (direction label plus the
/// three raw signals); enforcement decisions must go through
/// [`Flow::verdict`], never the formatted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flow {
    /// Correlation handle; immutable once the flow is created
    cookie: FlowCookie,
    /// Direction-policy signal
    pub direction_allowed: Tristate,
    /// Transport-layer signal
    pub transport_allowed: Tristate,
    /// Application-layer signal
    pub application_allowed: Tristate,
    /// Traffic direction tag
    pub direction: Direction,
}

impl Flow {
    /// Create a flow with no signals evaluated yet.
    pub fn new(cookie: FlowCookie) -> Self {
        Self {
            cookie,
            direction_allowed: Tristate::Unset,
            transport_allowed: Tristate::Unset,
            application_allowed: Tristate::Unset,
            direction: Direction::Unknown,
        }
    }

    /// Correlation handle this flow is keyed by
    #[inline(always)]
    pub const fn cookie(&self) -> FlowCookie {
        self.cookie
    }

    /// Collapse the three signals into the aggregate decision.
    ///
    /// A single `Deny` forces `Denied` regardless of the other signals,
    /// including ones still unset. `Allowed` requires all three to be
    /// explicit permits; everything else is `Undetermined`.
    #[inline]
    pub fn verdict(&self) -> Verdict {
        let signals = [
            self.direction_allowed,
            self.transport_allowed,
            self.application_allowed,
        ];
        if signals.iter().any(Tristate::is_deny) {
            Verdict::Denied
        } else if signals.iter().all(Tristate::is_allow) {
            Verdict::Allowed
        } else {
            Verdict::Undetermined
        }
    }

    /// Human-readable direction label
    #[inline(always)]
    pub const fn direction_label(&self) -> &'static str {
        self.direction.label()
    }

    /// Merge a partial update into this flow.
    ///
    /// Only fields the update carries an explicit value for are overwritten;
    /// everything else keeps its current state.
    pub fn apply(&mut self, update: &FlowUpdate) {
        if update.direction_allowed.is_set() {
            self.direction_allowed = update.direction_allowed;
        }
        if update.transport_allowed.is_set() {
            self.transport_allowed = update.transport_allowed;
        }
        if update.application_allowed.is_set() {
            self.application_allowed = update.application_allowed;
        }
        if update.direction != Direction::Unknown {
            self.direction = update.direction;
        }
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "flow {} [{}] direction={} transport={} application={}",
            self.cookie,
            self.direction.label(),
            self.direction_allowed,
            self.transport_allowed,
            self.application_allowed,
        )
    }
}

/// Partial update applied by [`FlowTable::set_flow`](crate::FlowTable::set_flow).
///
/// Fields left at their defaults (`Unset` / `Unknown`) leave the existing
/// flow state untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlowUpdate {
    /// New direction-policy signal, if evaluated
    pub direction_allowed: Tristate,
    /// New transport-layer signal, if evaluated
    pub transport_allowed: Tristate,
    /// New application-layer signal, if evaluated
    pub application_allowed: Tristate,
    /// New direction tag, if determined
    pub direction: Direction,
}
