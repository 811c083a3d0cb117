//! Time-window debounce for edge-triggered buttons.

use crate::config::BUTTON_DEBOUNCE_MS;

/// Result of feeding one raw edge into a [`DebounceGate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Far enough from the previous accepted edge - counts as a press.
    Accepted,
    /// Inside the window - dropped.
    Bounce,
}

/// Last-accepted timestamp of a single button.
///
/// An edge is accepted once at least `BUTTON_DEBOUNCE_MS` have elapsed since
/// the previous accepted edge. Rejected edges do not move the window, so a
/// burst of contact bounce can never postpone the next real press.
#[derive(Clone, Copy, Debug)]
pub struct DebounceGate {
    last_ms: u64,
}

impl DebounceGate {
    /// Create a gate armed at `now_ms`; edges in the first window are dropped.
    pub const fn new(now_ms: u64) -> Self {
        Self { last_ms: now_ms }
    }

    /// Feed one raw falling edge observed at `now_ms`.
    pub fn on_edge(&mut self, now_ms: u64) -> Edge {
        if now_ms.saturating_sub(self.last_ms) < BUTTON_DEBOUNCE_MS {
            return Edge::Bounce;
        }
        self.last_ms = now_ms;
        Edge::Accepted
    }

    /// Timestamp of the last accepted edge.
    pub fn last_accepted_ms(&self) -> u64 {
        self.last_ms
    }
}
