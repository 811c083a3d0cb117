//! Edge dispatch table - one debounce gate per logical button.

use super::debounce::{DebounceGate, Edge};
use super::{ButtonId, PressEvent};

/// Routes raw edges to the gate of the button they came from.
///
/// Built once at setup and moved into the edge task, which is the only
/// writer of the debounce windows.
pub struct EdgeDispatch {
    gates: [DebounceGate; ButtonId::COUNT],
}

impl EdgeDispatch {
    /// Create a table with every window armed at `now_ms`.
    pub const fn new(now_ms: u64) -> Self {
        Self {
            gates: [DebounceGate::new(now_ms); ButtonId::COUNT],
        }
    }

    /// Feed a raw falling edge of `button` observed at `now_ms`.
    ///
    /// Returns the press when the button's own window accepts it.
    pub fn on_edge(&mut self, button: ButtonId, now_ms: u64) -> Option<PressEvent> {
        match self.gates[button.index()].on_edge(now_ms) {
            Edge::Accepted => Some(PressEvent {
                button,
                at_ms: now_ms,
            }),
            Edge::Bounce => None,
        }
    }

    /// Gate backing `button`.
    pub fn gate(&self, button: ButtonId) -> &DebounceGate {
        &self.gates[button.index()]
    }
}
