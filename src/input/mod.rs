//! Button input - raw falling edges in, debounced presses out.
//!
//! ## Components
//!
//! - **Debounce**: one time-window gate per button
//! - **Dispatch**: table of gates keyed by [`ButtonId`], owned by the edge task
//!
//! Accepted presses are handed to [`crate::state::ModeState::apply`].

pub mod debounce;
pub mod dispatch;

/// Logical buttons (both active-low, falling edge = press).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// Joystick push switch - toggles the indicator and cycles the border.
    Mode,
    /// Button A - enables/disables the PWM indicators.
    Enable,
}

impl ButtonId {
    /// Number of logical buttons.
    pub const COUNT: usize = 2;

    /// Slot of this button in per-button tables.
    pub const fn index(self) -> usize {
        match self {
            ButtonId::Mode => 0,
            ButtonId::Enable => 1,
        }
    }
}

/// A debounced press of one button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressEvent {
    pub button: ButtonId,
    /// Monotonic timestamp of the accepted edge (ms since boot).
    pub at_ms: u64,
}
