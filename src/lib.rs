//! Host-testable core of the joypanel firmware.
//!
//! Everything that decides *what* the board does lives here: the
//! joystick-to-PWM law, button debouncing, the shared mode flags, and the
//! per-cycle frame composer. Peripherals are reached only through the
//! capability traits in [`output`], [`frame::DisplaySink`] and
//! [`control::AxisSampler`].
//!
//! Usage: `cargo test` (host) - the firmware binary needs `--features embedded`.
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and links this library for all of its logic.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod error;
pub mod frame;
pub mod input;
pub mod mapping;
pub mod output;
pub mod state;

#[cfg(test)]
mod testing;

pub use control::{AxisSampler, ControlLoop};
pub use error::Error;
pub use frame::{AxisPair, DisplaySink, DrawCmd, Frame};
pub use input::dispatch::EdgeDispatch;
pub use input::{ButtonId, PressEvent};
pub use output::{ActuatorOutput, Channel, IndicatorOutput};
pub use state::{BorderVariant, ModeSnapshot, ModeState};
