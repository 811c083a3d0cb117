//! Shared mode state - written by the button handler, read by the frame loop.
//!
//! `enabled` lives in its own atomic. The indicator flag and the border
//! variant share one byte so a mode press moves both with a single store:
//!
//! ```text
//! bit 2     indicator
//! bits 1..0 border variant (0..=2)
//! ```

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::input::{ButtonId, PressEvent};
use crate::output::{ActuatorOutput, IndicatorOutput};

const INDICATOR_BIT: u8 = 0b100;
const VARIANT_MASK: u8 = 0b011;

/// Outline style drawn around the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BorderVariant {
    /// One-pixel rectangle at the panel bounds.
    Single,
    /// Outer rectangle plus one inset by `BORDER_INSET`.
    Double,
    /// Every second pixel along all four edges.
    Dashed,
}

impl BorderVariant {
    pub const COUNT: u8 = 3;

    pub const fn index(self) -> u8 {
        match self {
            BorderVariant::Single => 0,
            BorderVariant::Double => 1,
            BorderVariant::Dashed => 2,
        }
    }

    /// Variant for `index`, wrapping modulo [`Self::COUNT`].
    pub const fn from_index(index: u8) -> Self {
        match index % Self::COUNT {
            0 => BorderVariant::Single,
            1 => BorderVariant::Double,
            _ => BorderVariant::Dashed,
        }
    }

    /// Next variant in the cycle.
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

/// Consistent copy of [`ModeState`] taken at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeSnapshot {
    /// PWM indicators follow the joystick.
    pub enabled: bool,
    /// Status LED on.
    pub indicator: bool,
    pub border: BorderVariant,
}

/// Process-wide mode flags.
///
/// Mutated only through [`ModeState::apply`]; every field read is a single
/// atomic load, so readers never observe half a transition.
pub struct ModeState {
    enabled: AtomicBool,
    mode: AtomicU8,
}

impl ModeState {
    /// Boot state: indicator off, single border.
    pub const fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
            mode: AtomicU8::new(0),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    pub fn snapshot(&self) -> ModeSnapshot {
        let mode = self.mode.load(Ordering::Acquire);
        ModeSnapshot {
            enabled: self.is_enabled(),
            indicator: mode & INDICATOR_BIT != 0,
            border: BorderVariant::from_index(mode & VARIANT_MASK),
        }
    }

    /// Apply an accepted press and perform its immediate side effect.
    ///
    /// - `Mode`: flip the indicator, advance the border, drive the LED.
    /// - `Enable`: flip `enabled`; zero both PWM channels when it turns off.
    pub fn apply<A, I>(
        &self,
        press: &PressEvent,
        actuators: &mut A,
        indicator: &mut I,
    ) -> ModeSnapshot
    where
        A: ActuatorOutput + ?Sized,
        I: IndicatorOutput + ?Sized,
    {
        match press.button {
            ButtonId::Mode => {
                let snapshot = self.advance_mode();
                indicator.set_indicator(snapshot.indicator);
                snapshot
            }
            ButtonId::Enable => {
                if !self.toggle_enabled() {
                    actuators.zero();
                }
                self.snapshot()
            }
        }
    }

    /// Flip the indicator and advance the border variant in one store.
    fn advance_mode(&self) -> ModeSnapshot {
        let previous = self
            .mode
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |mode| {
                Some(next_mode(mode))
            })
            .unwrap_or_else(|mode| mode);
        let mode = next_mode(previous);
        ModeSnapshot {
            enabled: self.is_enabled(),
            indicator: mode & INDICATOR_BIT != 0,
            border: BorderVariant::from_index(mode & VARIANT_MASK),
        }
    }

    /// Flip `enabled`, returning the new value.
    fn toggle_enabled(&self) -> bool {
        !self.enabled.fetch_xor(true, Ordering::AcqRel)
    }
}

fn next_mode(mode: u8) -> u8 {
    let indicator = (mode ^ INDICATOR_BIT) & INDICATOR_BIT;
    let variant = BorderVariant::from_index(mode & VARIANT_MASK).next().index();
    indicator | variant
}
