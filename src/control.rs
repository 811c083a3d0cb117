//! Control loop cycle - sample, compose, actuate, display, wait.
//!
//! The firmware drives [`ControlLoop::run`], which performs one
//! [`ControlLoop::run_cycle`] every `FRAME_INTERVAL_MS`. Button handlers may
//! preempt a cycle at any point; they only touch [`ModeState`] and, when
//! disabling, the PWM outputs.

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal_async::delay::DelayNs;

use crate::config::FRAME_INTERVAL_MS;
use crate::frame::{AxisPair, DisplaySink, Frame};
use crate::output::{ActuatorOutput, Channel};
use crate::state::ModeState;

/// Source of joystick readings.
///
/// Both axes are converted together; each value is in `0..=ADC_MAX`.
#[allow(async_fn_in_trait)]
pub trait AxisSampler {
    async fn read_axes(&mut self) -> AxisPair;
}

/// Write the frame's PWM pair, then re-check `enabled`.
///
/// A disable press landing after the snapshot zeroes the outputs itself;
/// the re-check zeroes them again if our stale writes came after it.
pub fn drive_actuators<A>(state: &ModeState, actuators: &mut A, levels: [u16; 2])
where
    A: ActuatorOutput + ?Sized,
{
    for channel in Channel::ALL {
        actuators.set_level(channel, levels[channel.index()]);
    }
    if !state.is_enabled() {
        actuators.zero();
    }
}

/// One sampler, one PWM pair, one display, and the shared mode state.
pub struct ControlLoop<'a, S, A, D> {
    state: &'a ModeState,
    sampler: S,
    actuators: A,
    display: D,
}

impl<'a, S, A, D> ControlLoop<'a, S, A, D>
where
    S: AxisSampler,
    A: ActuatorOutput,
    D: DisplaySink,
{
    pub fn new(state: &'a ModeState, sampler: S, actuators: A, display: D) -> Self {
        Self {
            state,
            sampler,
            actuators,
            display,
        }
    }

    /// Run one cycle and return what was produced.
    ///
    /// The PWM outputs are written before the display is touched, so a
    /// failed flush never leaves stale levels behind.
    pub async fn run_cycle(&mut self) -> Result<Frame, D::Error> {
        let sample = self.sampler.read_axes().await;
        let mode = self.state.snapshot();
        let frame = Frame::compose(sample, &mode);

        drive_actuators(self.state, &mut self.actuators, frame.actuation);
        frame.render(&mut self.display)?;
        Ok(frame)
    }

    /// Cycle until `stop` is raised, waiting `FRAME_INTERVAL_MS` after each.
    ///
    /// `on_cycle` sees every outcome before the wait. A failed flush does not
    /// end the loop; the next cycle redraws the whole frame.
    pub async fn run<T, F>(&mut self, delay: &mut T, stop: &AtomicBool, mut on_cycle: F)
    where
        T: DelayNs,
        F: FnMut(&Result<Frame, D::Error>),
    {
        while !stop.load(Ordering::Acquire) {
            let outcome = self.run_cycle().await;
            on_cycle(&outcome);
            delay.delay_ms(FRAME_INTERVAL_MS as u32).await;
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn actuators(&self) -> &A {
        &self.actuators
    }
}
