//! PWM indicator pair (red = X, blue = Y) and the green status LED.

use core::cell::RefCell;
use embassy_nrf::gpio::{Level, Output};
use embassy_nrf::peripherals::PWM0;
use embassy_nrf::pwm::SimplePwm;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use joypanel::{ActuatorOutput, Channel, IndicatorOutput};

/// PWM peripheral shared by the control loop and the button task.
pub type PwmCell = Mutex<CriticalSectionRawMutex, RefCell<SimplePwm<'static, PWM0>>>;

/// Handle to the shared PWM; each write holds the critical section only
/// for the duty register update.
#[derive(Clone, Copy)]
pub struct SharedPwm(&'static PwmCell);

impl SharedPwm {
    pub fn new(cell: &'static PwmCell) -> Self {
        Self(cell)
    }
}

impl ActuatorOutput for SharedPwm {
    fn set_level(&mut self, channel: Channel, level: u16) {
        self.0
            .lock(|pwm| pwm.borrow_mut().set_duty(channel.index(), level));
    }
}

pub struct StatusLed(Output<'static>);

impl StatusLed {
    pub fn new(pin: Output<'static>) -> Self {
        Self(pin)
    }
}

impl IndicatorOutput for StatusLed {
    fn set_indicator(&mut self, on: bool) {
        self.0.set_level(Level::from(on));
    }
}
