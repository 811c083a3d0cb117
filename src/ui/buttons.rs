//! GPIO button input with timestamp debouncing.
//!
//! Two physical buttons (active-low with internal pull-up):
//!   - Joystick SW - toggles the green LED and cycles the border style
//!   - Button A    - enables/disables the PWM indicators
//!
//! One task waits on both pins, feeds each falling edge through the
//! [`EdgeDispatch`] table it owns, and applies accepted presses to the
//! shared [`ModeState`]. It runs on the interrupt executor so it preempts
//! the control loop.

use crate::leds::{SharedPwm, StatusLed};
use defmt::{debug, info};
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::Input;
use embassy_time::Instant;
use joypanel::{ButtonId, EdgeDispatch, ModeState};

#[embassy_executor::task]
pub async fn edge_task(
    mut mode_pin: Input<'static>,
    mut enable_pin: Input<'static>,
    mut dispatch: EdgeDispatch,
    state: &'static ModeState,
    mut pwm: SharedPwm,
    mut led: StatusLed,
) -> ! {
    loop {
        let button = match select(
            mode_pin.wait_for_falling_edge(),
            enable_pin.wait_for_falling_edge(),
        )
        .await
        {
            Either::First(()) => ButtonId::Mode,
            Either::Second(()) => ButtonId::Enable,
        };

        let now = Instant::now().as_millis();
        match dispatch.on_edge(button, now) {
            Some(press) => {
                let mode = state.apply(&press, &mut pwm, &mut led);
                info!("Button: {} at {} ms -> {}", press.button, press.at_ms, mode);
            }
            None => debug!("Button: {} bounce at {} ms", button, now),
        }
    }
}
