//! joypanel firmware - nRF52840 entry point.
//!
//! Wires the board peripherals to the host-tested core in the `joypanel`
//! library:
//!
//! - thread executor: the control loop (sample → compose → PWM → OLED)
//! - interrupt executor on `EGU0_SWI0`: the button edge task, which
//!   preempts the loop
//!
//! The two share only [`ModeState`] (atomics) and the PWM peripheral
//! (critical-section mutex).

#![no_std]
#![no_main]

mod joystick;
mod leds;
mod ui;

use core::cell::RefCell;
use core::sync::atomic::AtomicBool;

use defmt::{info, trace, warn};
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::interrupt;
use embassy_nrf::interrupt::{InterruptExt, Priority};
use embassy_nrf::pwm::SimplePwm;
use embassy_nrf::saadc::{self, Saadc};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::{Delay, Instant};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use joypanel::config::{PWM_ENABLED_AT_BOOT, PWM_MAX_DUTY};
use joypanel::{ActuatorOutput, ControlLoop, EdgeDispatch, ModeState};

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

static MODE: ModeState = ModeState::new(PWM_ENABLED_AT_BOOT);
/// Never raised on this board; the loop runs until power-off.
static HALT: AtomicBool = AtomicBool::new(false);
static PWM: StaticCell<leds::PwmCell> = StaticCell::new();
static EDGE_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn EGU0_SWI0() {
    EDGE_EXECUTOR.on_interrupt()
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("joypanel: starting");

    // PWM indicators (red = X, blue = Y), dark until the first cycle.
    let mut pwm = SimplePwm::new_2ch(p.PWM0, p.P0_13, p.P0_14);
    pwm.set_max_duty(PWM_MAX_DUTY);
    let mut pwm = leds::SharedPwm::new(PWM.init(Mutex::new(RefCell::new(pwm))));
    pwm.zero();

    let led = leds::StatusLed::new(Output::new(p.P0_15, Level::Low, OutputDrive::Standard));

    // Buttons: windows armed now, so edges right after boot are dropped.
    let mode_pin = Input::new(p.P0_11, Pull::Up);
    let enable_pin = Input::new(p.P0_12, Pull::Up);
    let dispatch = EdgeDispatch::new(Instant::now().as_millis());

    interrupt::EGU0_SWI0.set_priority(Priority::P6);
    let edge_spawner = EDGE_EXECUTOR.start(interrupt::EGU0_SWI0);
    edge_spawner.must_spawn(ui::buttons::edge_task(
        mode_pin, enable_pin, dispatch, &MODE, pwm, led,
    ));

    // Joystick: VRX on AIN1, VRY on AIN0.
    let mut saadc_config = saadc::Config::default();
    saadc_config.resolution = saadc::Resolution::_12BIT;
    let saadc = Saadc::new(
        p.SAADC,
        Irqs,
        saadc_config,
        [joystick::channel(p.P0_03), joystick::channel(p.P0_02)],
    );
    let joystick = joystick::Joystick::new(saadc).await;

    // OLED on TWIM0 at 400 kHz.
    let mut twim_config = twim::Config::default();
    twim_config.frequency = twim::Frequency::K400;
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim_config);
    let oled = ui::display::init(i2c);

    let mut control = ControlLoop::new(&MODE, joystick, pwm, oled);
    info!("joypanel: running, mode={}", MODE.snapshot());

    control
        .run(&mut Delay, &HALT, |outcome| match outcome {
            Ok(frame) => trace!(
                "Cycle: actuation={} marker={}",
                frame.actuation,
                frame.marker
            ),
            Err(e) => warn!("Cycle: display flush failed: {}", e),
        })
        .await;
    info!("joypanel: halted");
}
