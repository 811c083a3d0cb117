//! Integration tests for joypanel host-testable logic.

use std::cell::RefCell;

use embassy_futures::block_on;
use joypanel::{
    ActuatorOutput, AxisPair, AxisSampler, BorderVariant, ButtonId, Channel, ControlLoop,
    DisplaySink, DrawCmd, EdgeDispatch, Error, IndicatorOutput, ModeState,
};

#[derive(Default)]
struct Pwm {
    levels: [u16; 2],
}

impl ActuatorOutput for Pwm {
    fn set_level(&mut self, channel: Channel, level: u16) {
        self.levels[channel.index()] = level;
    }
}

struct SharedPwm<'a>(&'a RefCell<Pwm>);

impl ActuatorOutput for SharedPwm<'_> {
    fn set_level(&mut self, channel: Channel, level: u16) {
        self.0.borrow_mut().set_level(channel, level);
    }
}

#[derive(Default)]
struct Led(bool);

impl IndicatorOutput for Led {
    fn set_indicator(&mut self, on: bool) {
        self.0 = on;
    }
}

/// Records primitives between flushes.
#[derive(Default)]
struct Recorder {
    pending: Vec<DrawCmd>,
    flushed: Vec<Vec<DrawCmd>>,
}

impl DisplaySink for Recorder {
    type Error = Error;

    fn clear(&mut self) {
        self.pending.push(DrawCmd::Clear);
    }

    fn rect(&mut self, x: u8, y: u8, w: u8, h: u8, filled: bool) {
        self.pending.push(DrawCmd::Rect { x, y, w, h, filled });
    }

    fn pixel(&mut self, x: u8, y: u8) {
        self.pending.push(DrawCmd::Pixel { x, y });
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.flushed.push(std::mem::take(&mut self.pending));
        Ok(())
    }
}

/// Replays a fixed list of samples, one per cycle.
struct Script(std::vec::IntoIter<AxisPair>);

impl AxisSampler for Script {
    async fn read_axes(&mut self) -> AxisPair {
        self.0.next().unwrap_or_default()
    }
}

#[test]
fn center_and_full_deflection_frame() {
    let state = ModeState::new(true);
    let mut control = ControlLoop::new(
        &state,
        Script(vec![AxisPair { x: 2048, y: 4095 }].into_iter()),
        Pwm::default(),
        Recorder::default(),
    );

    let frame = block_on(control.run_cycle()).expect("flush succeeds");
    assert_eq!(frame.actuation, [0, 4094]);
    assert_eq!(control.actuators().levels, [0, 4094]);

    let shown = &control.display().flushed[0];
    assert_eq!(
        shown.as_slice(),
        &[
            DrawCmd::Clear,
            DrawCmd::Rect { x: 0, y: 0, w: 128, h: 64, filled: false },
            DrawCmd::Rect { x: 60, y: 56, w: 8, h: 8, filled: true },
        ]
    );
}

#[test]
fn button_edges_drive_the_next_frames() {
    let state = ModeState::new(true);
    let pwm = RefCell::new(Pwm::default());
    let mut led = Led::default();
    let mut dispatch = EdgeDispatch::new(0);
    let mut control = ControlLoop::new(
        &state,
        Script(vec![AxisPair { x: 4095, y: 0 }; 3].into_iter()),
        SharedPwm(&pwm),
        Recorder::default(),
    );

    block_on(control.run_cycle()).unwrap();
    assert_eq!(pwm.borrow().levels, [4094, 4095]);

    // A bouncing mode press: one transition, double border.
    for t in [1_000, 1_004, 1_011, 1_150] {
        if let Some(press) = dispatch.on_edge(ButtonId::Mode, t) {
            state.apply(&press, &mut SharedPwm(&pwm), &mut led);
        }
    }
    assert!(led.0);
    assert_eq!(state.snapshot().border, BorderVariant::Double);

    block_on(control.run_cycle()).unwrap();
    assert_eq!(control.display().flushed[1].len(), 4);

    // Enable press turns the indicators off at once, and they stay off.
    let press = dispatch.on_edge(ButtonId::Enable, 1_020).expect("own window");
    state.apply(&press, &mut SharedPwm(&pwm), &mut led);
    assert_eq!(pwm.borrow().levels, [0, 0]);

    let frame = block_on(control.run_cycle()).unwrap();
    assert_eq!(frame.actuation, [0, 0]);
    assert_eq!(pwm.borrow().levels, [0, 0]);
}
