//! Per-cycle frame composition.
//!
//! A [`Frame`] is everything one control-loop cycle produces: the PWM pair
//! for the indicators, the marker position, and the ordered draw commands
//! for the display (clear, border, marker).

mod border;


use heapless::Vec;

use crate::config::{MARKER_SIZE, OLED_HEIGHT, OLED_WIDTH};
use crate::mapping::{map_axis, scale_to_span};
use crate::state::ModeSnapshot;

/// Worst-case command count: clear + dashed border + marker.
pub const MAX_FRAME_COMMANDS: usize = 2 + border::MAX_BORDER_COMMANDS;

/// Raw joystick reading, one 12-bit sample per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisPair {
    pub x: u16,
    pub y: u16,
}

/// Top-left corner of the marker square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MarkerPosition {
    pub x: u8,
    pub y: u8,
}

impl MarkerPosition {
    /// Place the marker by scaling the raw samples over the free area.
    ///
    /// Uses the raw reading, not the dead-zone-filtered level, so the
    /// marker tracks the stick over the full range.
    pub fn from_sample(sample: AxisPair) -> Self {
        Self {
            x: scale_to_span(sample.x, OLED_WIDTH - MARKER_SIZE),
            y: scale_to_span(sample.y, OLED_HEIGHT - MARKER_SIZE),
        }
    }
}

/// One drawing primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawCmd {
    /// Blank the whole buffer.
    Clear,
    /// Rectangle outline, or solid when `filled`.
    Rect { x: u8, y: u8, w: u8, h: u8, filled: bool },
    /// Single lit pixel.
    Pixel { x: u8, y: u8 },
}

/// Pixel-buffer display with an explicit flush.
pub trait DisplaySink {
    type Error;

    fn clear(&mut self);
    fn rect(&mut self, x: u8, y: u8, w: u8, h: u8, filled: bool);
    fn pixel(&mut self, x: u8, y: u8);
    /// Transmit the buffer. May block for the bus transfer.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Output of one composition step.
#[derive(Clone, Debug)]
pub struct Frame {
    /// PWM levels for [`Channel::X`](crate::output::Channel::X) and `Y`.
    pub actuation: [u16; 2],
    pub marker: MarkerPosition,
    pub commands: Vec<DrawCmd, MAX_FRAME_COMMANDS>,
}

impl Frame {
    /// Build the frame for `sample` under `mode`.
    pub fn compose(sample: AxisPair, mode: &ModeSnapshot) -> Self {
        let actuation = if mode.enabled {
            [map_axis(sample.x), map_axis(sample.y)]
        } else {
            [0, 0]
        };
        let marker = MarkerPosition::from_sample(sample);

        let mut commands: Vec<DrawCmd, MAX_FRAME_COMMANDS> = Vec::new();
        let _ = commands.push(DrawCmd::Clear);
        border::push_border(&mut commands, mode.border);
        let _ = commands.push(DrawCmd::Rect {
            x: marker.x,
            y: marker.y,
            w: MARKER_SIZE,
            h: MARKER_SIZE,
            filled: true,
        });

        Self {
            actuation,
            marker,
            commands,
        }
    }

    /// Replay the draw commands on `sink` and flush it.
    pub fn render<D>(&self, sink: &mut D) -> Result<(), D::Error>
    where
        D: DisplaySink + ?Sized,
    {
        for cmd in &self.commands {
            match *cmd {
                DrawCmd::Clear => sink.clear(),
                DrawCmd::Rect { x, y, w, h, filled } => sink.rect(x, y, w, h, filled),
                DrawCmd::Pixel { x, y } => sink.pixel(x, y),
            }
        }
        sink.flush()
    }
}
