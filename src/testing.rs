//! Host test doubles for the output and display capabilities.

use crate::config::{OLED_HEIGHT, OLED_WIDTH};
use crate::frame::DisplaySink;
use crate::output::{ActuatorOutput, Channel, IndicatorOutput};

/// Remembers the last level per channel and every write in order.
#[derive(Default)]
pub struct RecordingPwm {
    pub levels: [u16; 2],
    pub writes: std::vec::Vec<(Channel, u16)>,
}

impl ActuatorOutput for RecordingPwm {
    fn set_level(&mut self, channel: Channel, level: u16) {
        self.levels[channel.index()] = level;
        self.writes.push((channel, level));
    }
}

#[derive(Default)]
pub struct Led {
    pub on: bool,
}

impl IndicatorOutput for Led {
    fn set_indicator(&mut self, on: bool) {
        self.on = on;
    }
}

const W: usize = OLED_WIDTH as usize;
const H: usize = OLED_HEIGHT as usize;

/// 1-bit framebuffer that rasterizes the primitives like the panel does.
pub struct Bitmap {
    buffer: [[bool; W]; H],
    /// Buffer as of the last flush.
    pub shown: [[bool; W]; H],
    pub flushes: usize,
    pub fail_flush: bool,
}

impl Default for Bitmap {
    fn default() -> Self {
        Self {
            buffer: [[false; W]; H],
            shown: [[false; W]; H],
            flushes: 0,
            fail_flush: false,
        }
    }
}

impl Bitmap {
    /// A panel whose every flush reports a bus error.
    pub fn failing() -> Self {
        Self {
            fail_flush: true,
            ..Self::default()
        }
    }

    pub fn lit(&self, x: usize, y: usize) -> bool {
        self.shown[y][x]
    }

    pub fn lit_count(&self) -> usize {
        self.shown.iter().flatten().filter(|&&p| p).count()
    }
}

impl DisplaySink for Bitmap {
    type Error = crate::Error;

    fn clear(&mut self) {
        self.buffer = [[false; W]; H];
    }

    fn rect(&mut self, x: u8, y: u8, w: u8, h: u8, filled: bool) {
        let (x0, y0) = (x as usize, y as usize);
        let (x1, y1) = (x0 + w as usize - 1, y0 + h as usize - 1);
        for py in y0..=y1 {
            for px in x0..=x1 {
                let edge = px == x0 || px == x1 || py == y0 || py == y1;
                if filled || edge {
                    self.buffer[py][px] = true;
                }
            }
        }
    }

    fn pixel(&mut self, x: u8, y: u8) {
        self.buffer[y as usize][x as usize] = true;
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        if self.fail_flush {
            return Err(crate::Error::Display);
        }
        self.shown = self.buffer;
        self.flushes += 1;
        Ok(())
    }
}
