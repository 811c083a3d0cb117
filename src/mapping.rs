//! Joystick axis → actuation level and marker coordinate.

use crate::config::{ACTUATION_GAIN, ADC_MAX, JOY_CENTER, JOY_DEAD_ZONE};

/// Map a raw axis sample to a PWM level.
///
/// Zero inside the dead zone around center; otherwise the distance from
/// center times `ACTUATION_GAIN`, saturating at `ADC_MAX`. Both ends of the
/// axis light the indicator equally.
pub const fn map_axis(raw: u16) -> u16 {
    let offset = raw as i32 - JOY_CENTER as i32;
    let magnitude = offset.unsigned_abs();
    if magnitude < JOY_DEAD_ZONE as u32 {
        return 0;
    }

    let level = magnitude * ACTUATION_GAIN;
    if level > ADC_MAX as u32 {
        ADC_MAX
    } else {
        level as u16
    }
}

/// Turn a signed SAADC result into a raw axis sample.
///
/// With the converter referenced to VDD, a single-ended conversion spans
/// `0..=ADC_MAX + 1` over the supply range and may read a few counts below
/// zero near ground.
pub const fn from_conversion(sample: i16) -> u16 {
    if sample < 0 {
        0
    } else if sample > ADC_MAX as i16 {
        ADC_MAX
    } else {
        sample as u16
    }
}

/// Scale a raw axis sample linearly onto `0..=span`.
pub fn scale_to_span(raw: u16, span: u8) -> u8 {
    debug_assert!(raw <= ADC_MAX);
    (raw as u32 * span as u32 / ADC_MAX as u32) as u8
}
