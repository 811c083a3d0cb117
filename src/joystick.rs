//! Two-axis analog joystick on the SAADC.

use embassy_nrf::saadc::{ChannelConfig, Gain, Input, Reference, Saadc};
use embassy_nrf::Peripheral;
use joypanel::mapping::from_conversion;
use joypanel::{AxisPair, AxisSampler};

/// Single-ended channel whose full scale equals VDD, so a pot wired
/// across the supply rests at mid-scale.
pub fn channel(pin: impl Peripheral<P = impl Input> + 'static) -> ChannelConfig<'static> {
    let mut config = ChannelConfig::single_ended(pin);
    config.reference = Reference::VDD1_4;
    config.gain = Gain::GAIN1_4;
    config
}

/// Samples VRX and VRY in one conversion (channel 0 = X, channel 1 = Y).
pub struct Joystick {
    saadc: Saadc<'static, 2>,
}

impl Joystick {
    /// Calibrate the converter offset, then wrap it.
    pub async fn new(saadc: Saadc<'static, 2>) -> Self {
        saadc.calibrate().await;
        Self { saadc }
    }
}

impl AxisSampler for Joystick {
    async fn read_axes(&mut self) -> AxisPair {
        let mut buf = [0i16; 2];
        self.saadc.sample(&mut buf).await;
        AxisPair {
            x: from_conversion(buf[0]),
            y: from_conversion(buf[1]),
        }
    }
}
