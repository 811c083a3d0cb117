//! Output capabilities the core drives: PWM indicators and the status LED.
//!
//! Implemented by the board adapters in the firmware binary and by test
//! doubles on the host.

/// PWM channel fed by one joystick axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Follows the X axis (red LED).
    X,
    /// Follows the Y axis (blue LED).
    Y,
}

impl Channel {
    pub const ALL: [Channel; 2] = [Channel::X, Channel::Y];

    pub const fn index(self) -> usize {
        match self {
            Channel::X => 0,
            Channel::Y => 1,
        }
    }
}

/// Two-channel PWM sink. Writes take effect immediately and are idempotent.
pub trait ActuatorOutput {
    fn set_level(&mut self, channel: Channel, level: u16);

    /// Drive both channels to zero.
    fn zero(&mut self) {
        for channel in Channel::ALL {
            self.set_level(channel, 0);
        }
    }
}

/// On/off status indicator.
pub trait IndicatorOutput {
    fn set_indicator(&mut self, on: bool);
}
