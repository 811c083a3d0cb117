//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and geometry
//! constants live here so they can be tuned in one place.

// Joystick / ADC

/// Full-scale reading of the 12-bit SAADC conversion.
pub const ADC_MAX: u16 = 4095;

/// Raw reading of a joystick axis at rest.
pub const JOY_CENTER: u16 = 2048;

/// Distance from center below which an axis produces no actuation.
pub const JOY_DEAD_ZONE: u16 = 30;

/// Multiplier applied to the center offset. 2 = half deflection saturates.
pub const ACTUATION_GAIN: u32 = 2;

// Timing

/// Minimum spacing between two accepted presses of the same button (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 200;

/// Idle wait between two control-loop cycles (ms).
pub const FRAME_INTERVAL_MS: u64 = 30;

// Display (SSD1306 OLED)

/// Panel width in pixels.
pub const OLED_WIDTH: u8 = 128;

/// Panel height in pixels.
pub const OLED_HEIGHT: u8 = 64;

/// Side length of the square joystick marker.
pub const MARKER_SIZE: u8 = 8;

/// Inset of the inner rectangle of the double border.
pub const BORDER_INSET: u8 = 2;

/// Pixel pitch of the dashed border.
pub const BORDER_DASH_STEP: u8 = 2;

/// 7-bit I²C address of the panel (SA0 low).
pub const OLED_I2C_ADDRESS: u8 = 0x3C;

// PWM indicators

/// PWM counter top. Matches `ADC_MAX` so levels are written unscaled.
pub const PWM_MAX_DUTY: u16 = ADC_MAX;

/// Whether the PWM indicators follow the joystick right after boot.
pub const PWM_ENABLED_AT_BOOT: bool = true;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Joystick VRX   → P0.03 (AIN1)
//   Joystick VRY   → P0.02 (AIN0)
//   Joystick SW    → P0.11 (mode button, active-low)
//   Button A       → P0.12 (enable button, active-low)
//   LED red (PWM)  → P0.13
//   LED blue (PWM) → P0.14
//   LED green      → P0.15
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
