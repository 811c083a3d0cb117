//! User interface subsystem - OLED display + physical buttons.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C, drawn with `embedded-graphics`
//! - **Buttons**: joystick SW + button A, debounced by edge timestamp

pub mod buttons;
pub mod display;
