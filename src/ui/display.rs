//! SSD1306 OLED display wrapper.

use defmt::warn;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use joypanel::config::OLED_I2C_ADDRESS;
use joypanel::{DisplaySink, Error};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Buffered panel that replays frame commands.
pub struct Oled<I2C> {
    display: Display<I2C>,
}

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new_custom_address(i2c, OLED_I2C_ADDRESS);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    if display.init().is_err() {
        warn!("OLED: init failed");
    }
    display.clear_buffer();
    let _ = display.flush();
    Oled { display }
}

impl<I2C> DisplaySink for Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Error = Error;

    fn clear(&mut self) {
        self.display.clear_buffer();
    }

    fn rect(&mut self, x: u8, y: u8, w: u8, h: u8, filled: bool) {
        let style = if filled {
            PrimitiveStyle::with_fill(BinaryColor::On)
        } else {
            PrimitiveStyle::with_stroke(BinaryColor::On, 1)
        };
        let _ = Rectangle::new(
            Point::new(i32::from(x), i32::from(y)),
            Size::new(u32::from(w), u32::from(h)),
        )
        .into_styled(style)
        .draw(&mut self.display);
    }

    fn pixel(&mut self, x: u8, y: u8) {
        let _ = Pixel(Point::new(i32::from(x), i32::from(y)), BinaryColor::On)
            .draw(&mut self.display);
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.display.flush().map_err(|_| Error::Display)
    }
}
