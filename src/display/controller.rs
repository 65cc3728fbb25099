//! MicroOLED panel controller
//!
//! Drives the SSD1306-class controller behind the 64×48 MicroOLED block
//! over 4-wire SPI. Whether a transferred byte is a command or pixel data is
//! decided solely by the level of the data/command-select line, which the
//! chip samples on every byte; the driver therefore sets the line before
//! each transfer and never mid-stream.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

use super::font::Font;
use super::framebuffer::{Framebuffer, PixelMode, DISPLAY_HEIGHT, DISPLAY_PAGES, DISPLAY_WIDTH};
use crate::DisplayError;

const CMD_SET_CONTRAST: u8 = 0x81;
const CMD_DISPLAY_ALL_ON_RESUME: u8 = 0xA4;
const CMD_NORMAL_DISPLAY: u8 = 0xA6;
const CMD_INVERT_DISPLAY: u8 = 0xA7;
const CMD_DISPLAY_OFF: u8 = 0xAE;
const CMD_DISPLAY_ON: u8 = 0xAF;
const CMD_SET_DISPLAY_OFFSET: u8 = 0xD3;
const CMD_SET_COM_PINS: u8 = 0xDA;
const CMD_SET_VCOM_DESELECT: u8 = 0xDB;
const CMD_SET_DISPLAY_CLOCK_DIV: u8 = 0xD5;
const CMD_SET_PRECHARGE: u8 = 0xD9;
const CMD_SET_MULTIPLEX: u8 = 0xA8;
const CMD_SET_HIGH_COLUMN: u8 = 0x10;
const CMD_SET_START_LINE: u8 = 0x40;
const CMD_SET_PAGE: u8 = 0xB0;
const CMD_COM_SCAN_DEC: u8 = 0xC8;
const CMD_SEG_REMAP: u8 = 0xA0;
const CMD_CHARGE_PUMP: u8 = 0x8D;

/// Power-on command sequence for the 64×48 module
///
/// The order is mandated by the panel power-up procedure (clock divider
/// before multiplex ratio before charge pump before display-on); do not
/// reorder.
const INIT_SEQUENCE: [u8; 23] = [
    CMD_DISPLAY_OFF,
    CMD_SET_DISPLAY_CLOCK_DIV,
    0x80, // suggested clock ratio
    CMD_SET_MULTIPLEX,
    0x2F, // 48 rows
    CMD_SET_DISPLAY_OFFSET,
    0x00,
    CMD_SET_START_LINE | 0x00,
    CMD_CHARGE_PUMP,
    0x14, // internal charge pump on
    CMD_NORMAL_DISPLAY,
    CMD_DISPLAY_ALL_ON_RESUME,
    CMD_SEG_REMAP | 0x01,
    CMD_COM_SCAN_DEC,
    CMD_SET_COM_PINS,
    0x12,
    CMD_SET_CONTRAST,
    0x8F,
    CMD_SET_PRECHARGE,
    0xF1,
    CMD_SET_VCOM_DESELECT,
    0x40,
    CMD_DISPLAY_ON,
];

// Hardware settle times around the reset pulse. Minimums; overshoot is
// harmless, shortening is not.
const RESET_ASSERT_MS: u32 = 5;
const RESET_RELEASE_MS: u32 = 10;

/// Driver for the MicroOLED block
///
/// Owns the SPI device, the data/command-select pin, the reset pin, and the
/// framebuffer. Construction runs the full hardware init; a value of this
/// type is always ready to draw.
pub struct MicroOled<SPI, DC, RST> {
    spi: SPI,
    dc: DC,
    rst: RST,
    framebuffer: Framebuffer,
}

impl<SPI, DC, RST, SpiE, PinE> MicroOled<SPI, DC, RST>
where
    SPI: SpiDevice<Error = SpiE>,
    DC: OutputPin<Error = PinE>,
    RST: OutputPin<Error = PinE>,
{
    /// Reset and initialize the panel
    ///
    /// Pulses the reset line (5 ms asserted, 10 ms settle after release)
    /// and streams the fixed init command sequence. If any transfer fails
    /// the error is returned and the partially-configured panel is dropped
    /// with the peripherals; no half-initialized driver value escapes.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin level or SPI transfer fails.
    pub fn new<D>(
        spi: SPI,
        dc: DC,
        rst: RST,
        delay: &mut D,
    ) -> Result<Self, DisplayError<SpiE, PinE>>
    where
        D: DelayNs,
    {
        let mut display = Self {
            spi,
            dc,
            rst,
            framebuffer: Framebuffer::new(),
        };

        display.reset(delay)?;
        for &byte in &INIT_SEQUENCE {
            display.command(byte)?;
        }

        Ok(display)
    }

    /// Pulse the reset line with the required settle times
    fn reset<D>(&mut self, delay: &mut D) -> Result<(), DisplayError<SpiE, PinE>>
    where
        D: DelayNs,
    {
        self.rst.set_low().map_err(DisplayError::Pin)?;
        delay.delay_ms(RESET_ASSERT_MS);
        self.rst.set_high().map_err(DisplayError::Pin)?;
        delay.delay_ms(RESET_RELEASE_MS);
        Ok(())
    }

    /// Send one command byte (DC low)
    fn command(&mut self, byte: u8) -> Result<(), DisplayError<SpiE, PinE>> {
        self.dc.set_low().map_err(DisplayError::Pin)?;
        self.spi.write(&[byte]).map_err(DisplayError::Spi)
    }

    /// Send pixel data (DC high)
    fn data(&mut self, bytes: &[u8]) -> Result<(), DisplayError<SpiE, PinE>> {
        self.dc.set_high().map_err(DisplayError::Pin)?;
        self.spi.write(bytes).map_err(DisplayError::Spi)
    }

    /// Address one 8-row page
    fn set_page_address(&mut self, page: u8) -> Result<(), DisplayError<SpiE, PinE>> {
        self.command(CMD_SET_PAGE | page)
    }

    /// Address a column within the current page
    ///
    /// The panel is wired with a 2-column offset in high-column addressing
    /// mode, hence the `+ 0x02`; the two-command encoding is fixed by the
    /// chip's addressing protocol.
    fn set_column_address(&mut self, column: u8) -> Result<(), DisplayError<SpiE, PinE>> {
        self.command((CMD_SET_HIGH_COLUMN | (column >> 4)) + 0x02)?;
        self.command(0x0F & column)
    }

    /// Push the framebuffer to the panel
    ///
    /// Streams all 6 pages in order, 64 data bytes each, resetting the
    /// column address at every page boundary. There is no dirty tracking;
    /// every call transfers the full frame.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin level or SPI transfer fails.
    pub fn present(&mut self) -> Result<(), DisplayError<SpiE, PinE>> {
        for page in 0..DISPLAY_PAGES {
            self.set_page_address(page as u8)?;
            self.set_column_address(0)?;

            let mut row = [0u8; DISPLAY_WIDTH];
            row.copy_from_slice(self.framebuffer.page(page));
            self.data(&row)?;
        }
        Ok(())
    }

    /// Write one pixel into the framebuffer
    pub fn set_pixel(&mut self, x: i32, y: i32, mode: PixelMode) {
        self.framebuffer.set_pixel(x, y, mode);
    }

    /// Draw a text run into the framebuffer
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, font: &Font) {
        self.framebuffer.draw_text(x, y, text, font);
    }

    /// Draw one column-major glyph into the framebuffer
    pub fn draw_glyph(&mut self, x: i32, y: i32, columns: &[u8], height: u32) {
        self.framebuffer.draw_glyph(x, y, columns, height);
    }

    /// Blank the framebuffer
    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    /// Set panel contrast
    ///
    /// # Errors
    ///
    /// Returns an error if a pin level or SPI transfer fails.
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError<SpiE, PinE>> {
        self.command(CMD_SET_CONTRAST)?;
        self.command(contrast)
    }

    /// Invert the panel (on pixels show dark)
    ///
    /// # Errors
    ///
    /// Returns an error if a pin level or SPI transfer fails.
    pub fn invert(&mut self, inverted: bool) -> Result<(), DisplayError<SpiE, PinE>> {
        self.command(if inverted {
            CMD_INVERT_DISPLAY
        } else {
            CMD_NORMAL_DISPLAY
        })
    }

    /// Turn the panel on
    ///
    /// # Errors
    ///
    /// Returns an error if a pin level or SPI transfer fails.
    pub fn display_on(&mut self) -> Result<(), DisplayError<SpiE, PinE>> {
        self.command(CMD_DISPLAY_ON)
    }

    /// Turn the panel off (pixel memory is retained)
    ///
    /// # Errors
    ///
    /// Returns an error if a pin level or SPI transfer fails.
    pub fn display_off(&mut self) -> Result<(), DisplayError<SpiE, PinE>> {
        self.command(CMD_DISPLAY_OFF)
    }

    /// Panel width in pixels
    #[must_use]
    pub const fn width(&self) -> usize {
        DISPLAY_WIDTH
    }

    /// Panel height in pixels
    #[must_use]
    pub const fn height(&self) -> usize {
        DISPLAY_HEIGHT
    }

    /// Consume the driver and return the SPI device and both pins
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }
}
