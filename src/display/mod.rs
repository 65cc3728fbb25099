//! MicroOLED block driver
//!
//! A 1-bit framebuffer plus the command-sequencing engine that pushes it to
//! the 64×48 panel:
//! - [`Framebuffer`]: page-organized pixel memory with set/clear/invert
//!   writes and bitmap-font text
//! - [`MicroOled`]: reset/init sequencing, page and column addressing, and
//!   the data/command-select discipline on the SPI link
//! - [`Font`]/[`FONT_5X7`]: column-major glyph tables

pub mod controller;
pub mod font;
pub mod framebuffer;

// Re-export main types
pub use controller::MicroOled;
pub use font::{Font, FONT_5X7};
pub use framebuffer::{
    Framebuffer, PixelMode, DISPLAY_HEIGHT, DISPLAY_PAGES, DISPLAY_WIDTH, FRAMEBUFFER_SIZE,
};
