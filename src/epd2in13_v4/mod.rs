//! Waveshare 2.13" e-Paper V4 driver
//!
//! 122x250 pixels, black/white, one bit per pixel. The controller is an
//! SSD1680-class chip driven over a 4-wire SPI bus with separate DC, CS, RST
//! and BUSY lines.
//!
//! ### Usage
//!
//! 1. open the session with [`driver::Epd2in13V4::new`] on the bus and pins
//! 1. bring the panel up with [`driver::Epd2in13V4::initialize`]
//! 1. show something with [`driver::Epd2in13V4::paint`],
//!    [`driver::Epd2in13V4::paint_image`] or [`driver::Epd2in13V4::paint_frame`]
//!    (draw into a [`buffer::FrameBuffer`] with `embedded_graphics` first)
//! 1. [`driver::Epd2in13V4::sleep`] when the picture should stay without power
//!
//! Every paint blocks until the panel's refresh cycle has finished.

pub mod buffer;
pub mod driver;
pub mod interface;
pub mod pins;

pub(crate) mod cmd;
pub(crate) mod flag;

/// Display height, pixels vertically
pub const HEIGHT: u16 = 250;

/// Display width, pixels horizontally
pub const WIDTH: u16 = 122;

/// Bytes in one full frame
pub const FRAME_LEN: usize = buffer::frame_len(WIDTH, HEIGHT);
