//! Driver for the Waveshare 2.13" V4 e-paper panel
//!
//! Blocking, single-threaded driver on top of the `embedded-hal` 1.0 traits.
//! The caller owns the platform setup and hands over the SPI bus, the chip
//! select, data/command and reset outputs, the BUSY input and a delay source.
//!
//! ```ignore
//! let mut epd = Epd2in13V4::new(spi, cs, dc, rst, busy, delay, Config::default())?;
//! epd.initialize()?;
//! epd.clear()?;
//! epd.paint(Color::Black)?;
//! epd.sleep()?;
//! ```
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod color;
pub mod config;
pub mod epd2in13_v4;
pub mod error;
pub mod model;

pub use crate::color::{Color, BLACK, WHITE};
pub use crate::config::Config;
pub use crate::epd2in13_v4::buffer::{Canvas, FrameBuffer, Rotation};
pub use crate::epd2in13_v4::driver::Epd2in13V4;
pub use crate::epd2in13_v4::interface::DisplayInterface;
pub use crate::epd2in13_v4::pins::Pins;
pub use crate::error::Error;
pub use crate::model::{Epaper, Model, Panel};
