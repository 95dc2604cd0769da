//! 2.13" V4 Display Driver Implementation
//!
//! ## Sequence
//!
//! - `initialize()` - hardware reset, wait idle, software reset, wait idle,
//!   register setup, wait idle
//! - `paint()` / `paint_image()` / `clear()` - full-panel window and cursor,
//!   write RAM, trigger a full refresh, wait idle
//! - `sleep()` - deep sleep, RAM retained; needs `initialize()` to wake
//!
//! ## Register Setup Order
//!
//! Software reset, driver output control, data entry mode, RAM window, RAM
//! cursor, border waveform, display update control, temperature sensor. Some
//! registers take their defaults from earlier ones, so the order is fixed.
//!
//! ### BUSY Pin Wait
//!
//! After `MASTER_ACTIVATE` the controller holds BUSY high for the whole
//! refresh (a couple of seconds). Nothing may be sent until it drops.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiBus;

use crate::color::Color;
use crate::config::Config;
use crate::epd2in13_v4::buffer::{Canvas, FrameBuffer, Rotation};
use crate::epd2in13_v4::interface::DisplayInterface;
use crate::epd2in13_v4::{cmd::Cmd, flag::Flag, HEIGHT, WIDTH};
use crate::error::Error;

/// Driver for the 122x250 black/white panel
///
/// ## Type Parameters
///
/// - `SPI` - SPI bus the controller sits on
/// - `CS` - Chip select output pin (active low)
/// - `DC` - Data/Command output pin
/// - `RST` - Reset output pin
/// - `BSY` - BUSY input pin (HIGH when display is busy)
/// - `DELAY` - Delay provider for timing
pub struct Epd2in13V4<SPI, CS, DC, RST, BSY, DELAY> {
    /// The display interface
    interface: DisplayInterface<SPI, CS, DC, RST, BSY, DELAY>,
}

impl<SPI, CS, DC, RST, BSY, DELAY> Epd2in13V4<SPI, CS, DC, RST, BSY, DELAY>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
    BSY: InputPin,
    DELAY: DelayNs,
{
    /// Open a session on the handles. Nothing is sent to the panel yet.
    pub fn new(
        spi: SPI,
        cs: CS,
        dc: DC,
        rst: RST,
        busy: BSY,
        delay: DELAY,
        config: Config,
    ) -> Result<Self, Error> {
        let interface = DisplayInterface::new(spi, cs, dc, rst, busy, delay, config)?;
        Ok(Self::from_interface(interface))
    }

    /// Wrap an already opened session
    pub fn from_interface(interface: DisplayInterface<SPI, CS, DC, RST, BSY, DELAY>) -> Self {
        Epd2in13V4 { interface }
    }

    /// Give the session back, e.g. to power the panel down.
    pub fn into_interface(self) -> DisplayInterface<SPI, CS, DC, RST, BSY, DELAY> {
        self.interface
    }

    /// Canvas covering the whole panel in its native orientation
    pub fn canvas() -> Canvas {
        Canvas::new(WIDTH, HEIGHT)
    }

    /// Bring the controller from power-up to a configured state.
    pub fn initialize(&mut self) -> Result<(), Error> {
        log::info!("Initializing {}x{} panel", WIDTH, HEIGHT);

        self.interface.reset()?;
        self.interface.wait_until_idle()?;

        self.interface.cmd(Cmd::SW_RESET)?;
        self.interface.wait_until_idle()?;

        let y_max = HEIGHT - 1;
        self.interface.cmd_with_data(
            Cmd::DRIVER_OUTPUT_CONTROL,
            &[
                (y_max & 0xFF) as u8,
                (y_max >> 8) as u8,
                Flag::DRIVER_OUTPUT_GATE_SCAN_DEFAULT,
            ],
        )?;

        self.interface
            .cmd_with_data(Cmd::DATA_ENTRY_MODE, &[Flag::DATA_ENTRY_INCRY_INCRX])?;

        self.use_full_frame()?;

        self.interface.cmd_with_data(
            Cmd::BORDER_WAVEFORM_CONTROL,
            &[Flag::BORDER_WAVEFORM_FOLLOW_LUT1],
        )?;

        self.interface.cmd_with_data(
            Cmd::DISPLAY_UPDATE_CTRL1,
            &[
                Flag::DISPLAY_UPDATE_CTRL1_RAM_NORMAL,
                Flag::DISPLAY_UPDATE_CTRL1_SOURCE_RANGE,
            ],
        )?;

        self.interface
            .cmd_with_data(Cmd::TEMP_CONTROL, &[Flag::INTERNAL_TEMP_SENSOR])?;
        self.interface.wait_until_idle()?;

        log::info!("Panel configured");
        Ok(())
    }

    /// Fill the whole panel with one color and refresh.
    pub fn paint(&mut self, color: Color) -> Result<(), Error> {
        log::info!("Painting panel {:?}", color);
        let frame = FrameBuffer::filled(Self::canvas().with_color(color));
        self.paint_frame(&frame)
    }

    /// Show an already packed 1bpp image of exactly one panel frame.
    pub fn paint_image(&mut self, image: &[u8]) -> Result<(), Error> {
        log::info!("Painting {} byte image", image.len());
        let frame = FrameBuffer::from_packed(Self::canvas(), image)?;
        self.paint_frame(&frame)
    }

    /// Same as painting white
    pub fn clear(&mut self) -> Result<(), Error> {
        self.paint(Color::White)
    }

    /// Stream a full-panel frame into RAM and refresh.
    ///
    /// Frames drawn at 90 or 270 degrees are refused: their bytes are laid out
    /// for the swapped size and would land scrambled in RAM.
    pub fn paint_frame(&mut self, frame: &FrameBuffer) -> Result<(), Error> {
        let canvas = frame.canvas();
        if canvas.rotation.swaps_axes() {
            log::warn!("Refusing {:?} frame", canvas.rotation);
            return Err(Error::UnrotatedFrame(canvas.rotation));
        }
        let expected = Self::canvas().frame_len();
        if (canvas.width, canvas.height) != (WIDTH, HEIGHT) {
            return Err(Error::BufferSize {
                expected,
                actual: frame.as_bytes().len(),
            });
        }
        if canvas.rotation == Rotation::Rotate180 {
            log::debug!("180 degree frame sent as is");
        }

        self.use_full_frame()?;

        log::debug!("Writing {} bytes to RAM", frame.as_bytes().len());
        self.interface.cmd(Cmd::WRITE_BW_DATA)?;
        self.interface.data_bytes(frame.as_bytes())?;

        self.turn_on_display()
    }

    /// Enter deep sleep. RAM is kept; call `initialize()` before painting again.
    pub fn sleep(&mut self) -> Result<(), Error> {
        log::info!("Entering deep sleep");
        self.interface
            .cmd_with_data(Cmd::DEEP_SLEEP_MODE, &[Flag::DEEP_SLEEP_MODE_1])
    }

    /// Full refresh with every update stage enabled, then wait for it to finish
    fn turn_on_display(&mut self) -> Result<(), Error> {
        self.interface
            .cmd_with_data(Cmd::DISPLAY_UPDATE_CTRL2, &[Flag::DISPLAY_UPDATE_FULL])?;
        self.interface.cmd(Cmd::MASTER_ACTIVATE)?;
        self.interface.wait_until_idle()?;
        log::info!("Refresh complete");
        Ok(())
    }

    fn use_full_frame(&mut self) -> Result<(), Error> {
        self.set_ram_area(0, 0, WIDTH - 1, HEIGHT - 1)?;
        self.set_ram_counter(0, 0)
    }

    /// RAM window; X in units of 8 pixels, Y as little-endian 16-bit rows.
    pub fn set_ram_area(
        &mut self,
        start_x: u16,
        start_y: u16,
        end_x: u16,
        end_y: u16,
    ) -> Result<(), Error> {
        log::debug!(
            "RAM window ({}, {})..({}, {})",
            start_x,
            start_y,
            end_x,
            end_y
        );
        self.interface.cmd_with_data(
            Cmd::SET_RAMX_START_END,
            &[(start_x >> 3) as u8, (end_x >> 3) as u8],
        )?;

        self.interface.cmd_with_data(
            Cmd::SET_RAMY_START_END,
            &[
                (start_y & 0xFF) as u8, // Start position LSB
                (start_y >> 8) as u8,   // Start position MSB
                (end_y & 0xFF) as u8,   // End position LSB
                (end_y >> 8) as u8,     // End position MSB
            ],
        )
    }

    /// RAM address counter. Must follow every window change.
    ///
    /// `x` is written as is, so it is a RAM byte address (8 pixels per step),
    /// not a pixel column like the `set_ram_area` bounds.
    pub fn set_ram_counter(&mut self, x: u16, y: u16) -> Result<(), Error> {
        self.interface
            .cmd_with_data(Cmd::SET_RAMX_COUNTER, &[(x & 0xFF) as u8])?;
        self.interface.cmd_with_data(
            Cmd::SET_RAMY_COUNTER,
            &[(y & 0xFF) as u8, (y >> 8) as u8],
        )
    }
}
