//! Panel models and the operations every model supports.

use core::fmt;
use core::str::FromStr;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiBus;

use crate::color::Color;
use crate::epd2in13_v4::driver::Epd2in13V4;
use crate::epd2in13_v4::interface::DisplayInterface;
use crate::error::Error;

/// Known controller profiles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Model {
    /// Waveshare 2.13" V4, 122x250 black/white
    Epd2in13V4,
}

impl Model {
    /// Identifier used in configuration
    pub fn id(self) -> &'static str {
        match self {
            Model::Epd2in13V4 => "EPD_2IN13_V4",
        }
    }

    /// Panel size as (width, height) in native orientation
    pub fn size(self) -> (u16, u16) {
        match self {
            Model::Epd2in13V4 => (crate::epd2in13_v4::WIDTH, crate::epd2in13_v4::HEIGHT),
        }
    }
}

impl FromStr for Model {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EPD_2IN13_V4" => Ok(Model::Epd2in13V4),
            other => Err(Error::UnsupportedModel(other.to_string())),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// What a caller can do with any e-paper panel
pub trait Epaper {
    /// Reset and configure the controller
    fn initialize(&mut self) -> Result<(), Error>;

    /// Fill the panel with one color and refresh
    fn paint(&mut self, color: Color) -> Result<(), Error>;

    /// Show a packed 1bpp image the size of the panel
    fn paint_image(&mut self, image: &[u8]) -> Result<(), Error>;

    /// Paint the panel white
    fn clear(&mut self) -> Result<(), Error> {
        self.paint(Color::White)
    }

    /// Put the controller into deep sleep
    fn sleep(&mut self) -> Result<(), Error>;
}

impl<SPI, CS, DC, RST, BSY, DELAY> Epaper for Epd2in13V4<SPI, CS, DC, RST, BSY, DELAY>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
    BSY: InputPin,
    DELAY: DelayNs,
{
    fn initialize(&mut self) -> Result<(), Error> {
        Epd2in13V4::initialize(self)
    }

    fn paint(&mut self, color: Color) -> Result<(), Error> {
        Epd2in13V4::paint(self, color)
    }

    fn paint_image(&mut self, image: &[u8]) -> Result<(), Error> {
        Epd2in13V4::paint_image(self, image)
    }

    fn clear(&mut self) -> Result<(), Error> {
        Epd2in13V4::clear(self)
    }

    fn sleep(&mut self) -> Result<(), Error> {
        Epd2in13V4::sleep(self)
    }
}

/// A panel of any supported model on one session
pub enum Panel<SPI, CS, DC, RST, BSY, DELAY> {
    /// Waveshare 2.13" V4
    Epd2in13V4(Epd2in13V4<SPI, CS, DC, RST, BSY, DELAY>),
}

impl<SPI, CS, DC, RST, BSY, DELAY> Panel<SPI, CS, DC, RST, BSY, DELAY>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
    BSY: InputPin,
    DELAY: DelayNs,
{
    /// Pick the driver for `model` on an opened session.
    pub fn new(model: Model, interface: DisplayInterface<SPI, CS, DC, RST, BSY, DELAY>) -> Self {
        log::info!("Using {} driver", model);
        match model {
            Model::Epd2in13V4 => Panel::Epd2in13V4(Epd2in13V4::from_interface(interface)),
        }
    }

    /// Look up `model_id` and pick its driver.
    pub fn open(
        model_id: &str,
        interface: DisplayInterface<SPI, CS, DC, RST, BSY, DELAY>,
    ) -> Result<Self, Error> {
        let model = model_id.parse()?;
        Ok(Self::new(model, interface))
    }

    /// Model of the selected driver
    pub fn model(&self) -> Model {
        match self {
            Panel::Epd2in13V4(_) => Model::Epd2in13V4,
        }
    }
}

impl<SPI, CS, DC, RST, BSY, DELAY> Epaper for Panel<SPI, CS, DC, RST, BSY, DELAY>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
    BSY: InputPin,
    DELAY: DelayNs,
{
    fn initialize(&mut self) -> Result<(), Error> {
        match self {
            Panel::Epd2in13V4(epd) => epd.initialize(),
        }
    }

    fn paint(&mut self, color: Color) -> Result<(), Error> {
        match self {
            Panel::Epd2in13V4(epd) => epd.paint(color),
        }
    }

    fn paint_image(&mut self, image: &[u8]) -> Result<(), Error> {
        match self {
            Panel::Epd2in13V4(epd) => epd.paint_image(image),
        }
    }

    fn clear(&mut self) -> Result<(), Error> {
        match self {
            Panel::Epd2in13V4(epd) => epd.clear(),
        }
    }

    fn sleep(&mut self) -> Result<(), Error> {
        match self {
            Panel::Epd2in13V4(epd) => epd.sleep(),
        }
    }
}
