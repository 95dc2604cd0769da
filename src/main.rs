use anyhow::Context;

use epd2in13::config::{SPI_FREQUENCY_HZ, SPI_MODE};
use epd2in13::{Color, Config, DisplayInterface, Epaper, Panel};

use esp_idf_svc::hal::delay::Delay;
use esp_idf_svc::hal::gpio;
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::hal::prelude::*;
use esp_idf_svc::hal::spi;

/// Panel fitted to the board
const MODEL: &str = "EPD_2IN13_V4";

/// Time to look at each picture
const HOLD_MS: u32 = 2000;

// https://docs.esp-rs.org/esp-idf-svc/esp_idf_svc/
fn main() -> anyhow::Result<()> {
    // It is necessary to call this function once. Otherwise some patches to the runtime
    // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
    esp_idf_svc::sys::link_patches();

    // Bind the log crate to the ESP Logging facilities
    esp_idf_svc::log::EspLogger::initialize_default();

    let peripherals = Peripherals::take().context("Could not take peripherals")?;
    let pins = peripherals.pins;

    // CS is driven by the panel driver, not by the SPI peripheral
    log::info!("Configuring SPI bus at {} Hz", SPI_FREQUENCY_HZ);
    let driver = spi::SpiDriver::new(
        peripherals.spi2,
        pins.gpio12,                    // SCK - Pins::SCK
        pins.gpio11,                    // MOSI - Pins::MOSI
        Option::<gpio::AnyIOPin>::None, // No MISO needed for display
        &spi::SpiDriverConfig::new(),
    )
    .context("Could not create SPI driver")?;
    let bus = spi::SpiBusDriver::new(
        driver,
        &spi::SpiConfig::new()
            .baudrate(SPI_FREQUENCY_HZ.Hz().into())
            .data_mode(SPI_MODE),
    )
    .context("Could not create SPI bus driver")?;

    log::info!("Enabling display power");
    let mut power_pin =
        gpio::PinDriver::output(pins.gpio7).context("Failed to set power pin as output")?;
    power_pin
        .set_high()
        .context("Failed to set power pin high")?;

    let delay = Delay::default();
    delay.delay_ms(100); // Wait for power to stabilize

    let interface = DisplayInterface::new(
        bus,
        gpio::PinDriver::output(pins.gpio45).context("Failed to set cs pin as output")?, // Pins::CS
        gpio::PinDriver::output(pins.gpio46).context("Failed to set dc pin as output")?, // Pins::DC
        gpio::PinDriver::output(pins.gpio47).context("Failed to set rst pin as output")?, // Pins::RST
        gpio::PinDriver::input(pins.gpio48).context("Failed to set busy pin as input")?, // Pins::BSY
        delay,
        Config::default(),
    )
    .context("Could not open display session")?;

    let mut panel = Panel::open(MODEL, interface)?;

    log::info!("Init");
    panel.initialize().context("Display init failed")?;

    log::info!("Clear");
    panel.clear()?;
    delay.delay_ms(HOLD_MS);

    log::info!("Black");
    panel.paint(Color::Black)?;
    delay.delay_ms(HOLD_MS);

    log::info!("Clear");
    panel.clear()?;

    log::info!("Sleep");
    panel.sleep()?;

    Ok(())
}
