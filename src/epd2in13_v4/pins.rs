//! Board wiring for the firmware binary.
//!
//! The driver itself only knows the logical lines (DC, CS, RST, BUSY); these
//! numbers are what the ESP32-S3 board routes them to.

/// GPIO numbers used by the panel on the reference board
pub struct Pins;

impl Pins {
    /// Chip Select pin (active low)
    pub const CS: u8 = 45;
    /// Data/Command select pin (High for data, Low for command)
    pub const DC: u8 = 46;
    /// Reset pin (active low pulse)
    pub const RST: u8 = 47;
    /// Busy status pin (High when the controller is busy)
    pub const BSY: u8 = 48;
    /// SPI Clock pin
    pub const SCK: u8 = 12;
    /// SPI Master Out Slave In
    pub const MOSI: u8 = 11;
    /// Panel power switch
    pub const POWER: u8 = 7;
}
