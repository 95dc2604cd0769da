//! Fill colors for the black/white panel.

use embedded_graphics::pixelcolor::BinaryColor;

/// Byte written to RAM for an all-black run of 8 pixels
pub const BLACK: u8 = 0x00;
/// Byte written to RAM for an all-white run of 8 pixels
pub const WHITE: u8 = 0xFF;

/// Only black and white are supported by this controller profile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Color {
    /// All bits clear
    Black,
    /// All bits set
    #[default]
    White,
}

impl Color {
    /// Byte pattern covering 8 pixels of this color
    pub fn get_byte_value(self) -> u8 {
        match self {
            Color::Black => BLACK,
            Color::White => WHITE,
        }
    }

    /// Bit value of a single pixel of this color
    pub(crate) fn bit_value(self) -> u8 {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }
}

/// `BinaryColor::On` draws ink, which on this panel is black.
impl From<BinaryColor> for Color {
    fn from(color: BinaryColor) -> Self {
        match color {
            BinaryColor::On => Color::Black,
            BinaryColor::Off => Color::White,
        }
    }
}
