//! Row-packed frame buffer
//!
//! The controller takes 1 bit per pixel, 8 horizontal pixels per byte with the
//! leftmost pixel in the most significant bit, rows top to bottom. A row whose
//! width is not a multiple of 8 is padded up to the next whole byte.
//!
//! Rotation is bookkeeping only: a 90 or 270 degree canvas reports swapped
//! logical dimensions, but the bytes stay in the panel's native layout. Nothing
//! here transposes pixels.

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Pixel, Size},
};

use crate::color::Color;
use crate::error::Error;

/// Bytes needed for one row of `width` pixels
pub const fn row_bytes(width: u16) -> usize {
    let width = width as usize;
    if width % 8 == 0 {
        width / 8
    } else {
        width / 8 + 1
    }
}

/// Bytes needed for a whole `width` x `height` frame
pub const fn frame_len(width: u16, height: u16) -> usize {
    row_bytes(width) * height as usize
}

/// Orientation of a canvas relative to the panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Rotation {
    /// Native orientation
    #[default]
    Rotate0,
    /// Quarter turn clockwise
    Rotate90,
    /// Half turn
    Rotate180,
    /// Three quarter turn clockwise
    Rotate270,
}

impl Rotation {
    /// Parse a rotation given in degrees; only right angles are valid.
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Rotation::Rotate0),
            90 => Some(Rotation::Rotate90),
            180 => Some(Rotation::Rotate180),
            270 => Some(Rotation::Rotate270),
            _ => None,
        }
    }

    /// Rotation in degrees
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Rotate0 => 0,
            Rotation::Rotate90 => 90,
            Rotation::Rotate180 => 180,
            Rotation::Rotate270 => 270,
        }
    }

    /// Whether width and height trade places under this rotation
    pub fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Rotate90 | Rotation::Rotate270)
    }
}

/// Size, orientation and fill color of a frame to build
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    /// Pixels per row in the panel's native orientation
    pub width: u16,
    /// Rows in the panel's native orientation
    pub height: u16,
    /// Orientation the caller draws in
    pub rotation: Rotation,
    /// Uniform fill
    pub color: Color,
}

impl Canvas {
    /// White, unrotated canvas
    pub fn new(width: u16, height: u16) -> Self {
        Canvas {
            width,
            height,
            rotation: Rotation::Rotate0,
            color: Color::White,
        }
    }

    /// Same canvas with another rotation
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Same canvas with another fill color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Width and height as seen by the caller, swapped for 90 and 270 degrees
    pub fn logical_size(&self) -> (u16, u16) {
        if self.rotation.swaps_axes() {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }

    /// Length of the packed buffer for this canvas
    pub fn frame_len(&self) -> usize {
        frame_len(self.width, self.height)
    }
}

/// Packed 1bpp pixel data for one canvas
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    canvas: Canvas,
    bytes: Vec<u8>,
}

impl FrameBuffer {
    /// Build a buffer with every byte set to the canvas color.
    pub fn filled(canvas: Canvas) -> Self {
        let bytes = vec![canvas.color.get_byte_value(); canvas.frame_len()];
        FrameBuffer { canvas, bytes }
    }

    /// Wrap bytes that were packed elsewhere, e.g. a decoded bitmap.
    ///
    /// The canvas color is ignored; the length must match the canvas exactly.
    pub fn from_packed(canvas: Canvas, bytes: &[u8]) -> Result<Self, Error> {
        let expected = canvas.frame_len();
        if bytes.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(FrameBuffer {
            canvas,
            bytes: bytes.to_vec(),
        })
    }

    /// Canvas this buffer was built from
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Packed bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Bytes per row
    pub fn row_bytes(&self) -> usize {
        row_bytes(self.canvas.width)
    }

    /// Rows of packed data; none for a zero-width canvas
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // zero width has no bytes; chunks() only needs a non-zero size
        self.bytes.chunks(self.row_bytes().max(1))
    }

    /// Set one pixel in native panel coordinates. Out of range is ignored.
    pub fn set_pixel(&mut self, x: u16, y: u16, color: Color) {
        if let Some((index, mask)) = self.locate(x, y) {
            if color.bit_value() == 1 {
                self.bytes[index] |= mask;
            } else {
                self.bytes[index] &= !mask;
            }
        }
    }

    /// Read one pixel in native panel coordinates.
    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        let (index, mask) = self.locate(x, y)?;
        Some(if self.bytes[index] & mask != 0 {
            Color::White
        } else {
            Color::Black
        })
    }

    fn locate(&self, x: u16, y: u16) -> Option<(usize, u8)> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        let index = usize::from(y) * self.row_bytes() + usize::from(x / 8);
        Some((index, 0x80 >> (x % 8)))
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(u32::from(self.canvas.width), u32::from(self.canvas.height))
    }
}

/// Draws in native panel coordinates regardless of the canvas rotation.
impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (u16::try_from(point.x), u16::try_from(point.y)) {
                self.set_pixel(x, y, color.into());
            }
        }
        Ok(())
    }
}
