//! Error taxonomy of the driver.

use core::fmt;

use display_interface::DisplayError;

use crate::epd2in13_v4::buffer::Rotation;

/// Errors returned by the panel driver
#[derive(Debug, Clone)]
pub enum Error {
    /// A handle could not be put into its idle state when the session was opened
    Acquisition(&'static str),
    /// A pin or bus write failed in the middle of a sequence
    Interface(DisplayError),
    /// The BUSY line could not be read
    BusyPin,
    /// The controller kept BUSY high past the configured deadline
    DeviceUnresponsive {
        /// Milliseconds spent polling before giving up
        waited_ms: u32,
    },
    /// The model identifier does not name a known controller profile
    UnsupportedModel(String),
    /// A packed image does not match the panel's row-packed size
    BufferSize {
        /// Bytes the panel expects
        expected: usize,
        /// Bytes that were supplied
        actual: usize,
    },
    /// Rotated frames are not transposed before streaming
    UnrotatedFrame(Rotation),
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Error::Interface(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Acquisition(what) => write!(f, "cannot acquire {what}"),
            Self::Interface(e) => write!(f, "display interface error: {e:?}"),
            Self::BusyPin => write!(f, "cannot read BUSY pin"),
            Self::DeviceUnresponsive { waited_ms } => {
                write!(f, "controller still busy after {waited_ms} ms")
            }
            Self::UnsupportedModel(model) => write!(f, "unsupported model: {model}"),
            Self::BufferSize { expected, actual } => write!(
                f,
                "image is {actual} bytes, panel expects {expected} bytes"
            ),
            Self::UnrotatedFrame(rotation) => write!(
                f,
                "{rotation:?} frames are not transposed; render in the panel's native orientation"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// `DisplayError` has no `PartialEq`; interface errors compare by variant.
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Acquisition(a), Self::Acquisition(b)) => a == b,
            (Self::Interface(a), Self::Interface(b)) => {
                core::mem::discriminant(a) == core::mem::discriminant(b)
            }
            (Self::BusyPin, Self::BusyPin) => true,
            (
                Self::DeviceUnresponsive { waited_ms: a },
                Self::DeviceUnresponsive { waited_ms: b },
            ) => a == b,
            (Self::UnsupportedModel(a), Self::UnsupportedModel(b)) => a == b,
            (
                Self::BufferSize {
                    expected: ea,
                    actual: aa,
                },
                Self::BufferSize {
                    expected: eb,
                    actual: ab,
                },
            ) => ea == eb && aa == ab,
            (Self::UnrotatedFrame(a), Self::UnrotatedFrame(b)) => a == b,
            _ => false,
        }
    }
}
