//! Driver timing and bus parameters.

use embedded_hal::spi::{Mode, MODE_0};

/// Serial clock the controller is driven at
pub const SPI_FREQUENCY_HZ: u32 = 4_000_000;

/// Clock idle low, sample on the rising edge. 8-bit words, MSB first.
pub const SPI_MODE: Mode = MODE_0;

const BUSY_POLL_MS: u32 = 10;
const BUSY_TIMEOUT_MS: u32 = 10_000;

/// Busy-wait behaviour of the driver
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Delay between two reads of the BUSY line
    pub busy_poll_ms: u32,
    /// Give up after this long; `None` waits forever
    pub busy_timeout_ms: Option<u32>,
}

impl Config {
    /// Poll until the controller drops BUSY, however long that takes.
    pub const fn unbounded() -> Self {
        Self {
            busy_poll_ms: BUSY_POLL_MS,
            busy_timeout_ms: None,
        }
    }

    /// Replace the busy-wait deadline.
    pub const fn with_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.busy_timeout_ms = Some(timeout_ms);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            busy_poll_ms: BUSY_POLL_MS,
            busy_timeout_ms: Some(BUSY_TIMEOUT_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::spi::{Phase, Polarity};

    #[test]
    fn default_is_bounded() {
        let config = Config::default();
        assert_eq!(config.busy_poll_ms, 10);
        assert_eq!(config.busy_timeout_ms, Some(10_000));
    }

    #[test]
    fn unbounded_keeps_poll_interval() {
        let config = Config::unbounded();
        assert_eq!(config.busy_poll_ms, 10);
        assert_eq!(config.busy_timeout_ms, None);
        assert_eq!(config.with_timeout_ms(50).busy_timeout_ms, Some(50));
    }

    #[test]
    fn bus_is_mode_0() {
        assert_eq!(SPI_MODE.polarity, Polarity::IdleLow);
        assert_eq!(SPI_MODE.phase, Phase::CaptureOnFirstTransition);
    }
}
