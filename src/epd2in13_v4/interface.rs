//! Display interface using SPI
//!
//! Owns the bus and the four control lines of one panel. Every command and
//! every data byte is framed on its own: DC selects the mode, CS is asserted,
//! the byte is shifted out and flushed, CS is released.
use display_interface::DisplayError;
use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiBus,
};

use crate::config::Config;
use crate::error::Error;

const RESET_HOLD_HIGH_MS: u32 = 20;
const RESET_PULSE_LOW_MS: u32 = 2;

/// Exclusive handles to the serial bus and control pins of a panel
pub struct DisplayInterface<SPI, CS, DC, RST, BSY, DELAY> {
    /// SPI bus, chip-select is driven separately
    spi: SPI,
    /// Chip select, active low
    cs: CS,
    /// Data/Command Control Pin (High for data, Low for command)
    dc: DC,
    /// Pin for Reseting
    rst: RST,
    /// High while the controller is busy
    busy: BSY,
    delay: DELAY,
    config: Config,
}

impl<SPI, CS, DC, RST, BSY, DELAY> DisplayInterface<SPI, CS, DC, RST, BSY, DELAY>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
    BSY: InputPin,
    DELAY: DelayNs,
{
    /// Take over the handles and release chip select.
    pub fn new(
        spi: SPI,
        cs: CS,
        dc: DC,
        rst: RST,
        busy: BSY,
        delay: DELAY,
        config: Config,
    ) -> Result<Self, Error> {
        let mut interface = DisplayInterface {
            spi,
            cs,
            dc,
            rst,
            busy,
            delay,
            config,
        };
        interface
            .cs
            .set_high()
            .map_err(|_| Error::Acquisition("chip select"))?;
        Ok(interface)
    }

    /// Hand the handles back.
    pub fn release(self) -> (SPI, CS, DC, RST, BSY, DELAY) {
        (self.spi, self.cs, self.dc, self.rst, self.busy, self.delay)
    }

    /// Busy-wait settings in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Send one opcode in command mode
    pub(crate) fn cmd(&mut self, command: u8) -> Result<(), Error> {
        // low for commands
        self.dc.set_low().map_err(|_| DisplayError::DCError)?;
        self.write_framed(command).inspect_err(|e| {
            log::error!("SPI write error for command 0x{:02X}: {}", command, e);
        })
    }

    /// Send one byte in data mode
    pub(crate) fn data(&mut self, byte: u8) -> Result<(), Error> {
        // high for data
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;
        self.write_framed(byte)
    }

    /// Send data bytes one framed byte at a time
    pub(crate) fn data_bytes(&mut self, data: &[u8]) -> Result<(), Error> {
        data.iter().try_for_each(|&byte| self.data(byte))
    }

    /// Opcode followed by its data bytes
    pub(crate) fn cmd_with_data(&mut self, command: u8, data: &[u8]) -> Result<(), Error> {
        self.cmd(command)?;
        self.data_bytes(data)
    }

    fn write_framed(&mut self, byte: u8) -> Result<(), Error> {
        self.cs.set_low().map_err(|_| DisplayError::CSError)?;
        let written = self
            .spi
            .write(&[byte])
            .and_then(|()| self.spi.flush())
            .map_err(|_| DisplayError::BusWriteError);
        // release CS even when the transfer failed
        let released = self.cs.set_high().map_err(|_| DisplayError::CSError);
        written?;
        released?;
        Ok(())
    }

    /// Latch a hardware reset: high, low pulse, high.
    pub(crate) fn reset(&mut self) -> Result<(), Error> {
        log::debug!("Hardware reset");
        self.rst.set_high().map_err(|_| DisplayError::RSError)?;
        self.delay.delay_ms(RESET_HOLD_HIGH_MS);
        self.rst.set_low().map_err(|_| DisplayError::RSError)?;
        self.delay.delay_ms(RESET_PULSE_LOW_MS);
        self.rst.set_high().map_err(|_| DisplayError::RSError)?;
        self.delay.delay_ms(RESET_HOLD_HIGH_MS);
        Ok(())
    }

    /// Poll BUSY until the controller drops it or the deadline passes
    pub(crate) fn wait_until_idle(&mut self) -> Result<(), Error> {
        let Config {
            busy_poll_ms,
            busy_timeout_ms,
        } = self.config;
        let poll_ms = busy_poll_ms.max(1);
        let mut waited_ms: u32 = 0;

        loop {
            if !self.busy.is_high().map_err(|_| Error::BusyPin)? {
                if waited_ms > 0 {
                    log::debug!("Controller idle after {} ms", waited_ms);
                }
                return Ok(());
            }
            if let Some(limit) = busy_timeout_ms {
                if waited_ms >= limit {
                    log::error!("BUSY still high after {} ms", waited_ms);
                    return Err(Error::DeviceUnresponsive { waited_ms });
                }
            }
            self.delay.delay_ms(poll_ms);
            waited_ms = waited_ms.saturating_add(poll_ms);
        }
    }
}
