//! Recording fake transport shared by the integration tests.
//!
//! All handles write into one event log so the relative order of pin changes,
//! bus bytes and delays can be checked.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, InputPin, OutputPin};
use embedded_hal::spi::{self, SpiBus};

use epd2in13::{Config, Epd2in13V4};

/// Output lines driven by the driver
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    Cs,
    Dc,
    Rst,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Output line driven high (`true`) or low
    Set(Line, bool),
    /// One byte shifted out on the bus
    Byte(u8),
    Flush,
    DelayMs(u32),
    DelayNs(u32),
    /// BUSY sampled, `true` = busy
    BusyRead(bool),
}

/// A byte as the controller sees it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    Command(u8),
    Data(u8),
}

#[derive(Default)]
pub struct Recorder {
    pub events: Vec<Event>,
    /// Levels returned by successive BUSY reads; idle once exhausted
    pub busy_script: VecDeque<bool>,
    pub fail_line: Option<Line>,
    /// Line that fails only when driven high
    pub fail_high: Option<Line>,
    pub fail_bus: bool,
}

pub type Shared = Rc<RefCell<Recorder>>;

pub struct FakeBus(Shared);
pub struct FakePin(Shared, Line);
pub struct FakeBusy(Shared);
pub struct FakeDelay(Shared);

impl spi::ErrorType for FakeBus {
    type Error = spi::ErrorKind;
}

impl SpiBus for FakeBus {
    fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        let mut rec = self.0.borrow_mut();
        if rec.fail_bus {
            return Err(spi::ErrorKind::Other);
        }
        rec.events.extend(words.iter().map(|&b| Event::Byte(b)));
        Ok(())
    }

    fn transfer(&mut self, _read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        self.write(write)
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        self.write(words)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().events.push(Event::Flush);
        Ok(())
    }
}

impl digital::ErrorType for FakePin {
    type Error = digital::ErrorKind;
}

impl FakePin {
    fn drive(&mut self, high: bool) -> Result<(), digital::ErrorKind> {
        let mut rec = self.0.borrow_mut();
        if rec.fail_line == Some(self.1) || (high && rec.fail_high == Some(self.1)) {
            return Err(digital::ErrorKind::Other);
        }
        rec.events.push(Event::Set(self.1, high));
        Ok(())
    }
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true)
    }
}

impl digital::ErrorType for FakeBusy {
    type Error = digital::ErrorKind;
}

impl InputPin for FakeBusy {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        let mut rec = self.0.borrow_mut();
        let level = rec.busy_script.pop_front().unwrap_or(false);
        rec.events.push(Event::BusyRead(level));
        Ok(level)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().events.push(Event::DelayNs(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().events.push(Event::DelayMs(ms));
    }
}

pub type FakeEpd = Epd2in13V4<FakeBus, FakePin, FakePin, FakePin, FakeBusy, FakeDelay>;

pub struct Handles {
    pub bus: FakeBus,
    pub cs: FakePin,
    pub dc: FakePin,
    pub rst: FakePin,
    pub busy: FakeBusy,
    pub delay: FakeDelay,
}

/// Fresh handles and the log they share
pub fn transport() -> (Handles, Shared) {
    let shared: Shared = Rc::new(RefCell::new(Recorder::default()));
    let handles = Handles {
        bus: FakeBus(shared.clone()),
        cs: FakePin(shared.clone(), Line::Cs),
        dc: FakePin(shared.clone(), Line::Dc),
        rst: FakePin(shared.clone(), Line::Rst),
        busy: FakeBusy(shared.clone()),
        delay: FakeDelay(shared.clone()),
    };
    (handles, shared)
}

/// Driver on a fresh fake transport with the log emptied after construction
pub fn epd_with(config: Config) -> (FakeEpd, Shared) {
    let (h, shared) = transport();
    let epd = Epd2in13V4::new(h.bus, h.cs, h.dc, h.rst, h.busy, h.delay, config)
        .expect("fake transport never fails to open");
    take_events(&shared);
    (epd, shared)
}

pub fn epd() -> (FakeEpd, Shared) {
    epd_with(Config::default())
}

pub fn take_events(shared: &Shared) -> Vec<Event> {
    std::mem::take(&mut shared.borrow_mut().events)
}

/// Queue BUSY levels for the next reads
pub fn script_busy(shared: &Shared, levels: impl IntoIterator<Item = bool>) {
    shared.borrow_mut().busy_script.extend(levels);
}

/// Decode bus bytes into commands and data by the DC level at shift time
pub fn frames(events: &[Event]) -> Vec<Frame> {
    let mut data_mode = false;
    let mut out = Vec::new();
    for event in events {
        match event {
            Event::Set(Line::Dc, high) => data_mode = *high,
            Event::Byte(b) if data_mode => out.push(Frame::Data(*b)),
            Event::Byte(b) => out.push(Frame::Command(*b)),
            _ => {}
        }
    }
    out
}

/// Command followed by its data bytes
pub fn cmd(opcode: u8, data: &[u8]) -> Vec<Frame> {
    std::iter::once(Frame::Command(opcode))
        .chain(data.iter().map(|&b| Frame::Data(b)))
        .collect()
}

/// Every byte is shifted with CS low and followed by flush and CS high
pub fn assert_framed(events: &[Event]) {
    for (i, event) in events.iter().enumerate() {
        if let Event::Byte(b) = event {
            assert_eq!(
                events.get(i.wrapping_sub(1)),
                Some(&Event::Set(Line::Cs, false)),
                "byte 0x{b:02X} at {i} not preceded by CS low"
            );
            assert_eq!(events.get(i + 1), Some(&Event::Flush), "byte at {i}");
            assert_eq!(
                events.get(i + 2),
                Some(&Event::Set(Line::Cs, true)),
                "byte 0x{b:02X} at {i} not followed by CS high"
            );
        }
    }
}
