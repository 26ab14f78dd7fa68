use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, ErrorKind, SpiBus};

/// Something the driver did to the hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// One byte clocked out on SPI
    Byte(u8),
    /// SPI bus drained
    BusFlush,
    /// XLAT driven high (`true`) or low (`false`)
    Latch(bool),
    /// BLANK driven high (`true`) or low (`false`)
    Blank(bool),
    /// Delay in milliseconds
    DelayMs(u32),
    /// Delay in nanoseconds
    DelayNs(u32),
}

/// Shared, ordered log of hardware events
#[derive(Debug, Clone, Default)]
pub struct Recorder(Rc<RefCell<Vec<Event>>>);

impl Recorder {
    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    /// Everything recorded so far
    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    /// Bytes sent on SPI, in wire order
    pub fn bytes(&self) -> Vec<u8> {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Byte(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    /// Number of rising edges on XLAT
    pub fn latch_pulses(&self) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|e| **e == Event::Latch(true))
            .count()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockSpiError;

impl spi::Error for MockSpiError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// SPI bus that records every written byte
///
/// Can be told to fail on the n-th `write` call or on `flush`.
#[derive(Debug)]
pub struct MockSpi {
    recorder: Recorder,
    writes: usize,
    fail_at_write: Option<usize>,
    fail_flush: bool,
}

impl MockSpi {
    pub fn new(recorder: &Recorder) -> Self {
        Self {
            recorder: recorder.clone(),
            writes: 0,
            fail_at_write: None,
            fail_flush: false,
        }
    }

    /// Fail the `call`-th write (0-based, counted from now), succeed afterwards
    pub fn fail_at_write(&mut self, call: usize) {
        self.writes = 0;
        self.fail_at_write = Some(call);
    }

    /// Make every `flush` call fail
    pub fn fail_flush(&mut self, fail: bool) {
        self.fail_flush = fail;
    }

    /// Number of `write` calls so far, failed ones included
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl spi::ErrorType for MockSpi {
    type Error = MockSpiError;
}

impl SpiBus<u8> for MockSpi {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        words.fill(0);
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        let call = self.writes;
        self.writes += 1;
        if self.fail_at_write == Some(call) {
            self.fail_at_write = None;
            return Err(MockSpiError);
        }
        for &word in words {
            self.recorder.push(Event::Byte(word));
        }
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        read.fill(0);
        self.write(write)
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        self.write(words)?;
        words.fill(0);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        if self.fail_flush {
            return Err(MockSpiError);
        }
        self.recorder.push(Event::BusFlush);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl digital::Error for MockPinError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    Latch,
    Blank,
}

/// Output pin that records level changes
#[derive(Debug)]
pub struct MockPin {
    recorder: Recorder,
    line: Line,
    broken: bool,
}

impl MockPin {
    pub fn latch(recorder: &Recorder) -> Self {
        Self {
            recorder: recorder.clone(),
            line: Line::Latch,
            broken: false,
        }
    }

    pub fn blank(recorder: &Recorder) -> Self {
        Self {
            recorder: recorder.clone(),
            line: Line::Blank,
            broken: false,
        }
    }

    /// A pin whose every call fails
    #[must_use]
    pub fn broken(mut self) -> Self {
        self.broken = true;
        self
    }

    fn drive(&mut self, high: bool) -> Result<(), MockPinError> {
        if self.broken {
            return Err(MockPinError);
        }
        self.recorder.push(match self.line {
            Line::Latch => Event::Latch(high),
            Line::Blank => Event::Blank(high),
        });
        Ok(())
    }
}

impl digital::ErrorType for MockPin {
    type Error = MockPinError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true)
    }
}

/// Delay provider that returns immediately and records the request
#[derive(Debug, Clone)]
pub struct MockDelay {
    recorder: Recorder,
}

impl MockDelay {
    pub fn new(recorder: &Recorder) -> Self {
        Self {
            recorder: recorder.clone(),
        }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.recorder.push(Event::DelayNs(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.recorder.push(Event::DelayMs(ms));
    }
}
