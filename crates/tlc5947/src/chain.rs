//! Chain handle
//!
//! Owns the packed buffer together with the SPI bus and the XLAT (latch)
//! and BLANK lines of one TLC5947 chain.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::buffer::GrayscaleBuffer;
use crate::error::{Error, InvalidChannel};

/// Result of a chain operation
pub type ChainResult<T, SPI, LATCH> = Result<
    T,
    Error<
        <SPI as embedded_hal::spi::ErrorType>::Error,
        <LATCH as embedded_hal::digital::ErrorType>::Error,
    >,
>;

/// Handle to a chain of TLC5947 drivers
///
/// Channel writes only touch the in-memory buffer; nothing reaches the chips
/// until [`flush`](Self::flush) shifts the whole chain out and latches it.
pub struct ChainHandle<SPI, LATCH, BLANK> {
    spi: SPI,
    latch: LATCH,
    blank: BLANK,
    buffer: GrayscaleBuffer,
}

impl<SPI, LATCH, BLANK> ChainHandle<SPI, LATCH, BLANK>
where
    SPI: SpiBus<u8>,
    LATCH: OutputPin,
    BLANK: OutputPin<Error = LATCH::Error>,
{
    /// Create a handle for `num_devices` chained chips and enable the outputs
    ///
    /// Every channel starts at 0. The buffer is allocated before any pin is
    /// touched, so a [`Error::Memory`] failure leaves the hardware as it was.
    pub fn new(
        num_devices: usize,
        latch: LATCH,
        blank: BLANK,
        spi: SPI,
    ) -> ChainResult<Self, SPI, LATCH> {
        let buffer = GrayscaleBuffer::new(num_devices).map_err(|e| {
            #[cfg(feature = "log")]
            log::warn!("tlc5947: cannot create buffer for {} devices: {}", num_devices, e);
            Error::from(e)
        })?;

        let mut handle = Self {
            spi,
            latch,
            blank,
            buffer,
        };
        handle.enable_outputs()?;

        #[cfg(feature = "log")]
        log::debug!(
            "tlc5947: chain ready, devices={} channels={} bytes={}",
            num_devices,
            handle.buffer.channel_count(),
            handle.buffer.len()
        );

        Ok(handle)
    }

    /// Drop the buffer and give back the bus and pins
    pub fn release(self) -> (SPI, LATCH, BLANK) {
        (self.spi, self.latch, self.blank)
    }

    /// Number of chips in the chain
    #[inline]
    pub fn num_devices(&self) -> usize {
        self.buffer.num_devices()
    }

    /// Number of addressable channels
    #[inline]
    pub fn channel_count(&self) -> usize {
        self.buffer.channel_count()
    }

    /// Read access to the packed buffer
    #[inline]
    pub fn buffer(&self) -> &GrayscaleBuffer {
        &self.buffer
    }

    /// Store a grayscale value for `channel`, clamped to 12 bits
    ///
    /// Takes effect on the next [`flush`](Self::flush).
    pub fn set(&mut self, channel: usize, value: u16) -> Result<(), InvalidChannel> {
        self.buffer.set(channel, value).inspect_err(|_e| {
            #[cfg(feature = "log")]
            log::warn!("tlc5947: {}", _e);
        })
    }

    /// Buffered value of `channel`, `None` if out of range
    #[inline]
    pub fn get(&self, channel: usize) -> Option<u16> {
        self.buffer.get(channel)
    }

    /// Store the same value in every channel
    pub fn fill(&mut self, value: u16) {
        self.buffer.fill(value);
    }

    /// Set every buffered channel to 0
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Shift the buffer out to the chain and latch it
    ///
    /// The last byte is sent first: data entering the chain first ends up in
    /// the chip furthest from the controller. Bytes go out one per SPI write.
    /// If any write fails the latch is not pulsed, so the chips keep showing
    /// their previous values, and the buffer is kept for the next attempt.
    pub fn flush(&mut self) -> ChainResult<(), SPI, LATCH> {
        self.latch.set_low().map_err(Error::Pin)?;

        for (_index, byte) in self.buffer.as_bytes().iter().enumerate().rev() {
            self.spi.write(core::slice::from_ref(byte)).map_err(|e| {
                #[cfg(feature = "log")]
                log::warn!("tlc5947: spi write failed at byte {}", _index);
                Error::Transport(e)
            })?;
        }
        self.spi.flush().map_err(Error::Transport)?;

        self.latch.set_high().map_err(Error::Pin)?;
        self.latch.set_low().map_err(Error::Pin)?;

        #[cfg(feature = "log")]
        log::debug!("tlc5947: latched {} bytes", self.buffer.len());

        Ok(())
    }

    /// Let the chips drive their outputs (BLANK low)
    pub fn enable_outputs(&mut self) -> ChainResult<(), SPI, LATCH> {
        self.blank.set_low().map_err(Error::Pin)
    }

    /// Force every output off regardless of latched data (BLANK high)
    pub fn disable_outputs(&mut self) -> ChainResult<(), SPI, LATCH> {
        self.blank.set_high().map_err(Error::Pin)
    }
}
