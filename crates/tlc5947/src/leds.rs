//! LED helpers
//!
//! Treats every channel as one LED and combines buffer writes with a flush.
//! Mask helpers take one `bool` per channel, index 0 being channel 0, and
//! flush once after the whole mask is applied.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::chain::{ChainHandle, ChainResult};
use crate::duty::{FULL_ON, OFF};
use crate::error::{Error, InvalidChannel};

impl<SPI, LATCH, BLANK> ChainHandle<SPI, LATCH, BLANK>
where
    SPI: SpiBus<u8>,
    LATCH: OutputPin,
    BLANK: OutputPin<Error = LATCH::Error>,
{
    /// Set one channel and send the update to the chain
    pub fn set_brightness(&mut self, channel: usize, value: u16) -> ChainResult<(), SPI, LATCH> {
        self.set(channel, value)?;
        self.flush()
    }

    /// Turn an LED fully on
    pub fn set_led(&mut self, channel: usize) -> ChainResult<(), SPI, LATCH> {
        self.set_brightness(channel, FULL_ON)
    }

    /// Turn an LED off
    pub fn reset_led(&mut self, channel: usize) -> ChainResult<(), SPI, LATCH> {
        self.set_brightness(channel, OFF)
    }

    /// Turn an LED off if it is lit at any level, fully on otherwise
    pub fn toggle_led(&mut self, channel: usize) -> ChainResult<(), SPI, LATCH> {
        let value = self.toggled(channel)?;
        self.set_brightness(channel, value)
    }

    /// Turn an LED on, wait `delay_ms`, turn it off
    pub fn blink_led<D: DelayNs>(
        &mut self,
        channel: usize,
        delay: &mut D,
        delay_ms: u32,
    ) -> ChainResult<(), SPI, LATCH> {
        self.set_led(channel)?;
        delay.delay_ms(delay_ms);
        self.reset_led(channel)
    }

    /// Turn on every LED whose mask entry is `true`, leave the rest as they are
    pub fn set_leds(&mut self, mask: &[bool]) -> ChainResult<(), SPI, LATCH> {
        self.apply_mask(mask, |selected, current| if selected { FULL_ON } else { current })
    }

    /// Turn off every LED whose mask entry is `true`, leave the rest as they are
    pub fn reset_leds(&mut self, mask: &[bool]) -> ChainResult<(), SPI, LATCH> {
        self.apply_mask(mask, |selected, current| if selected { OFF } else { current })
    }

    /// Toggle every LED whose mask entry is `true`
    pub fn toggle_leds(&mut self, mask: &[bool]) -> ChainResult<(), SPI, LATCH> {
        self.apply_mask(mask, |selected, current| match (selected, current) {
            (false, current) => current,
            (true, OFF) => FULL_ON,
            (true, _) => OFF,
        })
    }

    /// Show the mask as-is: `true` fully on, `false` off
    pub fn write_leds(&mut self, mask: &[bool]) -> ChainResult<(), SPI, LATCH> {
        self.apply_mask(mask, |selected, _| if selected { FULL_ON } else { OFF })
    }

    /// Turn the masked LEDs on, wait `delay_ms`, turn them off
    pub fn blink_leds<D: DelayNs>(
        &mut self,
        mask: &[bool],
        delay: &mut D,
        delay_ms: u32,
    ) -> ChainResult<(), SPI, LATCH> {
        self.set_leds(mask)?;
        delay.delay_ms(delay_ms);
        self.reset_leds(mask)
    }

    fn toggled(&self, channel: usize) -> Result<u16, InvalidChannel> {
        match self.get(channel) {
            Some(OFF) => Ok(FULL_ON),
            Some(_) => Ok(OFF),
            None => Err(InvalidChannel {
                channel,
                channel_count: self.channel_count(),
            }),
        }
    }

    /// Rewrite the channels covered by `mask`, then flush once
    ///
    /// A mask longer than the chain is rejected before anything is written.
    fn apply_mask<F>(&mut self, mask: &[bool], mut value: F) -> ChainResult<(), SPI, LATCH>
    where
        F: FnMut(bool, u16) -> u16,
    {
        let channel_count = self.channel_count();
        if mask.len() > channel_count {
            return Err(Error::InvalidChannel(InvalidChannel {
                channel: mask.len() - 1,
                channel_count,
            }));
        }

        for (channel, &selected) in mask.iter().enumerate() {
            let current = self.get(channel).unwrap_or(OFF);
            self.set(channel, value(selected, current))?;
        }
        self.flush()
    }
}
