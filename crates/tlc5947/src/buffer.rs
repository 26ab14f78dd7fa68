//! Packed grayscale buffer
//!
//! The TLC5947 shift register holds 24 channels of 12 bits each, so two
//! channels share three bytes. For channel `c` the first byte is `3 * c / 2`:
//!
//! ```text
//!  byte:      base           base + 1
//!  even c:  [ v[7:0]   ] [ next  | v[11:8] ]
//!  odd c:   [ v[3:0] | prev ] [ v[11:4]   ]
//! ```
//!
//! The buffer is stored in channel order. The chain expects the last channel
//! first on the wire, so [`ChainHandle::flush`](crate::ChainHandle::flush)
//! sends it back to front.

use alloc::vec::Vec;

use crate::duty::{self, CHANNELS_PER_DEVICE};
use crate::error::{BufferError, InvalidChannel};

const LOW_NIBBLE: u8 = 0x0F;
const HIGH_NIBBLE: u8 = 0xF0;

/// Grayscale values of every channel of a device chain, in wire format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayscaleBuffer {
    bytes: Vec<u8>,
    num_devices: usize,
    channel_count: usize,
}

impl GrayscaleBuffer {
    /// Allocate a zeroed buffer for `num_devices` chained chips
    ///
    /// Fails with [`BufferError::Memory`] when the allocator cannot provide
    /// the bytes, and with [`BufferError::InvalidDeviceCount`] for an empty
    /// chain or one too long to address.
    pub fn new(num_devices: usize) -> Result<Self, BufferError> {
        let channel_count = num_devices
            .checked_mul(CHANNELS_PER_DEVICE)
            .filter(|&count| count > 0)
            .ok_or(BufferError::InvalidDeviceCount(num_devices))?;
        let len = channel_count
            .checked_mul(3)
            .map(|bits| bits / 2)
            .ok_or(BufferError::InvalidDeviceCount(num_devices))?;

        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(len)
            .map_err(|_| BufferError::Memory)?;
        bytes.resize(len, 0);

        Ok(Self {
            bytes,
            num_devices,
            channel_count,
        })
    }

    /// Number of chips in the chain
    #[inline]
    pub fn num_devices(&self) -> usize {
        self.num_devices
    }

    /// Number of addressable channels, `24 * num_devices`
    #[inline]
    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    /// Length of the packed buffer in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false, a buffer holds at least one device
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Packed bytes in channel order (byte 0 holds channel 0)
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Store `value` for `channel`
    ///
    /// Values above [`MAX_GRAYSCALE`](crate::MAX_GRAYSCALE) are clamped.
    /// Only the nibbles owned by `channel` change; the buffer is left
    /// untouched when the channel is out of range.
    #[allow(clippy::cast_possible_truncation)]
    pub fn set(&mut self, channel: usize, value: u16) -> Result<(), InvalidChannel> {
        self.check(channel)?;

        let value = duty::clamp(value);
        let base = 3 * channel / 2;
        if channel % 2 == 0 {
            self.bytes[base] = value as u8;
            self.bytes[base + 1] =
                (self.bytes[base + 1] & HIGH_NIBBLE) | ((value >> 8) as u8 & LOW_NIBBLE);
        } else {
            self.bytes[base] = (self.bytes[base] & LOW_NIBBLE) | ((value << 4) as u8 & HIGH_NIBBLE);
            self.bytes[base + 1] = (value >> 4) as u8;
        }
        Ok(())
    }

    /// Value stored for `channel`, `None` if the channel is out of range
    pub fn get(&self, channel: usize) -> Option<u16> {
        if channel >= self.channel_count {
            return None;
        }

        let base = 3 * channel / 2;
        let low = u16::from(self.bytes[base]);
        let high = u16::from(self.bytes[base + 1]);
        let value = if channel % 2 == 0 {
            low | ((high & u16::from(LOW_NIBBLE)) << 8)
        } else {
            (low >> 4) | (high << 4)
        };
        Some(value)
    }

    /// Store the same value in every channel
    #[allow(clippy::cast_possible_truncation)]
    pub fn fill(&mut self, value: u16) {
        let value = duty::clamp(value);
        let pair = [
            value as u8,
            ((value << 4) as u8 & HIGH_NIBBLE) | ((value >> 8) as u8 & LOW_NIBBLE),
            (value >> 4) as u8,
        ];
        for chunk in self.bytes.chunks_exact_mut(3) {
            chunk.copy_from_slice(&pair);
        }
    }

    /// Turn every channel off
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    #[inline]
    fn check(&self, channel: usize) -> Result<(), InvalidChannel> {
        if channel < self.channel_count {
            Ok(())
        } else {
            Err(InvalidChannel {
                channel,
                channel_count: self.channel_count,
            })
        }
    }
}
