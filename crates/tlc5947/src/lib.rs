#![no_std]

//! TLC5947 chain driver
//!
//! Layers:
//! - `buffer` - packed 12-bit grayscale storage in the chip's wire layout
//! - `chain` - [`ChainHandle`], owns the buffer and drives the shift-out/latch sequence
//! - `leds` - set/reset/toggle/blink helpers composed from the handle
//! - `duty` - duty-cycle presets
//!
//! The handle is generic over `embedded-hal` traits, so any SPI bus and pair of
//! output pins can drive a chain.

extern crate alloc;

pub mod buffer;
pub mod chain;
pub mod duty;
pub mod error;
pub mod leds;

pub use buffer::GrayscaleBuffer;
pub use chain::ChainHandle;
pub use duty::{CHANNELS_PER_DEVICE, FULL_ON, MAX_GRAYSCALE, OFF};
pub use error::{BufferError, Error, InvalidChannel};
