//! Host-side test harness for the TLC5947 driver
//!
//! Provides recording stand-ins for the SPI bus, the XLAT/BLANK pins and the
//! delay provider, so tests can assert the exact sequence seen on the wire.

pub mod mock;

pub use mock::{Event, MockDelay, MockPin, MockPinError, MockSpi, MockSpiError, Recorder};

use tlc5947::ChainHandle;

/// Chain handle wired to mocks
pub type MockChain = ChainHandle<MockSpi, MockPin, MockPin>;

/// Create a chain of `num_devices` on mock hardware
///
/// The recorder is cleared after construction so only the events of the
/// test body are seen.
///
/// # Panics
///
/// Panics if the handle cannot be created.
pub fn mock_chain(num_devices: usize) -> (MockChain, Recorder) {
    let recorder = Recorder::default();
    let chain = ChainHandle::new(
        num_devices,
        MockPin::latch(&recorder),
        MockPin::blank(&recorder),
        MockSpi::new(&recorder),
    )
    .expect("mock chain");
    recorder.clear();
    (chain, recorder)
}
