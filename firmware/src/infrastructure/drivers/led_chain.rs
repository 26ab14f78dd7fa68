use core::convert::Infallible;

use esp_hal::Blocking;
use esp_hal::gpio::{AnyPin, Level, Output, OutputConfig};
use esp_hal::peripherals::SPI2;
use esp_hal::spi::Mode;
use esp_hal::spi::master::{Config, ConfigError, Spi};
use esp_hal::time::Rate;

use tlc5947::ChainHandle;

use crate::config;

/// TLC5947 chain on the ESP32 SPI2 peripheral
pub type LedChain = ChainHandle<Spi<'static, Blocking>, Output<'static>, Output<'static>>;

/// Pins wired to the first TLC5947 of the chain
pub struct LedChainPins {
    pub sck: AnyPin<'static>,
    pub mosi: AnyPin<'static>,
    pub latch: AnyPin<'static>,
    pub blank: AnyPin<'static>,
}

#[derive(Debug)]
pub enum LedChainError {
    /// SPI peripheral rejected the configuration
    Spi(ConfigError),
    /// Chain handle could not be created
    Chain(tlc5947::Error<esp_hal::spi::Error, Infallible>),
}

/// Create the chain handle
///
/// BLANK starts high so the outputs stay dark until the handle has a zeroed
/// buffer and enables them.
pub fn init_led_chain(spi: SPI2<'static>, pins: LedChainPins) -> Result<LedChain, LedChainError> {
    let spi_config = Config::default()
        .with_frequency(Rate::from_khz(config::CHAIN.spi_frequency_khz))
        .with_mode(Mode::_0);
    let spi = Spi::new(spi, spi_config)
        .map_err(LedChainError::Spi)?
        .with_sck(pins.sck)
        .with_mosi(pins.mosi);

    let latch = Output::new(pins.latch, Level::Low, OutputConfig::default());
    let blank = Output::new(pins.blank, Level::High, OutputConfig::default());

    ChainHandle::new(config::CHAIN.num_devices, latch, blank, spi).map_err(LedChainError::Chain)
}
