pub struct ChainConfig {
    /// Number of daisy-chained TLC5947 boards
    pub num_devices: usize,
    /// SPI clock, the TLC5947 accepts up to 30 MHz
    pub spi_frequency_khz: u32,
}

pub struct AnimationConfig {
    /// Brightness of the lit channel, in percent
    pub brightness_percent: u8,
    /// Time each channel stays lit
    pub step_ms: u64,
    /// Length of the power-on flash of every channel
    pub self_test_ms: u32,
}

#[cfg(feature = "chain-2")]
pub const CHAIN: ChainConfig = ChainConfig {
    num_devices: 2,
    spi_frequency_khz: 4_000,
};
#[cfg(feature = "chain-4")]
pub const CHAIN: ChainConfig = ChainConfig {
    num_devices: 4,
    spi_frequency_khz: 2_000,
};
#[cfg(not(any(feature = "chain-2", feature = "chain-4")))]
pub const CHAIN: ChainConfig = ChainConfig {
    num_devices: 1,
    spi_frequency_khz: 4_000,
};

pub const ANIMATION: AnimationConfig = AnimationConfig {
    brightness_percent: 40,
    step_ms: 80,
    self_test_ms: 300,
};

/// SCK, MOSI (SIN), XLAT and BLANK pins
#[macro_export]
macro_rules! tlc5947_pins {
    ($p:expr) => {
        $crate::infrastructure::drivers::LedChainPins {
            sck: esp_hal::gpio::Pin::degrade($p.GPIO18),
            mosi: esp_hal::gpio::Pin::degrade($p.GPIO23),
            latch: esp_hal::gpio::Pin::degrade($p.GPIO5),
            blank: esp_hal::gpio::Pin::degrade($p.GPIO4),
        }
    };
}
