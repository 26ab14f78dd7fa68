use core::fmt;

/// Channel address outside of the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidChannel {
    pub channel: usize,
    pub channel_count: usize,
}

impl fmt::Display for InvalidChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "channel {} is out of range (chain has {} channels)",
            self.channel, self.channel_count
        )
    }
}

impl core::error::Error for InvalidChannel {}

/// Errors returned while allocating a grayscale buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// Zero devices, or a chain too long to address
    InvalidDeviceCount(usize),
    /// The allocator could not provide the buffer
    Memory,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::InvalidDeviceCount(count) => {
                write!(f, "invalid device count: {count}")
            }
            BufferError::Memory => f.write_str("not enough memory for grayscale buffer"),
        }
    }
}

impl core::error::Error for BufferError {}

/// Driver error
///
/// `S` is the SPI bus error, `P` the error of the latch and blank pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<S, P> {
    /// Channel address out of range
    InvalidChannel(InvalidChannel),
    /// Zero devices, or a chain too long to address
    InvalidDeviceCount(usize),
    /// Grayscale buffer allocation failed
    Memory,
    /// SPI write failed, nothing was latched
    Transport(S),
    /// Latch or blank line could not be driven
    Pin(P),
}

impl<S, P> From<InvalidChannel> for Error<S, P> {
    fn from(value: InvalidChannel) -> Self {
        Self::InvalidChannel(value)
    }
}

impl<S, P> From<BufferError> for Error<S, P> {
    fn from(value: BufferError) -> Self {
        match value {
            BufferError::InvalidDeviceCount(count) => Self::InvalidDeviceCount(count),
            BufferError::Memory => Self::Memory,
        }
    }
}

impl<S: fmt::Debug, P: fmt::Debug> fmt::Display for Error<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidChannel(e) => e.fmt(f),
            Error::InvalidDeviceCount(count) => write!(f, "invalid device count: {count}"),
            Error::Memory => f.write_str("not enough memory for grayscale buffer"),
            Error::Transport(e) => write!(f, "spi transfer failed: {e:?}"),
            Error::Pin(e) => write!(f, "control pin failed: {e:?}"),
        }
    }
}

impl<S: fmt::Debug, P: fmt::Debug> core::error::Error for Error<S, P> {}
