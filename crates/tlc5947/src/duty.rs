/// Number of grayscale channels on a single TLC5947
pub const CHANNELS_PER_DEVICE: usize = 24;

/// Largest value a 12-bit grayscale register can hold
pub const MAX_GRAYSCALE: u16 = 4095;

/// Channel fully off
pub const OFF: u16 = 0;

/// Channel at full duty cycle
pub const FULL_ON: u16 = MAX_GRAYSCALE;

/// Convert a duty cycle percentage (0-100) to a grayscale value
///
/// Percentages above 100 are treated as 100. Uses integer math, so
/// `from_percent(50)` is 2047 rather than 2047.5.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn from_percent(percent: u8) -> u16 {
    let percent = if percent > 100 { 100 } else { percent };
    (percent as u32 * MAX_GRAYSCALE as u32 / 100) as u16
}

/// Limit a value to the 12-bit grayscale range
#[inline]
pub const fn clamp(value: u16) -> u16 {
    if value > MAX_GRAYSCALE {
        MAX_GRAYSCALE
    } else {
        value
    }
}
