//! Chase animation
//!
//! Lights one channel at a time, walking along the whole chain.

use embassy_time::{Delay, Duration, Timer};
use log::warn;

use tlc5947::duty;

use crate::config::ANIMATION;
use crate::infrastructure::drivers::LedChain;

/// Flash every channel once so a broken board or cable shows up at boot
pub fn self_test(chain: &mut LedChain) {
    let mask = [true; tlc5947::CHANNELS_PER_DEVICE * crate::config::CHAIN.num_devices];
    if let Err(e) = chain.blink_leds(&mask, &mut Delay, ANIMATION.self_test_ms) {
        warn!("led_chain: self test failed: {:?}", e);
    }
}

#[embassy_executor::task]
pub async fn chase_task(mut chain: LedChain) {
    let level = duty::from_percent(ANIMATION.brightness_percent);
    let step = Duration::from_millis(ANIMATION.step_ms);
    let channels = chain.channel_count();

    loop {
        for channel in 0..channels {
            chain.clear();
            if let Err(e) = chain.set_brightness(channel, level) {
                warn!("led_chain: update of channel {} failed: {:?}", channel, e);
            }
            Timer::after(step).await;
        }
    }
}
