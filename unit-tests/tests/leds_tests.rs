//! Tests for the single-LED and mask helpers.

use tests::{Event, MockChain, MockDelay, MockPin, MockSpi, Recorder, mock_chain};
use tlc5947::{ChainHandle, Error, FULL_ON, InvalidChannel, OFF, duty};

/// Chain whose first SPI write fails
fn broken_bus_chain() -> (MockChain, Recorder) {
    let recorder = Recorder::default();
    let mut spi = MockSpi::new(&recorder);
    spi.fail_at_write(0);
    let chain =
        ChainHandle::new(1, MockPin::latch(&recorder), MockPin::blank(&recorder), spi).unwrap();
    recorder.clear();
    (chain, recorder)
}

#[test]
fn set_brightness_writes_and_latches() {
    let (mut chain, recorder) = mock_chain(1);

    chain.set_brightness(2, duty::from_percent(50)).unwrap();

    assert_eq!(chain.get(2), Some(2047));
    assert_eq!(recorder.bytes().len(), 36);
    assert_eq!(recorder.latch_pulses(), 1);
}

#[test]
fn set_and_reset_led() {
    let (mut chain, recorder) = mock_chain(1);

    chain.set_led(9).unwrap();
    assert_eq!(chain.get(9), Some(FULL_ON));

    chain.reset_led(9).unwrap();
    assert_eq!(chain.get(9), Some(OFF));
    assert_eq!(recorder.latch_pulses(), 2);
}

#[test]
fn invalid_channel_does_not_flush() {
    let (mut chain, recorder) = mock_chain(1);

    let result = chain.set_led(24);

    assert!(matches!(
        result,
        Err(Error::InvalidChannel(InvalidChannel {
            channel: 24,
            channel_count: 24,
        }))
    ));
    assert!(recorder.events().is_empty());
}

#[test]
fn toggle_flips_between_off_and_full() {
    let (mut chain, _recorder) = mock_chain(1);

    chain.toggle_led(4).unwrap();
    assert_eq!(chain.get(4), Some(FULL_ON));

    chain.toggle_led(4).unwrap();
    assert_eq!(chain.get(4), Some(OFF));
}

#[test]
fn toggle_turns_a_dimmed_led_off() {
    let (mut chain, _recorder) = mock_chain(1);
    chain.set(4, 100).unwrap();

    chain.toggle_led(4).unwrap();

    assert_eq!(chain.get(4), Some(OFF));
}

#[test]
fn toggle_of_missing_channel_is_rejected() {
    let (mut chain, recorder) = mock_chain(2);

    assert!(matches!(
        chain.toggle_led(48),
        Err(Error::InvalidChannel(_))
    ));
    assert!(recorder.events().is_empty());
}

#[test]
fn blink_sets_waits_and_resets() {
    let (mut chain, recorder) = mock_chain(1);
    let mut delay = MockDelay::new(&recorder);

    chain.blink_led(0, &mut delay, 250).unwrap();

    let events = recorder.events();
    let delay_at = events
        .iter()
        .position(|e| *e == Event::DelayMs(250))
        .unwrap();
    let pulses_before = events[..delay_at]
        .iter()
        .filter(|e| **e == Event::Latch(true))
        .count();
    assert_eq!(pulses_before, 1);
    assert_eq!(recorder.latch_pulses(), 2);
    assert_eq!(chain.get(0), Some(OFF));
}

#[test]
fn blink_stops_when_the_first_flush_fails() {
    let (mut chain, recorder) = broken_bus_chain();
    let mut delay = MockDelay::new(&recorder);

    let result = chain.blink_led(0, &mut delay, 250);

    assert!(matches!(result, Err(Error::Transport(_))));
    assert!(!recorder.events().iter().any(|e| matches!(e, Event::DelayMs(_))));
    assert_eq!(recorder.latch_pulses(), 0);
    assert_eq!(chain.get(0), Some(FULL_ON));
}

// -----------------------------------------------------------------------------
// Masks
// -----------------------------------------------------------------------------

#[test]
fn set_leds_only_turns_masked_channels_on() {
    let (mut chain, recorder) = mock_chain(1);
    chain.set(1, 300).unwrap();

    chain.set_leds(&[true, false, true]).unwrap();

    assert_eq!(chain.get(0), Some(FULL_ON));
    assert_eq!(chain.get(1), Some(300));
    assert_eq!(chain.get(2), Some(FULL_ON));
    assert_eq!(chain.get(3), Some(OFF));
    assert_eq!(recorder.latch_pulses(), 1);
}

#[test]
fn reset_leds_only_turns_masked_channels_off() {
    let (mut chain, recorder) = mock_chain(1);
    chain.fill(FULL_ON);

    chain.reset_leds(&[false, true]).unwrap();

    assert_eq!(chain.get(0), Some(FULL_ON));
    assert_eq!(chain.get(1), Some(OFF));
    assert_eq!(chain.get(23), Some(FULL_ON));
    assert_eq!(recorder.latch_pulses(), 1);
}

#[test]
fn toggle_leds_flips_masked_channels() {
    let (mut chain, recorder) = mock_chain(1);
    chain.set(0, FULL_ON).unwrap();
    chain.set(2, 10).unwrap();

    chain.toggle_leds(&[true, true, false]).unwrap();

    assert_eq!(chain.get(0), Some(OFF));
    assert_eq!(chain.get(1), Some(FULL_ON));
    assert_eq!(chain.get(2), Some(10));
    assert_eq!(recorder.latch_pulses(), 1);
}

#[test]
fn write_leds_shows_the_whole_mask() {
    let (mut chain, recorder) = mock_chain(2);
    chain.fill(1234);
    let mask: Vec<bool> = (0..48).map(|c| c % 2 == 0).collect();

    chain.write_leds(&mask).unwrap();

    for c in 0..48 {
        let expected = if c % 2 == 0 { FULL_ON } else { OFF };
        assert_eq!(chain.get(c), Some(expected), "channel {c}");
    }
    assert_eq!(recorder.bytes().len(), 72);
    assert_eq!(recorder.latch_pulses(), 1);
}

#[test]
fn oversized_mask_is_rejected_without_mutation() {
    let (mut chain, recorder) = mock_chain(1);
    let before = chain.buffer().clone();

    let result = chain.set_leds(&[true; 25]);

    assert!(matches!(
        result,
        Err(Error::InvalidChannel(InvalidChannel {
            channel: 24,
            channel_count: 24,
        }))
    ));
    assert_eq!(chain.buffer(), &before);
    assert!(recorder.events().is_empty());
}

#[test]
fn blink_leds_sets_waits_and_resets_the_mask() {
    let (mut chain, recorder) = mock_chain(1);
    let mut delay = MockDelay::new(&recorder);
    chain.set(5, 77).unwrap();

    chain
        .blink_leds(&[true, true, false, false, false, false], &mut delay, 100)
        .unwrap();

    assert!(recorder.events().contains(&Event::DelayMs(100)));
    assert_eq!(recorder.latch_pulses(), 2);
    assert_eq!(chain.get(0), Some(OFF));
    assert_eq!(chain.get(1), Some(OFF));
    assert_eq!(chain.get(5), Some(77));
}

#[test]
fn blink_leds_stops_when_the_first_flush_fails() {
    let (mut chain, recorder) = broken_bus_chain();
    let mut delay = MockDelay::new(&recorder);

    let result = chain.blink_leds(&[true, false, true], &mut delay, 100);

    assert!(matches!(result, Err(Error::Transport(_))));
    assert!(!recorder.events().iter().any(|e| matches!(e, Event::DelayMs(_))));
    assert_eq!(recorder.latch_pulses(), 0);
    assert_eq!(chain.get(0), Some(FULL_ON));
    assert_eq!(chain.get(2), Some(FULL_ON));
}
