mod led_chain;

pub use led_chain::{LedChain, LedChainError, LedChainPins, init_led_chain};
