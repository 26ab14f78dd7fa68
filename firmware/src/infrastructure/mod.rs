//! Infrastructure layer
//!
//! Wires the TLC5947 chain to the ESP32 SPI peripheral and GPIOs and runs
//! the tasks that animate it.

pub mod drivers;
pub mod tasks;
