#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::Duration;

use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};
use log::{info, warn};

use tlc5947_esp::config::CHAIN;
use tlc5947_esp::infrastructure::drivers::init_led_chain;
use tlc5947_esp::infrastructure::tasks::{chase_task, self_test};
use tlc5947_esp::tlc5947_pins;

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Grayscale buffer lives on the heap
    esp_alloc::heap_allocator!(size: 16 * 1024);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let pins = tlc5947_pins!(peripherals);
    match init_led_chain(peripherals.SPI2, pins) {
        Ok(mut chain) => {
            info!(
                "led_chain: {} device(s), {} channels",
                CHAIN.num_devices,
                chain.channel_count()
            );
            self_test(&mut chain);
            spawner.spawn(chase_task(chain)).ok();
        }
        Err(e) => warn!("led_chain: init failed: {:?}", e),
    }

    loop {
        embassy_time::Timer::after(Duration::from_secs(5)).await;
    }
}
