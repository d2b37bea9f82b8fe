#![allow(dead_code)]

use esp_hal::{
    Blocking,
    delay::Delay,
    i2c::master::{Config as I2cConfig, I2c},
    time::Rate,
};
use esp_println::println;

// Required by espflash (ESP-IDF image format): provides the app descriptor section.
esp_bootloader_esp_idf::esp_app_desc!();

// Pin mapping (ESP32-S3 QFN56):
// - pin 44 = GPIO39 (SDA, MTCK)
// - pin 45 = GPIO40 (SCL, MTDO)
// PCF8575 breakout with A0..A2 left low (0x20).

pub type BoardI2c = I2c<'static, Blocking>;

pub struct Board {
    pub i2c: BoardI2c,
    pub delay: Delay,
}

pub fn init_board() -> Board {
    let peripherals = esp_hal::init(esp_hal::Config::default());

    let delay = Delay::new();

    let i2c = I2c::new(
        peripherals.I2C0,
        I2cConfig::default().with_frequency(Rate::from_khz(400)),
    )
    .unwrap()
    .with_sda(peripherals.GPIO39) // SDA, MCU pin 44
    .with_scl(peripherals.GPIO40); // SCL, MCU pin 45

    Board { i2c, delay }
}

/// Print every line that reads low (button pressed against the weak pull-up).
pub fn log_pressed(value: u16, last: u16) {
    for pin in 0..16u8 {
        let mask = 1u16 << pin;
        if value & mask == 0 && last & mask != 0 {
            println!("button #{} pressed", pin);
        }
    }
}

pub fn debounce(delay: &mut Delay) {
    delay.delay_millis(10);
}
