#![no_std]
#![no_main]

use esp_hal::main;
use esp_println::println;

use pcf8575_rs::driver::Pcf8575;
use pcf8575_rs::registers::POWER_ON_LATCH;

use esp_backtrace as _;

mod common;
use common::{debounce, init_board, log_pressed};

#[main]
fn main() -> ! {
    println!("PCF8575 16 input button test (SCL=GPIO40 pin45, SDA=GPIO39 pin44)");

    let mut board = init_board();
    let mut dev = Pcf8575::new(board.i2c);

    // Release all 16 lines to their weak pull-ups.
    if let Err(e) = dev.write_all(POWER_ON_LATCH) {
        println!("write_all failed: {:?}", e);
    }

    let mut last = POWER_ON_LATCH;
    loop {
        match dev.read_all() {
            Ok(value) => {
                log_pressed(value, last);
                last = value;
            }
            Err(e) => println!("read_all failed: {:?}", e),
        }
        debounce(&mut board.delay);
    }
}
