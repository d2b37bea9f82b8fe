#![no_std]
#![no_main]

use embedded_hal::digital::StatefulOutputPin;
use esp_hal::main;
use esp_println::println;

use pcf8575_rs::data_types::Level;
use pcf8575_rs::{Pcf8575, PinMask, SharedPcf8575};

use esp_backtrace as _;

mod common;
use common::init_board;

#[main]
fn main() -> ! {
    println!("PCF8575 LED chase on P00..P07 (active low), P17 blinks");

    let mut board = init_board();
    let shared = SharedPcf8575::new(Pcf8575::new(board.i2c));

    let mut blink = match shared.pin(15) {
        Ok(pin) => pin,
        Err(e) => panic!("pin handle: {:?}", e),
    };
    if let Err(e) = blink.switch_to_output(Level::High) {
        println!("switch_to_output failed: {:?}", e);
    }

    let mut lit = 0u8;
    loop {
        // LEDs sink into the chip, so low = on.
        let leds = 0x00FF & !(1u16 << lit);
        if let Err(e) = shared.lock(|drv| drv.write_masked(PinMask::PORT0, leds)) {
            println!("write_masked failed: {:?}", e);
        }
        if lit == 0 {
            if let Err(e) = blink.toggle() {
                println!("toggle failed: {:?}", e);
            }
            println!("P17 {}", if blink.is_set_low().unwrap_or(false) { "on" } else { "off" });
        }
        lit = (lit + 1) % 8;
        board.delay.delay_millis(100);
    }
}
