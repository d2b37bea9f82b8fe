use pcf8575_rs::data_types::{AddressPins, Level};
use pcf8575_rs::registers::{
    DEFAULT_I2C_ADDRESS, MAX_I2C_ADDRESS, PIN_COUNT, PinMask, address_from_pins, bytes_to_latch, latch_to_bytes,
    merge_masked,
};

#[test]
fn address_pins_cover_0x20_to_0x27() {
    assert_eq!(AddressPins::default().address(), DEFAULT_I2C_ADDRESS);
    assert_eq!(AddressPins::new(true, true, true).address(), MAX_I2C_ADDRESS);
    assert_eq!(AddressPins::new(false, true, false).address(), 0x22);
    assert_eq!(address_from_pins(false, false, true), 0x24);
}

#[test]
fn pin_masks_follow_port_layout() {
    assert_eq!(PinMask::for_pin(0), Some(PinMask::P00));
    assert_eq!(PinMask::for_pin(7), Some(PinMask::P07));
    assert_eq!(PinMask::for_pin(8), Some(PinMask::P10));
    assert_eq!(PinMask::for_pin(15), Some(PinMask::P17));
    assert_eq!(PinMask::for_pin(PIN_COUNT), None);

    let port0 = (0..8).filter_map(PinMask::for_pin).fold(PinMask::empty(), |acc, m| acc | m);
    assert_eq!(port0, PinMask::PORT0);
    assert_eq!(PinMask::PORT0 | PinMask::PORT1, PinMask::all());
}

#[test]
fn latch_bytes_are_little_endian() {
    assert_eq!(latch_to_bytes(0x1234), [0x34, 0x12]);
    assert_eq!(bytes_to_latch([0xCD, 0xAB]), 0xABCD);
}

#[test]
fn merge_masked_only_touches_selected_bits() {
    assert_eq!(merge_masked(0xFFFF, PinMask::PORT1, 0x0000), 0x00FF);
    assert_eq!(merge_masked(0x0000, PinMask::P04, 0xFFFF), 0x0010);
    assert_eq!(merge_masked(0x0F0F, PinMask::empty(), 0xFFFF), 0x0F0F);
}

#[test]
fn level_bool_conversions() {
    assert_eq!(Level::from(true), Level::High);
    assert_eq!(Level::from(false), Level::Low);
    assert!(bool::from(Level::High));
    assert!(!bool::from(Level::Low));
}
