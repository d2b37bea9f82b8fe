//! Bus constants and port layout for PCF8575.
//! The chip has no register pointer: every transfer is the two port bytes P0x, P1x in that order.

/// Default 7-bit address (A2 = A1 = A0 = low).
pub const DEFAULT_I2C_ADDRESS: u8 = 0x20;
/// Highest address reachable through the A0..A2 strapping pins.
pub const MAX_I2C_ADDRESS: u8 = 0x27;

/// Number of quasi-bidirectional I/O lines.
pub const PIN_COUNT: u8 = 16;
/// Port width on the wire (P0x then P1x).
pub const PORT_BYTES: usize = 2;

/// Latch content after power-on: every line weakly pulled high.
pub const POWER_ON_LATCH: u16 = 0xFFFF;

bitflags::bitflags! {
    /// One bit per I/O line, in datasheet naming (P0x = pins 0-7, P1x = pins 8-15).
    #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
    pub struct PinMask: u16 {
        const P00 = 1 << 0;
        const P01 = 1 << 1;
        const P02 = 1 << 2;
        const P03 = 1 << 3;
        const P04 = 1 << 4;
        const P05 = 1 << 5;
        const P06 = 1 << 6;
        const P07 = 1 << 7;
        const P10 = 1 << 8;
        const P11 = 1 << 9;
        const P12 = 1 << 10;
        const P13 = 1 << 11;
        const P14 = 1 << 12;
        const P15 = 1 << 13;
        const P16 = 1 << 14;
        const P17 = 1 << 15;

        /// Port 0 (first byte on the wire).
        const PORT0 = 0x00FF;
        /// Port 1 (second byte on the wire).
        const PORT1 = 0xFF00;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PinMask {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "PinMask({=u16:#x})", self.bits())
    }
}

impl PinMask {
    /// Mask for a single pin index, `None` when the index is past P17.
    pub fn for_pin(pin: u8) -> Option<Self> {
        if pin < PIN_COUNT {
            Some(Self::from_bits_retain(1 << pin))
        } else {
            None
        }
    }
}

/// Split a 16-bit port value into wire order (P0x first).
pub fn latch_to_bytes(value: u16) -> [u8; PORT_BYTES] {
    value.to_le_bytes()
}

/// Join the two port bytes read from the wire.
pub fn bytes_to_latch(bytes: [u8; PORT_BYTES]) -> u16 {
    u16::from_le_bytes(bytes)
}

/// Compose the device address from the strapping pin levels.
pub fn address_from_pins(a0: bool, a1: bool, a2: bool) -> u8 {
    DEFAULT_I2C_ADDRESS | (a2 as u8) << 2 | (a1 as u8) << 1 | a0 as u8
}

/// Replace the bits of `current` selected by `mask` with those of `value`.
pub fn merge_masked(current: u16, mask: PinMask, value: u16) -> u16 {
    (current & !mask.bits()) | (value & mask.bits())
}
