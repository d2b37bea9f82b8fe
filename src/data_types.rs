//! Data types for the PCF8575 driver.

use crate::registers::address_from_pins;

/// Logical direction of a quasi-bidirectional line.
///
/// The chip has no direction register: an input is a line whose latch bit is high
/// (weak pull-up), an output is a line the driver pulls low or high on demand.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Input,
    Output,
}

/// Pull resistor selection for a line used as input.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pull {
    /// Weak internal pull-up (the only one the chip has).
    Up,
    /// Not available on PCF8575; requesting it is an error.
    Down,
}

/// Logic level of a line.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        matches!(level, Level::High)
    }
}

/// Levels of the A0..A2 address strapping pins.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AddressPins {
    pub a0: bool,
    pub a1: bool,
    pub a2: bool,
}

impl AddressPins {
    pub const fn new(a0: bool, a1: bool, a2: bool) -> Self {
        Self { a0, a1, a2 }
    }

    /// 7-bit bus address selected by this strapping (0x20..=0x27).
    pub fn address(&self) -> u8 {
        address_from_pins(self.a0, self.a1, self.a2)
    }
}
