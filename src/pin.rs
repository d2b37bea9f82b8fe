//! Single-line handle on a shared PCF8575, usable wherever an `embedded-hal` pin is expected.
//!
//! PCF8575 lines are quasi-bidirectional: there is no direction register and no pull-down.
//! "Input" means the latch bit is high and the weak pull-up is active; "output" means the
//! driver sets the latch bit to the requested level.

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};

use crate::data_types::{Direction, Level, Pull};
use crate::error::Error;
use crate::registers::PinMask;
use crate::shared::SharedPcf8575;

/// One line of a [`SharedPcf8575`], with the direction last set through this handle.
pub struct ExpanderPin<'a, I2C> {
    device: &'a SharedPcf8575<I2C>,
    pin: u8,
    direction: Direction,
}

impl<'a, I2C> ExpanderPin<'a, I2C> {
    pub(crate) fn new(device: &'a SharedPcf8575<I2C>, pin: u8) -> Self {
        Self {
            device,
            pin,
            direction: Direction::Input,
        }
    }

    /// Index of the line (0..=15).
    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Direction last set through this handle.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The weak pull-up is always present.
    pub fn pull(&self) -> Pull {
        Pull::Up
    }

    fn latched_high(&self) -> bool {
        let mask = PinMask::from_bits_retain(1 << self.pin);
        self.device.shadow() & mask.bits() != 0
    }
}

impl<I2C> ExpanderPin<'_, I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Switch to output and drive `level`.
    pub fn switch_to_output(&mut self, level: Level) -> Result<(), Error<I2C::Error>> {
        self.device.lock(|drv| drv.write_pin(self.pin, level.into()))?;
        self.direction = Direction::Output;
        Ok(())
    }

    /// Switch to input. `None` and `Some(Pull::Up)` both enable the pull-up; unlike Adafruit's
    /// CircuitPython driver, `None` is not rejected.
    pub fn switch_to_input(&mut self, pull: Option<Pull>) -> Result<(), Error<I2C::Error>> {
        self.set_pull(pull)?;
        self.direction = Direction::Input;
        Ok(())
    }

    /// Input releases the line high, output drives it low.
    pub fn set_direction(&mut self, direction: Direction) -> Result<(), Error<I2C::Error>> {
        self.device.lock(|drv| drv.configure_pin(self.pin, direction))?;
        self.direction = direction;
        Ok(())
    }

    /// Enable the pull-up (releases the line high). `None` is treated as `Pull::Up`, since the
    /// pull-up can't be switched off; Adafruit's CircuitPython driver raises for it instead.
    /// Pull-down fails without bus traffic.
    pub fn set_pull(&mut self, pull: Option<Pull>) -> Result<(), Error<I2C::Error>> {
        if pull == Some(Pull::Down) {
            return Err(Error::UnsupportedPull);
        }
        self.device.lock(|drv| drv.write_pin(self.pin, true))
    }

    /// Level seen on the line. Reads `Low` while this line is driven low.
    pub fn value(&mut self) -> Result<Level, Error<I2C::Error>> {
        let high = self.device.lock(|drv| drv.read_pin(self.pin))?;
        Ok(high.into())
    }

    pub fn set_value(&mut self, level: Level) -> Result<(), Error<I2C::Error>> {
        self.device.lock(|drv| drv.write_pin(self.pin, level.into()))
    }
}

impl<I2C> ErrorType for ExpanderPin<'_, I2C>
where
    I2C: embedded_hal::i2c::ErrorType,
{
    type Error = Error<I2C::Error>;
}

impl<I2C> InputPin for ExpanderPin<'_, I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.device.lock(|drv| drv.read_pin(self.pin))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.is_high()?)
    }
}

impl<I2C> OutputPin for ExpanderPin<'_, I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_value(Level::Low)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_value(Level::High)
    }
}

impl<I2C> StatefulOutputPin for ExpanderPin<'_, I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    // Answered from the latch shadow; no bus traffic.
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.latched_high())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.latched_high())
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        self.device.lock(|drv| drv.toggle_pin(self.pin))
    }
}
