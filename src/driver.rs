//! Driver for PCF8575.
//! Provides blocking port/pin access; the async version mirrors this API behind the `async` feature.

use crate::data_types::{AddressPins, Direction};
use crate::error::Error;
use crate::registers::{
    DEFAULT_I2C_ADDRESS, PORT_BYTES, POWER_ON_LATCH, PinMask, bytes_to_latch, latch_to_bytes, merge_masked,
};

/// PCF8575 driver.
///
/// Every write sends both port bytes, so the driver keeps a shadow of the output latch.
/// The shadow only changes after the bus accepted the write.
pub struct Pcf8575<I2C> {
    i2c: I2C,
    address: u8,
    latch: u16,
}

impl<I2C> Pcf8575<I2C> {
    /// Create a new driver instance with the default I2C address (0x20).
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_I2C_ADDRESS)
    }

    /// Create a new driver instance with a custom I2C address.
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            latch: POWER_ON_LATCH,
        }
    }

    /// Create a new driver instance addressed by the A0..A2 strapping.
    pub fn with_address_pins(i2c: I2C, pins: AddressPins) -> Self {
        Self::with_address(i2c, pins.address())
    }

    /// Return the 7-bit I2C address configured for this instance.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Last latch value written to the device (0xFFFF before the first write).
    pub fn shadow(&self) -> u16 {
        self.latch
    }

    /// Release the bus.
    pub fn free(self) -> I2C {
        self.i2c
    }

    fn latch_with_pin(&self, mask: PinMask, high: bool) -> u16 {
        if high {
            self.latch | mask.bits()
        } else {
            self.latch & !mask.bits()
        }
    }
}

fn pin_mask<E>(pin: u8) -> Result<PinMask, Error<E>> {
    PinMask::for_pin(pin).ok_or(Error::InvalidPin)
}

impl<I2C> Pcf8575<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Write the full 16-bit latch (P00 = bit 0 ... P17 = bit 15).
    pub fn write_all(&mut self, value: u16) -> Result<(), Error<I2C::Error>> {
        let bytes = latch_to_bytes(value);
        #[cfg(feature = "defmt")]
        defmt::trace!("pcf8575 {=u8:#x} write {=u16:#x}", self.address, value);
        self.i2c.write(self.address, &bytes).map_err(Error::I2c)?;
        self.latch = value;
        Ok(())
    }

    /// Read the state of all 16 lines.
    pub fn read_all(&mut self) -> Result<u16, Error<I2C::Error>> {
        let mut buf = [0u8; PORT_BYTES];
        self.i2c.read(self.address, &mut buf).map_err(Error::I2c)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("pcf8575 {=u8:#x} read {=u16:#x}", self.address, bytes_to_latch(buf));
        Ok(bytes_to_latch(buf))
    }

    /// Configure a line. Input releases it to the weak pull-up, output drives it low.
    pub fn configure_pin(&mut self, pin: u8, direction: Direction) -> Result<(), Error<I2C::Error>> {
        self.write_pin(pin, direction == Direction::Input)
    }

    /// Drive a line low, or release it high (pulled up).
    pub fn write_pin(&mut self, pin: u8, high: bool) -> Result<(), Error<I2C::Error>> {
        let mask = pin_mask(pin)?;
        self.write_all(self.latch_with_pin(mask, high))
    }

    /// Invert the latched level of a line.
    pub fn toggle_pin(&mut self, pin: u8) -> Result<(), Error<I2C::Error>> {
        let mask = pin_mask(pin)?;
        self.write_all(self.latch ^ mask.bits())
    }

    /// Read a single line.
    ///
    /// A line only reflects an external signal while its latch bit is high. If the line is
    /// being driven low, this returns `false` whatever is connected to it.
    pub fn read_pin(&mut self, pin: u8) -> Result<bool, Error<I2C::Error>> {
        let mask = pin_mask(pin)?;
        Ok(self.read_all()? & mask.bits() != 0)
    }

    /// Update only the lines selected by `mask`, in one bus write.
    pub fn write_masked(&mut self, mask: PinMask, value: u16) -> Result<(), Error<I2C::Error>> {
        self.write_all(merge_masked(self.latch, mask, value))
    }

    /// Read all lines and keep the ones in `mask` that are high.
    pub fn read_pins(&mut self, mask: PinMask) -> Result<PinMask, Error<I2C::Error>> {
        let value = self.read_all()?;
        Ok(PinMask::from_bits_retain(value) & mask)
    }
}

#[cfg(feature = "async")]
impl<I2C> Pcf8575<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    /// Async version of [`Pcf8575::write_all`].
    pub async fn write_all_async(&mut self, value: u16) -> Result<(), Error<I2C::Error>> {
        let bytes = latch_to_bytes(value);
        #[cfg(feature = "defmt")]
        defmt::trace!("pcf8575 {=u8:#x} write {=u16:#x}", self.address, value);
        self.i2c.write(self.address, &bytes).await.map_err(Error::I2c)?;
        self.latch = value;
        Ok(())
    }

    pub async fn read_all_async(&mut self) -> Result<u16, Error<I2C::Error>> {
        let mut buf = [0u8; PORT_BYTES];
        self.i2c.read(self.address, &mut buf).await.map_err(Error::I2c)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("pcf8575 {=u8:#x} read {=u16:#x}", self.address, bytes_to_latch(buf));
        Ok(bytes_to_latch(buf))
    }

    pub async fn configure_pin_async(&mut self, pin: u8, direction: Direction) -> Result<(), Error<I2C::Error>> {
        self.write_pin_async(pin, direction == Direction::Input).await
    }

    pub async fn write_pin_async(&mut self, pin: u8, high: bool) -> Result<(), Error<I2C::Error>> {
        let mask = pin_mask(pin)?;
        self.write_all_async(self.latch_with_pin(mask, high)).await
    }

    pub async fn toggle_pin_async(&mut self, pin: u8) -> Result<(), Error<I2C::Error>> {
        let mask = pin_mask(pin)?;
        self.write_all_async(self.latch ^ mask.bits()).await
    }

    pub async fn read_pin_async(&mut self, pin: u8) -> Result<bool, Error<I2C::Error>> {
        let mask = pin_mask(pin)?;
        Ok(self.read_all_async().await? & mask.bits() != 0)
    }

    pub async fn write_masked_async(&mut self, mask: PinMask, value: u16) -> Result<(), Error<I2C::Error>> {
        self.write_all_async(merge_masked(self.latch, mask, value)).await
    }

    pub async fn read_pins_async(&mut self, mask: PinMask) -> Result<PinMask, Error<I2C::Error>> {
        let value = self.read_all_async().await?;
        Ok(PinMask::from_bits_retain(value) & mask)
    }
}
