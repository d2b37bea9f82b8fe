//! One PCF8575 shared between several users (typically [`ExpanderPin`] handles).
//!
//! Each operation runs inside a single `critical_section::with` acquisition, so the
//! read-modify-write of one pin can't interleave with that of another and lose an update.
//! The critical section is held for the whole I2C transfer.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::driver::Pcf8575;
use crate::error::Error;
use crate::pin::ExpanderPin;
use crate::registers::PinMask;

/// PCF8575 driver behind a critical-section lock.
pub struct SharedPcf8575<I2C> {
    inner: Mutex<RefCell<Pcf8575<I2C>>>,
}

impl<I2C> SharedPcf8575<I2C> {
    pub fn new(driver: Pcf8575<I2C>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(driver)),
        }
    }

    /// Run `f` with exclusive access to the driver.
    ///
    /// Must not be re-entered from inside `f`.
    pub fn lock<R>(&self, f: impl FnOnce(&mut Pcf8575<I2C>) -> R) -> R {
        critical_section::with(|cs| {
            let mut drv = self.inner.borrow_ref_mut(cs);
            f(&mut *drv)
        })
    }

    /// Current latch shadow.
    pub fn shadow(&self) -> u16 {
        self.lock(|drv| drv.shadow())
    }

    /// Handle for a single line. The handle assumes the line starts as an input.
    pub fn pin(&self, pin: u8) -> Result<ExpanderPin<'_, I2C>, Error<I2C::Error>>
    where
        I2C: embedded_hal::i2c::ErrorType,
    {
        if PinMask::for_pin(pin).is_none() {
            return Err(Error::InvalidPin);
        }
        Ok(ExpanderPin::new(self, pin))
    }

    pub fn into_inner(self) -> Pcf8575<I2C> {
        self.inner.into_inner().into_inner()
    }
}
