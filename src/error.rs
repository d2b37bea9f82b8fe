//! Error definitions for PCF8575 driver.

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error<I2cError> {
    /// Underlying I2C transaction failed.
    I2c(I2cError),
    /// Pin index outside 0..=15. Detected before touching the bus.
    InvalidPin,
    /// Pull-down requested; the chip only has weak pull-ups.
    UnsupportedPull,
}

impl<I2cError: core::fmt::Debug> core::fmt::Display for Error<I2cError> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C error: {:?}", e),
            Error::InvalidPin => write!(f, "pin index out of range (0..=15)"),
            Error::UnsupportedPull => write!(f, "pull-down resistors are not supported"),
        }
    }
}

impl<I2cError: core::fmt::Debug> embedded_hal::digital::Error for Error<I2cError> {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}
