//! PCF8575 Rust Driver
//!
//! no-std driver for the PCF8575 16-bit quasi-bidirectional I/O expander, built on
//! `embedded-hal` 1.0 with optional async (`async` feature) and `defmt` support.
//!
//! The chip has no registers to address: a write sends the two port bytes, a read returns them.
//! [`Pcf8575`] keeps a shadow of the output latch so single pins can be changed.
//! [`SharedPcf8575`] puts a driver behind a critical-section lock and hands out
//! [`ExpanderPin`] handles that implement the `embedded-hal` digital traits.

#![no_std]

pub mod data_types;
pub mod driver;
pub mod error;
pub mod pin;
pub mod registers;
pub mod shared;

pub use driver::Pcf8575;
pub use error::Error;
pub use pin::ExpanderPin;
pub use registers::{DEFAULT_I2C_ADDRESS, PinMask};
pub use shared::SharedPcf8575;
