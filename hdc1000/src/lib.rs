//! Platform-agnostic driver for the TI HDC1000 digital humidity and temperature
//! sensor.
//!
//! The driver talks to the device only through the [`Platform`] trait: one-byte
//! writes, multi-byte reads, a millisecond delay and an optional DRDYn input
//! pin. [`HalPlatform`] implements it on top of the [`embedded-hal`] blocking
//! traits.
//!
//! Every register read follows the same sequence: write the register address,
//! wait for the conversion (DRDYn low, or a fixed delay when the pin is not
//! wired), then read two bytes MSB first.
//!
//! ## Features
//!
//! - `defmt`: logs bus traffic with `defmt` and derives `defmt::Format`.
//! - `log`: logs bus traffic with the `log` facade.
//!
//! ## Example
//!
//! ```ignore
//! use hdc1000::{Configuration, Hdc1000, HalPlatform, Mode};
//!
//! let platform = HalPlatform::with_ready_pin(i2c, drdy_pin, delay);
//! let mut hdc = Hdc1000::open(hdc1000::DEFAULT_ADDRESS, Some(15), platform)?;
//! hdc.set_configuration(Configuration::default().with_mode(Mode::Single))?;
//! let celsius = hdc.get_temperature()?;
//! let rh = hdc.get_humidity()?;
//! let platform = hdc.close();
//! ```
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal/0.2

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features \"defmt\" and \"log\" are mutually exclusive");

mod logging;

pub mod config;
pub mod device;
pub mod error;
pub mod measurement;
pub mod platform;
pub mod registers;

pub use config::{
    Configuration, ConfigurationStatus, DeviceConfig, Heater, HumidityResolution, Mode, Reset,
    Resolution, TemperatureResolution,
};
pub use device::Hdc1000;
pub use error::Error;
pub use measurement::{humidity_percent, temperature_celsius, Measurement};
pub use platform::hal::{HalError, HalPlatform, NoPin};
pub use platform::{PinState, Platform};
pub use registers::{Register, DEFAULT_ADDRESS, DEVICE_ID, MANUFACTURER_ID};
