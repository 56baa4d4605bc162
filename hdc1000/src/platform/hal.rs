//! [`Platform`] over the `embedded-hal` blocking traits.

use core::convert::Infallible;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::blocking::i2c::{Read, Write};
use embedded_hal::digital::v2::InputPin;

use super::{PinState, Platform};
use crate::logging::debug;

/// Errors from [`HalPlatform`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalError<I2cE, PinE> {
    I2c(I2cE),
    Pin(PinE),
    /// The ready pin was requested but none was given, or it is not claimed.
    NoReadyPin,
}

/// Placeholder pin type for a platform without a DRDYn connection.
#[derive(Debug)]
pub enum NoPin {}

impl InputPin for NoPin {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        match *self {}
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        match *self {}
    }
}

/// Binds an I2C bus, an optional DRDYn input pin and a delay provider.
///
/// The pin is already an input by type; `configure_input_pin` records which
/// pin the driver claimed and `release_input_pin` drops that claim.
pub struct HalPlatform<I2C, PIN, D> {
    i2c: I2C,
    pin: Option<PIN>,
    delay: D,
    claimed: Option<u8>,
}

impl<I2C, D> HalPlatform<I2C, NoPin, D> {
    /// Platform without a ready pin; the driver falls back to a fixed delay.
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self {
            i2c,
            pin: None,
            delay,
            claimed: None,
        }
    }
}

impl<I2C, PIN, D> HalPlatform<I2C, PIN, D> {
    pub fn with_ready_pin(i2c: I2C, pin: PIN, delay: D) -> Self {
        Self {
            i2c,
            pin: Some(pin),
            delay,
            claimed: None,
        }
    }

    /// Identifier the driver passed to `configure_input_pin`, if claimed.
    pub fn claimed_pin(&self) -> Option<u8> {
        self.claimed
    }

    /// Returns the bus, pin and delay provider.
    pub fn release(self) -> (I2C, Option<PIN>, D) {
        (self.i2c, self.pin, self.delay)
    }
}

impl<I2C, E, PIN, D> Platform for HalPlatform<I2C, PIN, D>
where
    I2C: Write<Error = E> + Read<Error = E>,
    PIN: InputPin,
    D: DelayMs<u32>,
{
    type Error = HalError<E, PIN::Error>;

    fn write_byte(&mut self, address: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(address, &[value]).map_err(|e| {
            debug!("hdc1000: i2c write to {} failed", address);
            HalError::I2c(e)
        })
    }

    fn read_bytes(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.read(address, buffer).map_err(|e| {
            debug!("hdc1000: i2c read from {} failed", address);
            HalError::I2c(e)
        })
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    fn configure_input_pin(&mut self, pin: u8) -> Result<(), Self::Error> {
        if self.pin.is_none() {
            debug!("hdc1000: no ready pin to claim as {}", pin);
            return Err(HalError::NoReadyPin);
        }
        self.claimed = Some(pin);
        Ok(())
    }

    fn read_input_pin(&mut self) -> Result<PinState, Self::Error> {
        match (&self.pin, self.claimed) {
            (Some(pin), Some(_)) => {
                let high = pin.is_high().map_err(|e| {
                    debug!("hdc1000: ready pin read failed");
                    HalError::Pin(e)
                })?;
                Ok(if high { PinState::High } else { PinState::Low })
            }
            _ => {
                debug!("hdc1000: ready pin read while unclaimed");
                Err(HalError::NoReadyPin)
            }
        }
    }

    fn release_input_pin(&mut self) {
        self.claimed = None;
    }
}
