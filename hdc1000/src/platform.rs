//! The primitive operations the driver needs from its host.

pub mod hal;

pub use embedded_hal::digital::v2::PinState;

/// Bus, pin and timing primitives supplied by the target platform.
///
/// Any state a platform needs (bus handles, the claimed DRDYn pin) lives in
/// the implementing value, so several devices and platforms can coexist.
/// Sharing one bus between devices is the implementation's concern.
pub trait Platform {
    type Error;

    /// Writes a single byte to the device at `address`.
    fn write_byte(&mut self, address: u8, value: u8) -> Result<(), Self::Error>;

    /// Fills `buffer` with bytes read from the device at `address`.
    fn read_bytes(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;

    /// Blocks for approximately `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);

    /// Claims `pin` as a digital input for the ready signal.
    fn configure_input_pin(&mut self, pin: u8) -> Result<(), Self::Error>;

    /// Samples the claimed ready pin.
    fn read_input_pin(&mut self) -> Result<PinState, Self::Error>;

    /// Gives back the pin claimed by `configure_input_pin`.
    fn release_input_pin(&mut self);
}

impl<P: Platform + ?Sized> Platform for &mut P {
    type Error = P::Error;

    fn write_byte(&mut self, address: u8, value: u8) -> Result<(), Self::Error> {
        (**self).write_byte(address, value)
    }

    fn read_bytes(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        (**self).read_bytes(address, buffer)
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }

    fn configure_input_pin(&mut self, pin: u8) -> Result<(), Self::Error> {
        (**self).configure_input_pin(pin)
    }

    fn read_input_pin(&mut self) -> Result<PinState, Self::Error> {
        (**self).read_input_pin()
    }

    fn release_input_pin(&mut self) {
        (**self).release_input_pin()
    }
}
