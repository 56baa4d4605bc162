use crate::config::{battery_low, Configuration, ConfigurationStatus, DeviceConfig, Reset};
use crate::error::Error;
use crate::logging::{debug, trace};
use crate::measurement::{humidity_percent, temperature_celsius, Measurement};
use crate::platform::{PinState, Platform};
use crate::registers::{decode_be, Register};

/// HDC1000 driver instance.
///
/// Owns the [`Platform`] it talks through. Pass `&mut platform` to keep
/// ownership with the caller.
pub struct Hdc1000<P> {
    platform: P,
    address: u8,
    ready_pin: Option<u8>,
    conversion_delay_ms: u32,
    ready_poll_limit: Option<u32>,
}

impl<P, E> Hdc1000<P>
where
    P: Platform<Error = E>,
{
    /// Opens a device at `address` (zero selects the default 0x40).
    ///
    /// With `ready_pin` set, measurement completion is detected on DRDYn and the
    /// pin is claimed here; otherwise every read waits a fixed 20 ms.
    pub fn open(address: u8, ready_pin: Option<u8>, platform: P) -> Result<Self, Error<E>> {
        let config = DeviceConfig {
            address,
            ready_pin,
            ..DeviceConfig::default()
        };
        Self::open_with(config, platform)
    }

    /// Opens a device with explicit timing parameters.
    ///
    /// # Errors
    /// `Transport` if the ready pin cannot be claimed. The platform is dropped
    /// and nothing stays claimed by the driver.
    pub fn open_with(config: DeviceConfig, mut platform: P) -> Result<Self, Error<E>> {
        let address = config.effective_address();
        if let Some(pin) = config.ready_pin {
            platform.configure_input_pin(pin)?;
        }
        debug!("hdc1000: opened at {}", address);
        Ok(Self {
            platform,
            address,
            ready_pin: config.ready_pin,
            conversion_delay_ms: config.conversion_delay_ms,
            ready_poll_limit: config.ready_poll_limit,
        })
    }

    /// Releases the ready pin, if one was claimed, and returns the platform.
    pub fn close(mut self) -> P {
        if self.ready_pin.is_some() {
            self.platform.release_input_pin();
        }
        debug!("hdc1000: closed {}", self.address);
        self.platform
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn ready_pin(&self) -> Option<u8> {
        self.ready_pin
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Writes the configuration register.
    ///
    /// The register is sent as address byte, high byte, then a zero low byte.
    /// A failed write leaves the device configuration unknown.
    pub fn set_configuration(&mut self, config: Configuration) -> Result<(), Error<E>> {
        let value = config.high_byte();
        trace!("hdc1000: set configuration {}", value);
        self.write(Register::Configuration.addr())?;
        self.write(value)?;
        self.write(0x00)
    }

    /// Starts a software reset; all settings return to power-on values.
    pub fn soft_reset(&mut self) -> Result<(), Error<E>> {
        self.set_configuration(Configuration::default().with_reset(Reset::SoftReset))
    }

    pub fn get_configuration(&mut self) -> Result<u16, Error<E>> {
        self.read_register(Register::Configuration)
    }

    /// Reads and decodes the configuration register.
    pub fn get_configuration_fields(&mut self) -> Result<ConfigurationStatus, Error<E>> {
        self.get_configuration().map(Configuration::from_register)
    }

    pub fn get_temperature_raw(&mut self) -> Result<u16, Error<E>> {
        self.read_register(Register::Temperature)
    }

    /// Temperature in degrees Celsius.
    pub fn get_temperature(&mut self) -> Result<f64, Error<E>> {
        self.get_temperature_raw().map(temperature_celsius)
    }

    pub fn get_humidity_raw(&mut self) -> Result<u16, Error<E>> {
        self.read_register(Register::Humidity)
    }

    /// Relative humidity in percent.
    pub fn get_humidity(&mut self) -> Result<f64, Error<E>> {
        self.get_humidity_raw().map(humidity_percent)
    }

    /// Reads temperature and humidity from a single conversion.
    ///
    /// The device must be in [`Mode::TemperatureHumidity`](crate::Mode); in
    /// single mode the second pair of bytes is not a humidity sample.
    pub fn get_measurement(&mut self) -> Result<Measurement, Error<E>> {
        let mut bytes = [0u8; 4];
        self.select(Register::Temperature)?;
        self.platform.read_bytes(self.address, &mut bytes)?;
        Ok(Measurement::from_bytes(bytes))
    }

    /// Manufacturer ID, 0x5449 on genuine parts. Not checked here.
    pub fn get_manufacturer_id(&mut self) -> Result<u16, Error<E>> {
        self.read_register(Register::ManufacturerId)
    }

    /// Device ID, 0x1000 on genuine parts. Not checked here.
    pub fn get_device_id(&mut self) -> Result<u16, Error<E>> {
        self.read_register(Register::DeviceId)
    }

    /// 41-bit factory serial number.
    pub fn get_serial_id(&mut self) -> Result<u64, Error<E>> {
        let high = self.read_register(Register::SerialId1)? as u64;
        let mid = self.read_register(Register::SerialId2)? as u64;
        let low = self.read_register(Register::SerialId3)? as u64;
        Ok(high << 25 | mid << 9 | low >> 7)
    }

    /// `true` when the supply voltage is below 2.8 V.
    pub fn get_battery_status(&mut self) -> Result<bool, Error<E>> {
        self.get_configuration().map(battery_low)
    }

    fn write(&mut self, value: u8) -> Result<(), Error<E>> {
        self.platform.write_byte(self.address, value)?;
        Ok(())
    }

    /// Points the device at `register` and waits until its value is ready.
    fn select(&mut self, register: Register) -> Result<(), Error<E>> {
        trace!("hdc1000: select register {}", register.addr());
        self.write(register.addr())?;
        match self.ready_pin {
            Some(_) => self.wait_ready(),
            None => {
                self.platform.delay_ms(self.conversion_delay_ms);
                Ok(())
            }
        }
    }

    /// Polls DRDYn until the device pulls it low.
    fn wait_ready(&mut self) -> Result<(), Error<E>> {
        let mut polls: u32 = 0;
        loop {
            if self.platform.read_input_pin()? == PinState::Low {
                return Ok(());
            }
            polls = polls.saturating_add(1);
            if let Some(limit) = self.ready_poll_limit {
                if polls >= limit {
                    debug!("hdc1000: DRDYn stuck high after {} polls", polls);
                    return Err(Error::ReadyTimeout);
                }
            }
        }
    }

    fn read_register(&mut self, register: Register) -> Result<u16, Error<E>> {
        let mut bytes = [0u8; 2];
        self.select(register)?;
        self.platform.read_bytes(self.address, &mut bytes)?;
        Ok(decode_be(bytes))
    }
}
