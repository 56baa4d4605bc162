use crate::registers::{BATTERY_LOW_MASK, DEFAULT_ADDRESS, DEFAULT_CONVERSION_DELAY_MS};

/// Software reset (RST, bit 15). Self-clearing.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Reset {
    #[default]
    Normal = 0x00,
    SoftReset = 0x80,
}

/// Heater (HEAT, bit 13).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Heater {
    #[default]
    Off = 0x00,
    On = 0x20,
}

/// Mode of acquisition (MODE, bit 12).
///
/// | Variant          | Bits | Behavior                                              |
/// |------------------|------|-------------------------------------------------------|
/// | Single           | 0x00 | Temperature or humidity, whichever register is addressed |
/// | TemperatureHumidity | 0x10 | Both, temperature first, read back as four bytes   |
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Mode {
    #[default]
    Single = 0x00,
    TemperatureHumidity = 0x10,
}

/// Temperature measurement resolution (TRES, bit 10).
///
/// | Variant | Bits | Conversion time (typ) |
/// |---------|------|-----------------------|
/// | Bits14  | 0x00 | 6.35 ms               |
/// | Bits11  | 0x04 | 3.65 ms               |
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum TemperatureResolution {
    #[default]
    Bits14 = 0x00,
    Bits11 = 0x04,
}

/// Humidity measurement resolution (HRES, bits 9:8).
///
/// | Variant | Bits | Conversion time (typ) |
/// |---------|------|-----------------------|
/// | Bits14  | 0x00 | 6.50 ms               |
/// | Bits11  | 0x01 | 3.85 ms               |
/// | Bits8   | 0x02 | 2.50 ms               |
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum HumidityResolution {
    #[default]
    Bits14 = 0x00,
    Bits11 = 0x01,
    Bits8 = 0x02,
}

/// Resolution of both measurement channels.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolution {
    pub temperature: TemperatureResolution,
    pub humidity: HumidityResolution,
}

impl Resolution {
    pub const fn new(temperature: TemperatureResolution, humidity: HumidityResolution) -> Self {
        Self {
            temperature,
            humidity,
        }
    }

    pub const fn bits(self) -> u8 {
        self.temperature as u8 | self.humidity as u8
    }
}

/// Contents of the configuration register (0x02).
///
/// Only the high byte carries settings; the low byte is reserved and always
/// written as zero. Each field is a closed enum, so only documented bit
/// combinations can be produced.
///
/// ```
/// use hdc1000::{Configuration, Heater, Mode};
///
/// let cfg = Configuration::default()
///     .with_mode(Mode::TemperatureHumidity)
///     .with_heater(Heater::On);
/// assert_eq!(cfg.high_byte(), 0x30);
/// ```
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Configuration {
    pub reset: Reset,
    pub mode: Mode,
    pub resolution: Resolution,
    pub heater: Heater,
}

impl Configuration {
    pub const fn new(reset: Reset, mode: Mode, resolution: Resolution, heater: Heater) -> Self {
        Self {
            reset,
            mode,
            resolution,
            heater,
        }
    }

    pub fn with_reset(mut self, reset: Reset) -> Self {
        self.reset = reset;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_heater(mut self, heater: Heater) -> Self {
        self.heater = heater;
        self
    }

    /// High byte of the register, the one sent by
    /// [`Hdc1000::set_configuration`](crate::Hdc1000::set_configuration).
    pub const fn high_byte(&self) -> u8 {
        self.reset as u8 | self.mode as u8 | self.resolution.bits() | self.heater as u8
    }

    /// Full 16-bit register word.
    pub const fn word(&self) -> u16 {
        (self.high_byte() as u16) << 8
    }

    /// Decodes a value read back from the configuration register.
    ///
    /// The read-only battery status bit is returned separately, see
    /// [`ConfigurationStatus`].
    pub fn from_register(value: u16) -> ConfigurationStatus {
        let high = (value >> 8) as u8;
        let configuration = Configuration {
            reset: if high & Reset::SoftReset as u8 != 0 {
                Reset::SoftReset
            } else {
                Reset::Normal
            },
            mode: if high & Mode::TemperatureHumidity as u8 != 0 {
                Mode::TemperatureHumidity
            } else {
                Mode::Single
            },
            resolution: Resolution {
                temperature: if high & TemperatureResolution::Bits11 as u8 != 0 {
                    TemperatureResolution::Bits11
                } else {
                    TemperatureResolution::Bits14
                },
                // 0b11 is reserved; the device treats it like 8-bit.
                humidity: match high & 0x03 {
                    0x00 => HumidityResolution::Bits14,
                    0x01 => HumidityResolution::Bits11,
                    _ => HumidityResolution::Bits8,
                },
            },
            heater: if high & Heater::On as u8 != 0 {
                Heater::On
            } else {
                Heater::Off
            },
        };
        ConfigurationStatus {
            configuration,
            battery_low: battery_low(value),
        }
    }
}

/// Decoded configuration register plus the battery status bit.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigurationStatus {
    pub configuration: Configuration,
    /// Supply voltage is below 2.8 V.
    pub battery_low: bool,
}

/// Tests the BTST bit of a configuration register value.
pub fn battery_low(configuration: u16) -> bool {
    configuration & BATTERY_LOW_MASK != 0
}

/// Parameters fixed when a device is opened.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    /// 7-bit bus address. Zero selects [`DEFAULT_ADDRESS`].
    pub address: u8,
    /// DRDYn input pin. `None` waits a fixed delay after each addressing write.
    pub ready_pin: Option<u8>,
    /// Fixed wait used when no ready pin is configured.
    pub conversion_delay_ms: u32,
    /// Number of pin samples before giving up on DRDYn. `None` (the default)
    /// polls until the pin goes low.
    ///
    /// The time one sample takes depends on the platform, so size the limit
    /// from the worst-case conversion time (about 13 ms for a combined 14-bit
    /// measurement) divided by the per-sample cost of the target, with margin.
    pub ready_poll_limit: Option<u32>,
}

impl DeviceConfig {
    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    pub fn with_ready_pin(mut self, pin: u8) -> Self {
        self.ready_pin = Some(pin);
        self
    }

    pub fn with_conversion_delay_ms(mut self, ms: u32) -> Self {
        self.conversion_delay_ms = ms;
        self
    }

    pub fn with_ready_poll_limit(mut self, limit: Option<u32>) -> Self {
        self.ready_poll_limit = limit;
        self
    }

    /// Bus address after substituting the default for zero.
    pub fn effective_address(&self) -> u8 {
        if self.address == 0 {
            DEFAULT_ADDRESS
        } else {
            self.address
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            ready_pin: None,
            conversion_delay_ms: DEFAULT_CONVERSION_DELAY_MS,
            ready_poll_limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_byte_is_or_of_fields() {
        let cfg = Configuration::new(
            Reset::SoftReset,
            Mode::TemperatureHumidity,
            Resolution::default(),
            Heater::On,
        );
        assert_eq!(cfg.high_byte(), 0x80 | 0x10 | 0x00 | 0x20);
        assert_eq!(cfg.word(), 0xB000);
    }

    #[test]
    fn resolution_bits() {
        let res = Resolution::new(TemperatureResolution::Bits11, HumidityResolution::Bits8);
        assert_eq!(res.bits(), 0x06);
        let res = Resolution::new(TemperatureResolution::Bits14, HumidityResolution::Bits11);
        assert_eq!(res.bits(), 0x01);
    }

    #[test]
    fn decodes_power_on_default() {
        // Power-on value of the register.
        let status = Configuration::from_register(0x1000);
        assert_eq!(
            status.configuration,
            Configuration::default().with_mode(Mode::TemperatureHumidity)
        );
        assert!(!status.battery_low);
    }

    #[test]
    fn temperature_resolution_is_bit_10() {
        let status = Configuration::from_register(0x0400);
        assert_eq!(
            status.configuration.resolution.temperature,
            TemperatureResolution::Bits11
        );
        let cfg = Configuration::default().with_resolution(Resolution::new(
            TemperatureResolution::Bits11,
            HumidityResolution::Bits14,
        ));
        assert_eq!(cfg.word(), 0x0400);
        // Bit 14 is reserved and must not select 11-bit.
        let status = Configuration::from_register(0x4000);
        assert_eq!(
            status.configuration.resolution.temperature,
            TemperatureResolution::Bits14
        );
    }

    #[test]
    fn decode_inverts_encode() {
        let cfg = Configuration::default()
            .with_heater(Heater::On)
            .with_resolution(Resolution::new(
                TemperatureResolution::Bits11,
                HumidityResolution::Bits11,
            ));
        let status = Configuration::from_register(cfg.word() | BATTERY_LOW_MASK);
        assert_eq!(status.configuration, cfg);
        assert!(status.battery_low);
    }

    #[test]
    fn battery_bit() {
        assert!(!battery_low(0x0000));
        assert!(battery_low(0x0800));
        assert!(battery_low(0xFFFF));
        assert!(!battery_low(0xF7FF));
    }

    #[test]
    fn ready_poll_is_unbounded_by_default() {
        assert_eq!(DeviceConfig::default().ready_poll_limit, None);
    }

    #[test]
    fn zero_address_selects_default() {
        let cfg = DeviceConfig::default().with_address(0);
        assert_eq!(cfg.effective_address(), DEFAULT_ADDRESS);
        assert_eq!(cfg.with_address(0x43).effective_address(), 0x43);
    }
}
