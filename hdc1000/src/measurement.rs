//! Raw register values to physical units (datasheet §8.6.1 and §8.6.2).

/// Converts a temperature register value to degrees Celsius.
///
/// Covers -40 °C up to, but not including, 125 °C.
pub fn temperature_celsius(raw: u16) -> f64 {
    (raw as f64 / 65536.0) * 165.0 - 40.0
}

/// Converts a humidity register value to percent relative humidity.
pub fn humidity_percent(raw: u16) -> f64 {
    (raw as f64 / 65536.0) * 100.0
}

/// A temperature and humidity pair acquired in one conversion cycle.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub temperature_raw: u16,
    pub humidity_raw: u16,
}

impl Measurement {
    /// Splits the four bytes returned in temperature+humidity mode.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self {
            temperature_raw: u16::from_be_bytes([bytes[0], bytes[1]]),
            humidity_raw: u16::from_be_bytes([bytes[2], bytes[3]]),
        }
    }

    pub fn temperature(&self) -> f64 {
        temperature_celsius(self.temperature_raw)
    }

    pub fn humidity(&self) -> f64 {
        humidity_percent(self.humidity_raw)
    }
}
