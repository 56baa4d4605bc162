//! HDC1000 register map (TI HDC1000 datasheet, SNAS643).
//!
//! Every register is 16 bits wide and is read MSB first. Writing a register
//! address byte on its own moves the device's pointer; for the measurement
//! registers it also starts a conversion.

/// Default 7-bit I2C address (ADR0 and ADR1 tied low).
pub const DEFAULT_ADDRESS: u8 = 0x40;

/// Value of the manufacturer ID register ("TI" in ASCII).
pub const MANUFACTURER_ID: u16 = 0x5449;

/// Value of the device ID register.
pub const DEVICE_ID: u16 = 0x1000;

/// Battery status bit (BTST) of the configuration register.
/// Set when the supply drops below 2.8 V.
pub const BATTERY_LOW_MASK: u16 = 0x0800;

/// Conversion wait used when the DRDYn pin is not wired.
pub const DEFAULT_CONVERSION_DELAY_MS: u32 = 20;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    Temperature = 0x00,
    Humidity = 0x01,
    Configuration = 0x02,
    // Serial ID bits 40:25
    SerialId1 = 0xFB,
    // Serial ID bits 24:9
    SerialId2 = 0xFC,
    // Serial ID bits 8:0, left aligned
    SerialId3 = 0xFD,
    ManufacturerId = 0xFE,
    DeviceId = 0xFF,
}

impl Register {
    /// Address byte sent on the bus to select this register.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// Decodes a register value sent MSB first.
pub fn decode_be(bytes: [u8; 2]) -> u16 {
    (bytes[0] as u16) << 8 | bytes[1] as u16
}
