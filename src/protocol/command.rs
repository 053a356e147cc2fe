//! Command parameter types for the Smart Relay protocol.
//!
//! A command addresses one pin on one device and drives it to a binary
//! state. These types pin down the wire values for both.

use std::fmt;
use std::str::FromStr;

use crate::error::FrameError;

/// Target state for a relay pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PinState {
    /// Switch the pin off.
    Off = 0x00,
    /// Switch the pin on.
    On = 0x01,
}

impl From<PinState> for u8 {
    fn from(state: PinState) -> Self {
        state as Self
    }
}

impl From<bool> for PinState {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

/// One-byte device address distinguishing relay units on the same link.
///
/// Opaque to this library beyond its hex-representable range; the device
/// ships with address `0x01`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceId(u8);

impl DeviceId {
    /// Factory-default device address.
    pub const DEFAULT: Self = Self(0x01);

    /// Creates a device id from a raw byte.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Parses a device id from its two-digit hex form, e.g. `"01"` or `"ff"`.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::InvalidDeviceId`] if the input is not exactly
    /// one hex-encoded byte.
    pub fn from_hex(input: &str) -> Result<Self, FrameError> {
        let bytes = hex::decode(input).map_err(|_| FrameError::InvalidDeviceId {
            input: input.to_string(),
        })?;
        match bytes.as_slice() {
            [id] => Ok(Self(*id)),
            _ => Err(FrameError::InvalidDeviceId {
                input: input.to_string(),
            }),
        }
    }

    /// Returns the raw address byte.
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }
}

impl Default for DeviceId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}", self.0)
    }
}

impl FromStr for DeviceId {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<u8> for DeviceId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_state_values() {
        assert_eq!(PinState::Off as u8, 0x00);
        assert_eq!(PinState::On as u8, 0x01);
    }

    #[test]
    fn test_pin_state_from_bool() {
        assert_eq!(PinState::from(true), PinState::On);
        assert_eq!(PinState::from(false), PinState::Off);
    }

    #[test]
    fn test_device_id_default() {
        assert_eq!(DeviceId::default().as_byte(), 0x01);
        assert_eq!(DeviceId::DEFAULT.to_string(), "01");
    }

    #[test]
    fn test_device_id_from_hex() {
        assert_eq!(DeviceId::from_hex("01").unwrap().as_byte(), 0x01);
        assert_eq!(DeviceId::from_hex("ff").unwrap().as_byte(), 0xff);
        assert_eq!(DeviceId::from_hex("A0").unwrap().as_byte(), 0xa0);
    }

    #[test]
    fn test_device_id_rejects_bad_hex() {
        assert!(DeviceId::from_hex("").is_err());
        assert!(DeviceId::from_hex("1").is_err());
        assert!(DeviceId::from_hex("0102").is_err());
        assert!(DeviceId::from_hex("zz").is_err());
    }

    #[test]
    fn test_device_id_parse() {
        let id: DeviceId = "7f".parse().unwrap();
        assert_eq!(id.as_byte(), 0x7f);
    }
}
