//! Frame encoding for the Smart Relay protocol.
//!
//! Every command is a fixed 10-byte frame:
//! ```text
//! ┌──────────────────┬───────────┬─────────────────┬─────────────────┬─────────────┐
//! │  0xcc 0xdd 0xa1  │ device id │ control hi, lo  │  enable hi, lo  │  chk1, chk2 │
//! │     3 bytes      │  1 byte   │    2 bytes      │     2 bytes     │   2 bytes   │
//! └──────────────────┴───────────┴─────────────────┴─────────────────┴─────────────┘
//! ```
//!
//! The field order is load-bearing: the device rejects any reordering.
//! The control pair carries the pin bit only when switching on; the enable
//! pair carries the pin bit regardless of state, marking which pin the
//! command addresses.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::FrameError;
use crate::protocol::command::{DeviceId, PinState};

/// Command-family prefix for write commands.
pub const COMMAND_PREFIX: [u8; 3] = [0xcc, 0xdd, 0xa1];

/// Total frame size in bytes.
pub const FRAME_LEN: usize = 10;

/// Lowest addressable pin.
pub const MIN_PIN: u8 = 1;

/// Highest addressable pin. The control/enable fields hold a single byte
/// per half, so only 8 pins fit without wrapping.
pub const MAX_PIN: u8 = 8;

/// Converts a 1-based pin index into its single-bit mask (`2^(pin-1)`).
///
/// # Errors
///
/// Returns [`FrameError::PinOutOfRange`] for pins outside `1..=8`; larger
/// pins would wrap silently past the one-byte field.
pub const fn pin_bitmask(pin: u8) -> Result<u8, FrameError> {
    if !matches!(pin, MIN_PIN..=MAX_PIN) {
        return Err(FrameError::PinOutOfRange { pin });
    }
    Ok(1 << (pin - 1))
}

/// Builds the control byte pair for a pin bitmask and target state.
///
/// The high byte is always zero in this protocol generation; only the low
/// byte carries the pin bit, and only when switching on.
#[must_use]
pub const fn control_bits(bitmask: u8, state: PinState) -> [u8; 2] {
    match state {
        PinState::Off => [0x00, 0x00],
        PinState::On => [0x00, bitmask],
    }
}

/// Builds the enable byte pair: marks which pin is addressed, independent
/// of the on/off value.
#[must_use]
pub const fn enable_bits(bitmask: u8) -> [u8; 2] {
    [0x00, bitmask]
}

/// Computes the two trailing checksum bytes over all preceding frame bytes.
///
/// `chk1` is the byte sum truncated to 8 bits; `chk2` is `chk1` doubled and
/// truncated again. The doubling is the device firmware's exact arithmetic,
/// not an independent second sum, and must stay byte-for-byte compatible.
#[must_use]
pub fn checksums(frame: &[u8]) -> [u8; 2] {
    let sum: u32 = frame.iter().map(|&b| u32::from(b)).sum();
    let chk1 = (sum & 0xff) as u8;
    let chk2 = chk1.wrapping_add(chk1);
    [chk1, chk2]
}

/// Encodes a pin command into a complete 10-byte frame.
///
/// Pure and deterministic: identical inputs always produce byte-identical
/// frames.
///
/// # Errors
///
/// Returns [`FrameError::PinOutOfRange`] if `pin` is outside `1..=8`.
pub fn encode(pin: u8, state: PinState, device_id: DeviceId) -> Result<Bytes, FrameError> {
    let bitmask = pin_bitmask(pin)?;

    let mut buf = BytesMut::with_capacity(FRAME_LEN);
    buf.put_slice(&COMMAND_PREFIX);
    buf.put_u8(device_id.as_byte());
    buf.put_slice(&control_bits(bitmask, state));
    buf.put_slice(&enable_bits(bitmask));
    let chk = checksums(&buf);
    buf.put_slice(&chk);

    Ok(buf.freeze())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_bitmask_boundaries() {
        assert_eq!(pin_bitmask(1), Ok(0x01));
        assert_eq!(pin_bitmask(2), Ok(0x02));
        assert_eq!(pin_bitmask(8), Ok(0x80));
        assert_eq!(pin_bitmask(0), Err(FrameError::PinOutOfRange { pin: 0 }));
        assert_eq!(pin_bitmask(9), Err(FrameError::PinOutOfRange { pin: 9 }));
    }

    #[test]
    fn test_control_bits_reflect_state() {
        assert_eq!(control_bits(0x01, PinState::Off), [0x00, 0x00]);
        assert_eq!(control_bits(0x01, PinState::On), [0x00, 0x01]);
        assert_eq!(control_bits(0x80, PinState::On), [0x00, 0x80]);
    }

    #[test]
    fn test_enable_bits_ignore_state() {
        // Enable always carries the pin bit, even for an off command.
        assert_eq!(enable_bits(0x01), [0x00, 0x01]);
        assert_eq!(enable_bits(0x40), [0x00, 0x40]);
    }

    #[test]
    fn test_checksum_reference_vector() {
        // Byte sum is 0x24c, so chk1 = 0x4c and chk2 = 0x98.
        let body = [0xcc, 0xdd, 0xa1, 0x01, 0x00, 0x00, 0x00, 0x01];
        assert_eq!(checksums(&body), [0x4c, 0x98]);
    }

    #[test]
    fn test_checksum_doubling_wraps() {
        // chk1 = 0xff doubles past a byte: chk2 = 0xfe.
        let body = [0xfe, 0x01];
        assert_eq!(checksums(&body), [0xff, 0xfe]);
    }

    #[test]
    fn test_encode_pin1_on() {
        let frame = encode(1, PinState::On, DeviceId::DEFAULT).unwrap();
        assert_eq!(
            &frame[..],
            &[0xcc, 0xdd, 0xa1, 0x01, 0x00, 0x01, 0x00, 0x01, 0x4d, 0x9a]
        );
    }

    #[test]
    fn test_encode_pin1_off() {
        let frame = encode(1, PinState::Off, DeviceId::DEFAULT).unwrap();
        // Control pair clears, enable pair still addresses the pin.
        assert_eq!(&frame[4..6], &[0x00, 0x00]);
        assert_eq!(&frame[6..8], &[0x00, 0x01]);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let a = encode(3, PinState::On, DeviceId::DEFAULT).unwrap();
        let b = encode(3, PinState::On, DeviceId::DEFAULT).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_encode_length_invariant() {
        for pin in MIN_PIN..=MAX_PIN {
            for state in [PinState::Off, PinState::On] {
                let frame = encode(pin, state, DeviceId::new(0xfe)).unwrap();
                assert_eq!(frame.len(), FRAME_LEN);
            }
        }
    }

    #[test]
    fn test_encode_rejects_out_of_range_pin() {
        let err = encode(9, PinState::On, DeviceId::DEFAULT).unwrap_err();
        assert_eq!(err, FrameError::PinOutOfRange { pin: 9 });
    }

    #[test]
    fn test_encode_device_id_feeds_checksum() {
        let default = encode(1, PinState::On, DeviceId::DEFAULT).unwrap();
        let other = encode(1, PinState::On, DeviceId::new(0x02)).unwrap();
        assert_eq!(other[3], 0x02);
        assert_ne!(default[8..], other[8..]);
    }
}
