//! Protocol definitions for Smart Relay communication.
//!
//! This module contains the low-level protocol types:
//! - Frame encoding (prefix, control/enable bit fields, checksums)
//! - Command parameter types (pin state, device id)

pub mod command;
pub mod frame;

pub use command::{DeviceId, PinState};
pub use frame::{COMMAND_PREFIX, FRAME_LEN, MAX_PIN, MIN_PIN, encode as encode_frame};
