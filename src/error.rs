//! Error types for the smartrelay library.

use thiserror::Error;

/// The main error type for smartrelay operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Connecting to the relay failed.
    #[error("unable to connect to smart relay at {host}:{port}: {source}")]
    Connect {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },

    /// Writing the command frame to the transport failed, or fewer bytes
    /// were written than the frame contains.
    #[error("transport write error: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    /// Reading the device acknowledgement failed.
    #[error("transport read error: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },

    /// The receive timeout elapsed with no acknowledgement from the device.
    #[error("no response within {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Connection is not established.
    #[error("not connected")]
    NotConnected,

    /// Frame encoding error.
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),
}

/// Frame-specific errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    /// Pin index outside the addressable range.
    #[error("pin {pin} out of range: supported pins are 1..=8")]
    PinOutOfRange { pin: u8 },

    /// Device id is not a valid two-digit hex byte.
    #[error("invalid device id {input:?}: expected a two-digit hex byte")]
    InvalidDeviceId { input: String },
}

/// Result type alias for smartrelay operations.
pub type Result<T> = std::result::Result<T, Error>;
