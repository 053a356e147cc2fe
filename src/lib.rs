//! # smartrelay
//!
//! A Rust client library for Xtend Smart Relay devices.
//!
//! This library drives a relay-control appliance over TCP: pin on/off
//! commands are packed into fixed-layout binary frames, written to the
//! device, and answered with an opaque acknowledgement.
//!
//! ## Features
//!
//! - Async/await based API using Tokio
//! - Pure, deterministic frame codec (bit-field packing and checksums)
//! - Strict request/response sessions, one command in flight
//! - Comprehensive error handling
//!
//! ## Quick Start
//!
//! ```no_run
//! use smartrelay::{PinState, SmartRelay};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smartrelay::Error> {
//!     // Connect to a relay on the default port (50000)
//!     let mut relay = SmartRelay::tcp("192.168.1.10");
//!     relay.open().await?;
//!
//!     // Switch pin 1 on and read the acknowledgement
//!     let ack = relay.push(1, PinState::On).await?;
//!     println!("device acknowledged with {} bytes", ack.len());
//!
//!     relay.push(1, PinState::Off).await?;
//!     relay.close().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`protocol`] - Low-level protocol types (frame codec, pin state, device id)
//! - [`transport`] - Transport abstraction and TCP implementation
//! - [`client`] - High-level [`SmartRelay`] session

pub mod client;
pub mod error;
pub mod protocol;
pub mod transport;

// Re-exports for convenience
pub use client::{DEFAULT_MAX_RESPONSE_LEN, SessionOptions, SmartRelay};
pub use error::{Error, FrameError, Result};
pub use protocol::{DeviceId, PinState};
pub use transport::{TcpTransport, Transport, tcp::TcpConfig};
