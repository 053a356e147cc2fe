//! Transport layer for Smart Relay communication.
//!
//! This module provides the abstraction for different transport methods.
//! The relay appliance speaks raw TCP, implemented in [`tcp`].

pub mod tcp;

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use bytes::Bytes;

use crate::error::Result;

/// Trait for transport implementations.
pub trait Transport: Send + Sync {
    /// Connects to the device.
    fn connect(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;

    /// Disconnects from the device.
    fn disconnect(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;

    /// Sends data to the device. A short write is an error, not resumed.
    fn send(&mut self, data: Bytes) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;

    /// Reads up to `max_len` bytes without consuming them, bounded by the
    /// configured receive timeout.
    ///
    /// Because the bytes stay in the receive buffer, a delayed or
    /// unsolicited transmission from the device can be returned again by a
    /// later peek. The relay protocol carries no correlation id, so callers
    /// must keep exchanges strictly sequential.
    fn peek(
        &mut self,
        max_len: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Bytes>> + Send + '_>>;

    /// Sets the timeout applied to subsequent peeks.
    fn set_receive_timeout(&mut self, timeout: Duration);

    /// Returns true if connected. Reports the last known state without
    /// re-probing the transport.
    fn is_connected(&self) -> bool;
}

pub use tcp::TcpTransport;
