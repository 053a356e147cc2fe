//! Main [`SmartRelay`] client implementation.
//!
//! This module provides the high-level [`SmartRelay`] session that owns a
//! transport connection and drives one command/acknowledgement exchange
//! per [`push`](SmartRelay::push) call.

use std::time::Duration;

use bytes::Bytes;

use crate::error::{Error, Result};
use crate::protocol::{DeviceId, PinState, encode_frame};
use crate::transport::tcp::{DEFAULT_RECEIVE_TIMEOUT, TcpConfig};
use crate::transport::{TcpTransport, Transport};

/// Default upper bound on acknowledgement size, in bytes.
pub const DEFAULT_MAX_RESPONSE_LEN: usize = 20480;

/// Session tunables.
///
/// `max_response_len` bounds the acknowledgement read of subsequent pushes;
/// `receive_timeout` is applied to the transport on the next `open`.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Maximum number of acknowledgement bytes read per push.
    pub max_response_len: usize,
    /// Socket receive timeout applied on open.
    pub receive_timeout: Duration,
}

impl SessionOptions {
    /// Creates options with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_response_len: DEFAULT_MAX_RESPONSE_LEN,
            receive_timeout: DEFAULT_RECEIVE_TIMEOUT,
        }
    }

    /// Sets the maximum acknowledgement length.
    #[must_use]
    pub const fn max_response_len(mut self, len: usize) -> Self {
        self.max_response_len = len;
        self
    }

    /// Sets the receive timeout.
    #[must_use]
    pub const fn receive_timeout(mut self, timeout: Duration) -> Self {
        self.receive_timeout = timeout;
        self
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Session with a Smart Relay device.
///
/// The protocol is strictly request/response with no correlation id, so a
/// session permits one command in flight at a time; the `&mut self`
/// receivers enforce that at compile time. Callers needing concurrency
/// should serialize access externally or use one session per caller.
pub struct SmartRelay<T = TcpTransport> {
    transport: T,
    options: SessionOptions,
}

impl SmartRelay<TcpTransport> {
    /// Creates a new session for a relay at `host` on the default port.
    ///
    /// No I/O happens until [`open`](Self::open) is called.
    #[must_use]
    pub fn tcp(host: impl Into<String>) -> Self {
        Self::with_tcp_config(TcpConfig::new(host))
    }

    /// Creates a new session for a relay at `host:port`.
    #[must_use]
    pub fn tcp_with_port(host: impl Into<String>, port: u16) -> Self {
        Self::with_tcp_config(TcpConfig::new(host).port(port))
    }

    /// Creates a new session with custom TCP configuration.
    #[must_use]
    pub fn with_tcp_config(config: TcpConfig) -> Self {
        Self::with_transport(TcpTransport::new(config))
    }
}

impl<T: Transport> SmartRelay<T> {
    /// Creates a new session over the given transport.
    #[must_use]
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            options: SessionOptions::new(),
        }
    }

    /// Opens the connection to the relay and applies the configured
    /// receive timeout.
    ///
    /// There is no automatic retry: on failure the session stays unopened
    /// and the caller decides whether to call `open` again.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connect`] if the transport cannot connect.
    pub async fn open(&mut self) -> Result<()> {
        self.transport
            .set_receive_timeout(self.options.receive_timeout);
        self.transport.connect().await
    }

    /// Returns the last known connection state without re-probing the
    /// transport.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.transport.is_connected()
    }

    /// Pushes a pin command to the factory-default device (`0x01`).
    ///
    /// See [`push_to`](Self::push_to).
    pub async fn push(&mut self, pin: u8, state: PinState) -> Result<Bytes> {
        self.push_to(pin, state, DeviceId::DEFAULT).await
    }

    /// Pushes a pin command to a specific device and returns the raw
    /// acknowledgement.
    ///
    /// Encodes the command frame, writes it to the transport, then peeks
    /// up to `max_response_len` acknowledgement bytes within the receive
    /// timeout. The acknowledgement format is undocumented upstream and
    /// returned opaque; it may be empty if the device closed the
    /// connection. Transport failures leave the connection state
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - [`Error::NotConnected`] if the session has not been opened.
    /// - [`Error::Frame`] if `pin` is outside `1..=8`.
    /// - [`Error::Write`] / [`Error::Read`] / [`Error::Timeout`] on
    ///   transport failure, propagated immediately with no retry.
    pub async fn push_to(
        &mut self,
        pin: u8,
        state: PinState,
        device_id: DeviceId,
    ) -> Result<Bytes> {
        if !self.transport.is_connected() {
            return Err(Error::NotConnected);
        }

        let frame = encode_frame(pin, state, device_id)?;
        tracing::debug!(pin, ?state, device = %device_id, "pushing pin command");

        self.transport.send(frame).await?;
        self.transport.peek(self.options.max_response_len).await
    }

    /// Replaces the session options.
    ///
    /// `max_response_len` takes effect on the next push,
    /// `receive_timeout` on the next open.
    pub fn set_options(&mut self, options: SessionOptions) {
        self.options = options;
    }

    /// Returns the current session options.
    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Closes the connection unconditionally.
    pub async fn close(&mut self) -> Result<()> {
        self.transport.disconnect().await
    }
}
