//! TCP transport implementation.
//!
//! The Smart Relay appliance listens on a plain TCP port (50000 by
//! default) and answers each command frame with an opaque acknowledgement.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use bytes::Bytes;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::error::{Error, Result};
use crate::transport::Transport;

/// Default TCP port the relay listens on.
pub const DEFAULT_PORT: u16 = 50000;

/// Default receive timeout for acknowledgement reads.
pub const DEFAULT_RECEIVE_TIMEOUT: Duration = Duration::from_secs(1);

/// Configuration for TCP transport.
#[derive(Debug, Clone)]
pub struct TcpConfig {
    /// Relay hostname or IP address.
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Timeout applied to acknowledgement reads.
    pub receive_timeout: Duration,
}

impl TcpConfig {
    /// Creates a new TCP configuration with default settings.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            receive_timeout: DEFAULT_RECEIVE_TIMEOUT,
        }
    }

    /// Sets the port.
    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the receive timeout.
    #[must_use]
    pub const fn receive_timeout(mut self, timeout: Duration) -> Self {
        self.receive_timeout = timeout;
        self
    }
}

/// TCP transport for Smart Relay communication.
pub struct TcpTransport {
    config: TcpConfig,
    stream: Option<TcpStream>,
}

impl TcpTransport {
    /// Creates a new TCP transport with the given configuration.
    #[must_use]
    pub const fn new(config: TcpConfig) -> Self {
        Self {
            config,
            stream: None,
        }
    }

    /// Creates a new TCP transport for the given host with default settings.
    #[must_use]
    pub fn with_host(host: impl Into<String>) -> Self {
        Self::new(TcpConfig::new(host))
    }

    /// Returns the transport configuration.
    #[must_use]
    pub const fn config(&self) -> &TcpConfig {
        &self.config
    }
}

impl Transport for TcpTransport {
    fn connect(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            if self.stream.is_some() {
                return Ok(());
            }

            tracing::info!("connecting to {}:{}", self.config.host, self.config.port);

            let stream = TcpStream::connect((self.config.host.as_str(), self.config.port))
                .await
                .map_err(|source| Error::Connect {
                    host: self.config.host.clone(),
                    port: self.config.port,
                    source,
                })?;

            self.stream = Some(stream);
            tracing::info!("connected to smart relay");
            Ok(())
        })
    }

    fn disconnect(&mut self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            if self.stream.take().is_some() {
                tracing::info!("disconnected from smart relay");
            }
            Ok(())
        })
    }

    fn send(&mut self, data: Bytes) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            let stream = self.stream.as_mut().ok_or(Error::NotConnected)?;

            tracing::trace!("sending {} bytes: {}", data.len(), hex::encode(&data));

            stream
                .write_all(&data)
                .await
                .map_err(|source| Error::Write { source })?;
            stream
                .flush()
                .await
                .map_err(|source| Error::Write { source })?;

            Ok(())
        })
    }

    fn peek(
        &mut self,
        max_len: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Bytes>> + Send + '_>> {
        Box::pin(async move {
            let timeout = self.config.receive_timeout;
            let stream = self.stream.as_mut().ok_or(Error::NotConnected)?;

            let mut buf = vec![0u8; max_len];
            let n = match tokio::time::timeout(timeout, stream.peek(&mut buf)).await {
                Ok(Ok(n)) => n,
                Ok(Err(source)) => return Err(Error::Read { source }),
                Err(_) => {
                    return Err(Error::Timeout {
                        timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                    });
                }
            };

            tracing::trace!("peeked {} bytes: {}", n, hex::encode(&buf[..n]));
            Ok(Bytes::copy_from_slice(&buf[..n]))
        })
    }

    fn set_receive_timeout(&mut self, timeout: Duration) {
        self.config.receive_timeout = timeout;
    }

    fn is_connected(&self) -> bool {
        self.stream.is_some()
    }
}
