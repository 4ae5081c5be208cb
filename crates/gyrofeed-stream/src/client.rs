//! The streaming sensor client.
//!
//! State machine: `Disconnected → Connecting → Connected → Disconnected`.
//! Sends never change the state. A failed send leaves the client connected
//! and the caller decides whether to [`disconnect`](StreamingSensorClient::disconnect).

use core::fmt;

use gyrofeed_core::{ConnectionState, Link, SensorRecord, StreamEndpoint, Transport};
use gyrofeed_errors::{FeedError, Result, ValidationError};
use tracing::{debug, trace};

use crate::codec::encode_line;
use crate::transport::TcpTransport;

/// Owns at most one connection to a single endpoint.
///
/// The connection resource lives in an `Option` that `disconnect` takes, so
/// it is closed exactly once whether the client is disconnected explicitly or
/// dropped.
pub struct StreamingSensorClient<T: Transport = TcpTransport> {
    endpoint: StreamEndpoint,
    transport: T,
    link: Option<T::Link>,
    state: ConnectionState,
    records_sent: u64,
}

impl<T: Transport> fmt::Debug for StreamingSensorClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamingSensorClient")
            .field("endpoint", &self.endpoint)
            .field("state", &self.state)
            .field("records_sent", &self.records_sent)
            .finish_non_exhaustive()
    }
}

impl StreamingSensorClient<TcpTransport> {
    /// Client for `endpoint` over TCP with default socket options.
    pub fn new(endpoint: StreamEndpoint) -> Self {
        Self::with_transport(endpoint, TcpTransport::default())
    }
}

impl<T: Transport> StreamingSensorClient<T> {
    pub fn with_transport(endpoint: StreamEndpoint, transport: T) -> Self {
        Self {
            endpoint,
            transport,
            link: None,
            state: ConnectionState::Disconnected,
            records_sent: 0,
        }
    }

    /// Point a disconnected client at a different endpoint.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` while a connection is held.
    pub fn reconfigure(&mut self, endpoint: StreamEndpoint) -> Result<()> {
        if self.link.is_some() {
            return Err(ValidationError::constraint(format!(
                "cannot change endpoint to {endpoint} while connected to {}",
                self.endpoint
            ))
            .into());
        }
        debug!(from = %self.endpoint, to = %endpoint, "endpoint reconfigured");
        self.endpoint = endpoint;
        Ok(())
    }

    /// Make a single connection attempt. Connecting twice keeps the existing
    /// connection and succeeds.
    ///
    /// # Errors
    ///
    /// Returns `EndpointUnreachable` if the attempt fails; the client stays
    /// disconnected.
    pub fn connect(&mut self) -> Result<()> {
        if self.link.is_some() {
            debug!(endpoint = %self.endpoint, "already connected");
            return Ok(());
        }

        self.state = ConnectionState::Connecting;
        debug!(endpoint = %self.endpoint, "connecting");
        match self.transport.open(&self.endpoint) {
            Ok(link) => {
                self.link = Some(link);
                self.state = ConnectionState::Connected;
                debug!(endpoint = %self.endpoint, "connected");
                Ok(())
            }
            Err(source) => {
                self.state = ConnectionState::Disconnected;
                debug!(endpoint = %self.endpoint, error = %source, "connect failed");
                Err(FeedError::unreachable(&self.endpoint, source))
            }
        }
    }

    /// Send one record as a single line in a single write.
    ///
    /// # Errors
    ///
    /// - `NotConnected` while disconnected; nothing reaches the transport.
    /// - `NonFiniteRecord` for NaN or infinite components; nothing is written.
    /// - `ShortWrite` or `TransportFault` when the write is incomplete.
    pub fn send(&mut self, record: &SensorRecord) -> Result<()> {
        let Some(link) = self.link.as_mut() else {
            return Err(FeedError::NotConnected);
        };
        record.ensure_finite()?;

        let line = encode_line(record);
        let expected = line.len();
        let written = link.write(line.as_bytes()).map_err(FeedError::TransportFault)?;
        if written != expected {
            debug!(endpoint = %self.endpoint, written, expected, "short write");
            return Err(FeedError::ShortWrite { written, expected });
        }

        self.records_sent += 1;
        trace!(endpoint = %self.endpoint, bytes = expected, "record sent");
        Ok(())
    }

    /// Release the connection if one is held. Safe to call any number of
    /// times; close errors are logged and otherwise ignored.
    pub fn disconnect(&mut self) {
        if let Some(mut link) = self.link.take() {
            if let Err(e) = link.close() {
                debug!(endpoint = %self.endpoint, error = %e, "error while closing connection");
            }
            debug!(endpoint = %self.endpoint, records = self.records_sent, "disconnected");
        }
        self.state = ConnectionState::Disconnected;
    }

    pub fn is_connected(&self) -> bool {
        self.state.is_connected()
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn endpoint(&self) -> &StreamEndpoint {
        &self.endpoint
    }

    /// Records fully accepted by the transport since construction.
    pub fn records_sent(&self) -> u64 {
        self.records_sent
    }
}

impl<T: Transport> Drop for StreamingSensorClient<T> {
    fn drop(&mut self) {
        self.disconnect();
    }
}
