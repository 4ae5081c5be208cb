//! Recording in-memory transport.
//!
//! A [`MockTransport`] and every [`MockLink`] it opens share one
//! [`TransportLog`]. Tests keep a clone of the transport to inspect what the
//! client did and to inject failures while the client owns the original.

use std::io;
use std::sync::Arc;

use gyrofeed_core::{Link, StreamEndpoint, Transport};
use parking_lot::Mutex;

/// Everything the client asked of the transport, plus the injected faults.
#[derive(Debug, Default, Clone)]
pub struct TransportLog {
    /// Endpoints passed to `open`, including refused attempts.
    pub opens: Vec<String>,
    /// Every buffer offered to `write`, including failed attempts.
    pub write_attempts: Vec<Vec<u8>>,
    /// Bytes actually accepted, in order.
    pub received: Vec<u8>,
    /// Number of `close` calls.
    pub closes: usize,

    pub refuse_connect: bool,
    pub fail_writes: bool,
    pub fail_close: bool,
    /// Accept at most this many bytes per write.
    pub accept_limit: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    log: Arc<Mutex<TransportLog>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refusing() -> Self {
        let transport = Self::new();
        transport.log.lock().refuse_connect = true;
        transport
    }

    pub fn with_accept_limit(limit: usize) -> Self {
        let transport = Self::new();
        transport.log.lock().accept_limit = Some(limit);
        transport
    }

    pub fn set_refuse_connect(&self, refuse: bool) {
        self.log.lock().refuse_connect = refuse;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.log.lock().fail_writes = fail;
    }

    pub fn set_fail_close(&self, fail: bool) {
        self.log.lock().fail_close = fail;
    }

    /// Snapshot of the shared log.
    pub fn log(&self) -> TransportLog {
        self.log.lock().clone()
    }

    pub fn received_text(&self) -> String {
        String::from_utf8_lossy(&self.log.lock().received).into_owned()
    }

    pub fn open_count(&self) -> usize {
        self.log.lock().opens.len()
    }

    pub fn write_attempts(&self) -> usize {
        self.log.lock().write_attempts.len()
    }

    pub fn close_count(&self) -> usize {
        self.log.lock().closes
    }
}

impl Transport for MockTransport {
    type Link = MockLink;

    fn open(&mut self, endpoint: &StreamEndpoint) -> io::Result<MockLink> {
        let mut log = self.log.lock();
        log.opens.push(endpoint.to_string());
        if log.refuse_connect {
            return Err(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "mock connection refused",
            ));
        }
        Ok(MockLink {
            log: Arc::clone(&self.log),
        })
    }
}

#[derive(Debug)]
pub struct MockLink {
    log: Arc<Mutex<TransportLog>>,
}

impl Link for MockLink {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        let mut log = self.log.lock();
        log.write_attempts.push(bytes.to_vec());
        if log.fail_writes {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "mock broken pipe"));
        }
        let accepted = log.accept_limit.map_or(bytes.len(), |limit| limit.min(bytes.len()));
        let (head, _) = bytes.split_at(accepted);
        log.received.extend_from_slice(head);
        Ok(accepted)
    }

    fn close(&mut self) -> io::Result<()> {
        let mut log = self.log.lock();
        log.closes += 1;
        if log.fail_close {
            return Err(io::Error::other("mock close failure"));
        }
        Ok(())
    }
}
