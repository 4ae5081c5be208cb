//! The transport seam the streaming client is written against.
//!
//! The client only needs three primitives: attempt a connection, write bytes
//! (reporting how many were accepted) and close. Production code uses the TCP
//! transport from `gyrofeed-stream`; tests plug in recording mocks.

use std::io;

use crate::endpoint::StreamEndpoint;

/// An open, exclusively owned connection.
pub trait Link {
    /// Offer `bytes` to the transport in a single write.
    ///
    /// Returns how many bytes were accepted, which may be fewer than offered.
    ///
    /// # Errors
    ///
    /// Returns the transport error if nothing could be written.
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize>;

    /// Release the connection.
    ///
    /// # Errors
    ///
    /// Returns the transport error reported while shutting down.
    fn close(&mut self) -> io::Result<()>;
}

/// Factory for [`Link`]s.
pub trait Transport {
    type Link: Link;

    /// Make one connection attempt to `endpoint`. Implementations must not retry.
    ///
    /// # Errors
    ///
    /// Returns the resolution, refusal or timeout error from the transport.
    fn open(&mut self, endpoint: &StreamEndpoint) -> io::Result<Self::Link>;
}
