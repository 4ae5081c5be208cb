//! Blocking TCP implementation of the transport seam.

use std::io::{self, Write};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use gyrofeed_core::{Link, StreamEndpoint, Transport};
use tracing::trace;

/// Socket options applied to every connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TcpTransportConfig {
    /// Bound on each connection attempt. `None` uses the OS default.
    pub connect_timeout: Option<Duration>,
    /// Bound on each write. `None` blocks until the kernel accepts data.
    pub write_timeout: Option<Duration>,
    /// Disable Nagle so each line leaves promptly.
    pub nodelay: bool,
}

impl Default for TcpTransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            write_timeout: None,
            nodelay: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TcpTransport {
    config: TcpTransportConfig,
}

impl TcpTransport {
    pub fn new(config: TcpTransportConfig) -> Self {
        Self { config }
    }

    fn connect_addr(&self, addr: &SocketAddr) -> io::Result<TcpStream> {
        match self.config.connect_timeout {
            Some(timeout) => TcpStream::connect_timeout(addr, timeout),
            None => TcpStream::connect(addr),
        }
    }
}

impl Transport for TcpTransport {
    type Link = TcpLink;

    /// Resolve the endpoint and try each address once, in resolver order.
    fn open(&mut self, endpoint: &StreamEndpoint) -> io::Result<TcpLink> {
        let addrs = (endpoint.host(), endpoint.port().get()).to_socket_addrs()?;

        let mut last_error = None;
        for addr in addrs {
            trace!(%addr, "attempting connection");
            match self.connect_addr(&addr) {
                Ok(stream) => {
                    stream.set_write_timeout(self.config.write_timeout)?;
                    stream.set_nodelay(self.config.nodelay)?;
                    return Ok(TcpLink { stream });
                }
                Err(e) => {
                    trace!(%addr, error = %e, "connection attempt failed");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                format!("{endpoint} resolved to no addresses"),
            )
        }))
    }
}

/// An open TCP connection.
#[derive(Debug)]
pub struct TcpLink {
    stream: TcpStream,
}

impl Link for TcpLink {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        let written = self.stream.write(bytes)?;
        self.stream.flush()?;
        Ok(written)
    }

    fn close(&mut self) -> io::Result<()> {
        match self.stream.shutdown(Shutdown::Both) {
            Err(e) if e.kind() != io::ErrorKind::NotConnected => Err(e),
            _ => Ok(()),
        }
    }
}
