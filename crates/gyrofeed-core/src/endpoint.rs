//! Validated channel endpoints.
//!
//! Construction is the only place input is checked: once a [`ServicePort`],
//! [`StreamEndpoint`] or [`SettingsTarget`] exists, the channels trust it.

use core::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use gyrofeed_errors::ValidationError;
use serde::{Deserialize, Serialize};

/// A TCP port in `1..=65535`.
///
/// In file mode the same value is stored as `socket_port`: the port the
/// consumer should later listen on, not something gyrofeed connects to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct ServicePort(u16);

impl ServicePort {
    /// Port the receiving application listens on out of the box.
    pub const DEFAULT: ServicePort = ServicePort(16384);

    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] for port 0.
    pub fn new(port: u16) -> Result<Self, ValidationError> {
        if port == 0 {
            return Err(ValidationError::out_of_range("port", port, 1, u16::MAX));
        }
        Ok(Self(port))
    }

    pub const fn get(self) -> u16 {
        self.0
    }
}

impl Default for ServicePort {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u16> for ServicePort {
    type Error = ValidationError;

    fn try_from(port: u16) -> Result<Self, Self::Error> {
        Self::new(port)
    }
}

impl TryFrom<i64> for ServicePort {
    type Error = ValidationError;

    fn try_from(port: i64) -> Result<Self, Self::Error> {
        match u16::try_from(port) {
            Ok(narrowed) => Self::new(narrowed),
            Err(_) => Err(ValidationError::out_of_range(
                "port",
                port,
                1,
                i64::from(u16::MAX),
            )),
        }
    }
}

impl From<ServicePort> for u16 {
    fn from(port: ServicePort) -> Self {
        port.0
    }
}

impl FromStr for ServicePort {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|e| ValidationError::invalid_format("port", format!("'{s}': {e}")))?;
        Self::try_from(value)
    }
}

impl fmt::Display for ServicePort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Host and port a streaming client connects to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StreamEndpoint {
    host: String,
    port: ServicePort,
}

impl StreamEndpoint {
    /// Build an endpoint from a host name or IP literal.
    ///
    /// Surrounding whitespace is trimmed and a bracketed IPv6 literal
    /// (`[::1]`) is unwrapped.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Required`] for an empty host and
    /// [`ValidationError::InvalidFormat`] for hosts containing whitespace,
    /// control characters or unbalanced brackets.
    pub fn new(host: impl Into<String>, port: ServicePort) -> Result<Self, ValidationError> {
        let raw = host.into();
        let trimmed = raw.trim();
        let host = match trimmed.strip_prefix('[') {
            Some(inner) => inner.strip_suffix(']').ok_or_else(|| {
                ValidationError::invalid_format("host", format!("unbalanced brackets in '{raw}'"))
            })?,
            None => trimmed,
        };

        if host.is_empty() {
            return Err(ValidationError::required("host"));
        }
        if host
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '[' | ']' | '/'))
        {
            return Err(ValidationError::invalid_format(
                "host",
                format!("'{raw}' is not a host name or IP address"),
            ));
        }

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> ServicePort {
        self.port
    }
}

impl fmt::Display for StreamEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

/// File a settings record is persisted to, with the port stored alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SettingsTarget {
    path: PathBuf,
    port: ServicePort,
}

impl SettingsTarget {
    /// # Errors
    ///
    /// Returns [`ValidationError::Required`] for an empty path.
    pub fn new(path: impl Into<PathBuf>, port: ServicePort) -> Result<Self, ValidationError> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(ValidationError::required("path"));
        }
        Ok(Self { path, port })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn port(&self) -> ServicePort {
        self.port
    }
}
