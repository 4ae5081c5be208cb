//! Top-level error type and classification used across all gyrofeed crates.

use core::fmt;
use std::io;
use std::path::PathBuf;

use crate::ValidationError;

/// Every failure a delivery channel can report.
///
/// Variants are grouped by [`ErrorCategory`] so that an orchestrator can tell
/// "could not establish channel" apart from "one send failed" and from
/// "configuration could not be persisted".
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Connection attempt failed (resolution, refusal, transport timeout)
    #[error("endpoint {endpoint} is unreachable: {source}")]
    EndpointUnreachable {
        /// Endpoint in `host:port` form
        endpoint: String,
        /// Underlying transport error
        source: io::Error,
    },

    /// Send attempted while the client holds no connection
    #[error("not connected to a sensor endpoint")]
    NotConnected,

    /// The transport accepted fewer bytes than the record line needed
    #[error("short write: transport accepted {written} of {expected} bytes")]
    ShortWrite {
        /// Bytes the transport reported as written
        written: usize,
        /// Length of the encoded record line
        expected: usize,
    },

    /// The transport reported an error while sending
    #[error("transport fault: {0}")]
    TransportFault(#[source] io::Error),

    /// Settings target could not be opened for writing
    #[error("settings file {} cannot be opened for writing: {source}", .path.display())]
    PersistenceUnavailable {
        /// Target path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Write stream reported a fault during or after writing
    #[error("failed to write settings file {}: {source}", .path.display())]
    PersistenceFault {
        /// Target path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Caller supplied an invalid endpoint, port or configuration
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ValidationError),

    /// A record component is NaN or infinite
    #[error("sensor record axis '{axis}' is not finite: {value}")]
    NonFiniteRecord {
        /// Axis name (`x`, `y` or `z`)
        axis: &'static str,
        /// The offending value
        value: f32,
    },

    /// Settings file could not be read back
    #[error("settings file {} cannot be read: {source}", .path.display())]
    SettingsUnreadable {
        /// Source path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Settings file was read but does not hold a valid record
    #[error("settings file {} is malformed: {reason}", .path.display())]
    MalformedSettings {
        /// Source path
        path: PathBuf,
        /// What was wrong with the content
        reason: String,
    },
}

impl FeedError {
    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            FeedError::EndpointUnreachable { .. } => ErrorCategory::Connection,
            FeedError::NotConnected
            | FeedError::ShortWrite { .. }
            | FeedError::TransportFault(_) => ErrorCategory::Transmission,
            FeedError::PersistenceUnavailable { .. } | FeedError::PersistenceFault { .. } => {
                ErrorCategory::Persistence
            }
            FeedError::InvalidConfiguration(_) => ErrorCategory::Configuration,
            FeedError::NonFiniteRecord { .. }
            | FeedError::SettingsUnreadable { .. }
            | FeedError::MalformedSettings { .. } => ErrorCategory::Data,
        }
    }

    /// Create an unreachable-endpoint error.
    pub fn unreachable(endpoint: impl fmt::Display, source: io::Error) -> Self {
        FeedError::EndpointUnreachable {
            endpoint: endpoint.to_string(),
            source,
        }
    }

    /// Create a malformed settings error.
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        FeedError::MalformedSettings {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether the failure happened after a channel was already established.
    ///
    /// Transmission failures leave the session state untouched; the caller
    /// still owns the decision to disconnect.
    pub fn is_transmission_failure(&self) -> bool {
        self.category() == ErrorCategory::Transmission
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Channel could not be established
    Connection = 0,
    /// Channel established but a send failed
    Transmission = 1,
    /// Settings file could not be written
    Persistence = 2,
    /// Caller-supplied configuration rejected
    Configuration = 3,
    /// Record or stored settings content rejected
    Data = 4,
}

impl ErrorCategory {
    /// Short remediation hint for users of an orchestrator.
    pub fn remediation(&self) -> &'static str {
        match self {
            ErrorCategory::Connection => "check that the receiver is listening and reachable",
            ErrorCategory::Transmission => "the connection dropped; reconnect and resend",
            ErrorCategory::Persistence => "check the target directory exists and is writable",
            ErrorCategory::Configuration => "fix the endpoint, port or configuration file",
            ErrorCategory::Data => "supply finite values or rewrite the settings file",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Connection => write!(f, "Connection"),
            ErrorCategory::Transmission => write!(f, "Transmission"),
            ErrorCategory::Persistence => write!(f, "Persistence"),
            ErrorCategory::Configuration => write!(f, "Configuration"),
            ErrorCategory::Data => write!(f, "Data"),
        }
    }
}
