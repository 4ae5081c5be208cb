//! Streaming connection state.

use serde::{Deserialize, Serialize};

/// Lifecycle of a streaming client: `Disconnected → Connecting → Connected → Disconnected`.
///
/// `Connecting` only exists for the duration of a single blocking connect
/// attempt. A failed send does not move the state; only an explicit
/// disconnect (or drop) does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }

    pub fn is_disconnected(&self) -> bool {
        matches!(self, ConnectionState::Disconnected)
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self, ConnectionState::Connecting)
    }
}
