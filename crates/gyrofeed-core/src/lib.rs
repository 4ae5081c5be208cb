//! Core gyrofeed types shared by both delivery channels.
//!
//! ## Modules
//! - `record` - The [`SensorRecord`] unit of transfer
//! - `endpoint` - Validated ports, streaming endpoints and settings targets
//! - `state` - Streaming connection state
//! - `transport` - The connect/write/close seam the streaming client depends on
//! - `trajectory` - Synthetic sine/cosine record producer for continuous mode
//! - `config` - Explicit defaults and YAML configuration loading

#![deny(static_mut_refs)]

pub mod config;
pub mod endpoint;
pub mod record;
pub mod state;
pub mod trajectory;
pub mod transport;

pub use config::{DEFAULT_CONFIG_YAML, FeedConfig};
pub use endpoint::{ServicePort, SettingsTarget, StreamEndpoint};
pub use record::SensorRecord;
pub use state::ConnectionState;
pub use trajectory::{SineTrajectory, TrajectoryParams};
pub use transport::{Link, Transport};
