//! Explicit configuration for the gyrofeed orchestrator.
//!
//! Defaults live in [`FeedConfig::default`] and are mirrored by the embedded
//! [`DEFAULT_CONFIG_YAML`] template. Nothing here is process-wide state: the
//! CLI builds one `FeedConfig` and passes validated endpoints to the channels.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use gyrofeed_errors::{Result, ValidationError};
use serde::{Deserialize, Serialize};

use crate::endpoint::{ServicePort, SettingsTarget, StreamEndpoint};
use crate::trajectory::TrajectoryParams;

pub const DEFAULT_CONFIG_YAML: &str = include_str!("default_config.yaml");

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_SETTINGS_PATH: &str =
    "/data/user/0/com.example.gyrohook/shared_prefs/gyro_settings.xml";
pub const DEFAULT_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeedConfig {
    pub host: String,
    pub port: u16,
    pub settings_path: PathBuf,
    pub interval_ms: u64,
    pub connect_timeout_ms: Option<u64>,
    pub write_timeout_ms: Option<u64>,
    pub trajectory: TrajectoryParams,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: ServicePort::DEFAULT.get(),
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
            interval_ms: DEFAULT_INTERVAL_MS,
            connect_timeout_ms: None,
            write_timeout_ms: None,
            trajectory: TrajectoryParams::default(),
        }
    }
}

impl FeedConfig {
    /// Parse a YAML document; keys that are absent keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for malformed YAML or unknown keys.
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        serde_yaml::from_str(raw)
            .map_err(|e| ValidationError::invalid_format("config", e.to_string()).into())
    }

    /// Load a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            ValidationError::invalid_format(
                "config",
                format!("cannot read {}: {e}", path.display()),
            )
        })?;
        Self::from_yaml_str(&raw)
    }

    /// Check every field without building endpoints.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        self.stream_endpoint()?;
        self.settings_target()?;
        if self.interval_ms == 0 {
            return Err(ValidationError::out_of_range(
                "interval_ms",
                0,
                1,
                u64::MAX,
            ));
        }
        for (field, value) in [
            ("connect_timeout_ms", self.connect_timeout_ms),
            ("write_timeout_ms", self.write_timeout_ms),
        ] {
            if value == Some(0) {
                return Err(ValidationError::out_of_range(field, 0, 1, u64::MAX));
            }
        }
        self.trajectory.validate()
    }

    /// # Errors
    ///
    /// Returns [`ValidationError`] for an invalid host or port.
    pub fn stream_endpoint(&self) -> std::result::Result<StreamEndpoint, ValidationError> {
        StreamEndpoint::new(self.host.clone(), ServicePort::new(self.port)?)
    }

    /// # Errors
    ///
    /// Returns [`ValidationError`] for an empty path or invalid port.
    pub fn settings_target(&self) -> std::result::Result<SettingsTarget, ValidationError> {
        SettingsTarget::new(self.settings_path.clone(), ServicePort::new(self.port)?)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_ms.map(Duration::from_millis)
    }

    pub fn write_timeout(&self) -> Option<Duration> {
        self.write_timeout_ms.map(Duration::from_millis)
    }
}
