//! Command implementations for the gyrofeed CLI

pub mod config;
pub mod file;
pub mod read;
pub mod socket;

use std::path::{Path, PathBuf};

use clap::Args;
use gyrofeed_core::{FeedConfig, SensorRecord};
use gyrofeed_errors::Result;
use tracing::debug;

#[derive(Args, Debug, Clone, PartialEq)]
pub struct SocketArgs {
    /// Receiver host name or IP address
    #[arg(long, env = "GYROFEED_HOST")]
    pub host: Option<String>,

    /// Receiver TCP port
    #[arg(long, env = "GYROFEED_PORT", value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// Pause between records in continuous mode
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: Option<u64>,

    /// Stop continuous mode after this many records
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..), conflicts_with = "values")]
    pub count: Option<u64>,

    /// Bound on the connection attempt
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub connect_timeout_ms: Option<u64>,

    /// Bound on each write
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub write_timeout_ms: Option<u64>,

    /// Send one record and exit; omit to stream the synthetic trajectory
    #[arg(num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    pub values: Option<Vec<f32>>,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct FileArgs {
    /// Settings file to overwrite
    #[arg(long, env = "GYROFEED_SETTINGS_PATH")]
    pub path: Option<PathBuf>,

    /// Port stored as `socket_port`
    #[arg(long, env = "GYROFEED_PORT", value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// Truncate and rewrite the target instead of replacing it via a temporary file
    #[arg(long)]
    pub in_place: bool,

    #[arg(
        num_args = 3,
        value_names = ["X", "Y", "Z"],
        allow_negative_numbers = true,
        required = true
    )]
    pub values: Vec<f32>,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ReadArgs {
    /// Settings file to read
    #[arg(long, env = "GYROFEED_SETTINGS_PATH")]
    pub path: Option<PathBuf>,
}

/// Base configuration: the `--config` file if given, otherwise the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<FeedConfig> {
    match path {
        Some(path) => {
            debug!(path = ?path, "loading configuration file");
            FeedConfig::load(path)
        }
        None => Ok(FeedConfig::default()),
    }
}

/// Three positional values as a record. Clap guarantees the count.
fn record_from(values: &[f32]) -> Option<SensorRecord> {
    match values {
        &[x, y, z] => Some(SensorRecord::new(x, y, z)),
        _ => None,
    }
}
