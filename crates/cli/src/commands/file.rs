//! Settings file persistence command

use anyhow::Result;

use gyrofeed_core::{FeedConfig, SensorRecord};
use gyrofeed_errors::{FeedError, ValidationError};
use gyrofeed_settings::{PersisterOptions, SettingsFilePersister};
use serde_json::json;

use crate::commands::{FileArgs, record_from};
use crate::output;

/// Execute the file command
pub fn execute(args: &FileArgs, mut config: FeedConfig, json: bool) -> Result<()> {
    if let Some(path) = &args.path {
        config.settings_path.clone_from(path);
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    let target = config.settings_target().map_err(FeedError::from)?;
    let record = record_from(&args.values).ok_or_else(|| {
        FeedError::from(ValidationError::invalid_format(
            "values",
            "expected exactly three values: X Y Z",
        ))
    })?;

    let persister = SettingsFilePersister::with_options(PersisterOptions {
        atomic_writes: !args.in_place,
        ..PersisterOptions::default()
    });
    persister.persist_to(&target, &record)?;

    if json {
        output::print_json(&json!({
            "success": true,
            "mode": "file",
            "path": target.path().display().to_string(),
            "port": target.port().get(),
            "record": output::record_json(&record),
        }))?;
    } else {
        print_written(&record, target.path().display(), target.port().get());
    }
    Ok(())
}

fn print_written(record: &SensorRecord, path: impl std::fmt::Display, port: u16) {
    output::print_success(&format!("Settings written to {path}"));
    output::print_field("Record", record);
    output::print_field("socket_port", port);
}
