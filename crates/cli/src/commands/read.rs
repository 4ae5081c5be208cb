//! Settings read-back command

use anyhow::Result;

use gyrofeed_core::FeedConfig;
use gyrofeed_settings::read_settings;
use serde_json::json;

use crate::commands::ReadArgs;
use crate::output;

/// Execute the read command
pub fn execute(args: &ReadArgs, config: FeedConfig, json: bool) -> Result<()> {
    let path = args.path.clone().unwrap_or(config.settings_path);
    let stored = read_settings(&path)?;

    if json {
        output::print_json(&json!({
            "success": true,
            "path": path.display().to_string(),
            "port": stored.port.get(),
            "record": output::record_json(&stored.record),
        }))?;
    } else {
        println!("{}", path.display());
        output::print_field("x", format!("{:.6}", stored.record.x));
        output::print_field("y", format!("{:.6}", stored.record.y));
        output::print_field("z", format!("{:.6}", stored.record.z));
        output::print_field("socket_port", stored.port);
    }
    Ok(())
}
