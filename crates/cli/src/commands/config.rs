//! Effective configuration display

use anyhow::Result;

use gyrofeed_core::FeedConfig;
use gyrofeed_errors::FeedError;
use serde_json::json;

use crate::error::CliError;
use crate::output;

/// Print the configuration the other commands start from, after validating it.
pub fn execute(config: &FeedConfig, json: bool) -> Result<()> {
    config.validate().map_err(FeedError::from)?;

    if json {
        output::print_json(&json!({
            "success": true,
            "config": serde_json::to_value(config).map_err(CliError::from)?,
        }))?;
    } else {
        print!("{}", serde_yaml::to_string(config).map_err(CliError::from)?);
    }
    Ok(())
}
