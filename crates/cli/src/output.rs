//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use gyrofeed_core::SensorRecord;
use serde_json::{Value, json};

use crate::error::{CliError, feed_error};

/// Print a JSON document to stdout.
pub fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print error in JSON format
pub fn print_error_json(error: &Error, exit_code: u8) {
    let category = feed_error(error).map(|e| e.category());
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "category": category.map(|c| c.to_string()),
            "remediation": category.map(|c| c.remediation()),
            "exit_code": exit_code,
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }

    if let Some(feed) = feed_error(error) {
        eprintln!("  {} {}", "Hint:".cyan(), feed.category().remediation());
    }
}

pub fn record_json(record: &SensorRecord) -> Value {
    json!({ "x": record.x, "y": record.y, "z": record.z })
}

/// One line per record while streaming; silent in JSON mode.
pub fn print_record_sent(record: &SensorRecord, json: bool) {
    if !json {
        println!("  {} {}", "→".green(), record.to_string().dimmed());
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn print_field(name: &str, value: impl std::fmt::Display) {
    println!("  {}: {}", name.bold(), value);
}
