//! Streaming channel commands

use anyhow::Result;
use std::thread;

use gyrofeed_core::{FeedConfig, SensorRecord, SineTrajectory};
use gyrofeed_errors::FeedError;
use gyrofeed_stream::{StreamingSensorClient, TcpTransport, TcpTransportConfig};
use serde_json::json;
use tracing::info;

use crate::commands::{SocketArgs, record_from};
use crate::error::CliError;
use crate::output;

/// Execute the socket command
pub fn execute(args: &SocketArgs, base: FeedConfig, json: bool) -> Result<()> {
    let config = apply_overrides(args, base);
    config.validate().map_err(FeedError::from)?;

    let transport = TcpTransport::new(TcpTransportConfig {
        connect_timeout: config.connect_timeout(),
        write_timeout: config.write_timeout(),
        nodelay: true,
    });
    let endpoint = config.stream_endpoint().map_err(FeedError::from)?;
    let mut client = StreamingSensorClient::with_transport(endpoint, transport);

    let one_shot = args.values.as_deref().and_then(record_from);
    if let Some(record) = &one_shot {
        record.ensure_finite()?;
    }

    client.connect()?;
    info!(endpoint = %client.endpoint(), "connected");

    match one_shot {
        Some(record) => send_once(&mut client, &record, json),
        None => stream(&mut client, &config, args.count, json),
    }
}

fn apply_overrides(args: &SocketArgs, mut config: FeedConfig) -> FeedConfig {
    if let Some(host) = &args.host {
        config.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(interval_ms) = args.interval_ms {
        config.interval_ms = interval_ms;
    }
    if args.connect_timeout_ms.is_some() {
        config.connect_timeout_ms = args.connect_timeout_ms;
    }
    if args.write_timeout_ms.is_some() {
        config.write_timeout_ms = args.write_timeout_ms;
    }
    config
}

fn send_once(
    client: &mut StreamingSensorClient<TcpTransport>,
    record: &SensorRecord,
    json: bool,
) -> Result<()> {
    let sent = client.send(record);
    client.disconnect();
    sent?;

    if json {
        output::print_json(&json!({
            "success": true,
            "mode": "socket",
            "endpoint": client.endpoint().to_string(),
            "records_sent": client.records_sent(),
            "record": output::record_json(record),
        }))?;
    } else {
        output::print_success(&format!("Sent {record} to {}", client.endpoint()));
    }
    Ok(())
}

/// Feed the synthetic trajectory until `count` records are sent or a send fails.
fn stream(
    client: &mut StreamingSensorClient<TcpTransport>,
    config: &FeedConfig,
    count: Option<u64>,
    json: bool,
) -> Result<()> {
    if !json {
        output::print_success(&format!(
            "Streaming to {} every {} ms",
            client.endpoint(),
            config.interval_ms
        ));
    }

    let mut trajectory = SineTrajectory::new(config.trajectory);
    while client.is_connected() {
        let Some(record) = trajectory.next() else {
            break;
        };
        if let Err(source) = client.send(&record) {
            let sent = client.records_sent();
            client.disconnect();
            return Err(CliError::StreamInterrupted { sent, source }.into());
        }
        output::print_record_sent(&record, json);

        if count.is_some_and(|limit| client.records_sent() >= limit) {
            break;
        }
        thread::sleep(config.interval());
    }
    client.disconnect();

    if json {
        output::print_json(&json!({
            "success": true,
            "mode": "socket",
            "endpoint": client.endpoint().to_string(),
            "records_sent": client.records_sent(),
        }))?;
    } else {
        output::print_success(&format!("Sent {} records", client.records_sent()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> SocketArgs {
        SocketArgs {
            host: None,
            port: None,
            interval_ms: None,
            count: None,
            connect_timeout_ms: None,
            write_timeout_ms: None,
            values: None,
        }
    }

    #[test]
    fn test_flags_override_config() {
        let args = SocketArgs {
            host: Some("10.1.1.1".to_string()),
            port: Some(9000),
            write_timeout_ms: Some(50),
            ..args()
        };
        let config = apply_overrides(&args, FeedConfig::default());
        assert_eq!(config.host, "10.1.1.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.write_timeout_ms, Some(50));
        assert_eq!(config.interval_ms, FeedConfig::default().interval_ms);
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let base = FeedConfig {
            connect_timeout_ms: Some(300),
            ..FeedConfig::default()
        };
        let config = apply_overrides(&args(), base.clone());
        assert_eq!(config, base);
    }
}
