//! Error types for the gyrofeed CLI

use gyrofeed_errors::FeedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Stream interrupted after {sent} records: {source}")]
    StreamInterrupted {
        sent: u64,
        #[source]
        source: FeedError,
    },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 2;
pub const EXIT_CONNECTION: u8 = 3;
pub const EXIT_TRANSMISSION: u8 = 4;
pub const EXIT_PERSISTENCE: u8 = 5;
pub const EXIT_SETTINGS: u8 = 6;

/// The channel error behind `error`, if there is one.
pub fn feed_error(error: &anyhow::Error) -> Option<&FeedError> {
    match error.downcast_ref::<CliError>() {
        Some(CliError::StreamInterrupted { source, .. }) => Some(source),
        Some(_) => None,
        None => error.downcast_ref::<FeedError>(),
    }
}

/// Process exit code for a failed command.
pub fn exit_code(error: &anyhow::Error) -> u8 {
    match feed_error(error) {
        Some(FeedError::EndpointUnreachable { .. }) => EXIT_CONNECTION,
        Some(
            FeedError::NotConnected | FeedError::ShortWrite { .. } | FeedError::TransportFault(_),
        ) => EXIT_TRANSMISSION,
        Some(FeedError::PersistenceUnavailable { .. } | FeedError::PersistenceFault { .. }) => {
            EXIT_PERSISTENCE
        }
        Some(FeedError::InvalidConfiguration(_) | FeedError::NonFiniteRecord { .. }) => {
            EXIT_INVALID_INPUT
        }
        Some(FeedError::SettingsUnreadable { .. } | FeedError::MalformedSettings { .. }) => {
            EXIT_SETTINGS
        }
        None => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gyrofeed_errors::ValidationError;
    use std::io;

    #[test]
    fn test_exit_codes_follow_failure_kind() {
        let cases: Vec<(anyhow::Error, u8)> = vec![
            (
                FeedError::unreachable("127.0.0.1:1", io::Error::from(io::ErrorKind::ConnectionRefused)).into(),
                EXIT_CONNECTION,
            ),
            (FeedError::NotConnected.into(), EXIT_TRANSMISSION),
            (
                FeedError::PersistenceUnavailable {
                    path: "/nope/x.xml".into(),
                    source: io::Error::from(io::ErrorKind::NotFound),
                }
                .into(),
                EXIT_PERSISTENCE,
            ),
            (
                FeedError::from(ValidationError::required("host")).into(),
                EXIT_INVALID_INPUT,
            ),
            (
                FeedError::malformed("/tmp/x.xml", "missing float entry 'x'").into(),
                EXIT_SETTINGS,
            ),
            (anyhow::anyhow!("something else"), EXIT_FAILURE),
        ];
        for (error, expected) in cases {
            assert_eq!(exit_code(&error), expected, "{error}");
        }
    }

    #[test]
    fn test_interrupted_stream_keeps_transmission_code() {
        let error: anyhow::Error = CliError::StreamInterrupted {
            sent: 12,
            source: FeedError::TransportFault(io::Error::from(io::ErrorKind::BrokenPipe)),
        }
        .into();
        assert_eq!(exit_code(&error), EXIT_TRANSMISSION);
        assert!(feed_error(&error).is_some_and(FeedError::is_transmission_failure));
    }
}
