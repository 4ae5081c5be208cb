//! Unit tests for error classification and conversions.

use std::error::Error as _;
use std::io;
use std::path::PathBuf;

use gyrofeed_errors::{ErrorCategory, FeedError, Result, ValidationError};

type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

mod category_tests {
    use super::*;

    #[test]
    fn test_every_variant_has_a_category() -> TestResult {
        let cases = vec![
            (
                FeedError::unreachable("h:1", io::Error::from(io::ErrorKind::TimedOut)),
                ErrorCategory::Connection,
            ),
            (FeedError::NotConnected, ErrorCategory::Transmission),
            (
                FeedError::ShortWrite {
                    written: 0,
                    expected: 6,
                },
                ErrorCategory::Transmission,
            ),
            (
                FeedError::TransportFault(io::Error::from(io::ErrorKind::BrokenPipe)),
                ErrorCategory::Transmission,
            ),
            (
                FeedError::PersistenceUnavailable {
                    path: PathBuf::from("a"),
                    source: io::Error::from(io::ErrorKind::PermissionDenied),
                },
                ErrorCategory::Persistence,
            ),
            (
                FeedError::PersistenceFault {
                    path: PathBuf::from("a"),
                    source: io::Error::from(io::ErrorKind::WriteZero),
                },
                ErrorCategory::Persistence,
            ),
            (
                ValidationError::required("host").into(),
                ErrorCategory::Configuration,
            ),
            (
                FeedError::NonFiniteRecord {
                    axis: "x",
                    value: f32::NAN,
                },
                ErrorCategory::Data,
            ),
            (
                FeedError::SettingsUnreadable {
                    path: PathBuf::from("a"),
                    source: io::Error::from(io::ErrorKind::NotFound),
                },
                ErrorCategory::Data,
            ),
            (FeedError::malformed("a", "bad"), ErrorCategory::Data),
        ];

        for (err, expected) in cases {
            assert_eq!(err.category(), expected, "{err}");
            assert!(!err.to_string().is_empty());
            assert!(!err.category().remediation().is_empty());
        }
        Ok(())
    }

    #[test]
    fn test_only_send_failures_are_transmission_failures() -> TestResult {
        assert!(FeedError::NotConnected.is_transmission_failure());
        assert!(
            !FeedError::unreachable("h:1", io::Error::from(io::ErrorKind::ConnectionRefused))
                .is_transmission_failure()
        );
        Ok(())
    }
}

mod source_chain_tests {
    use super::*;

    #[test]
    fn test_io_source_is_preserved() -> TestResult {
        let err = FeedError::PersistenceFault {
            path: PathBuf::from("settings.xml"),
            source: io::Error::other("disk full"),
        };
        let source = err.source().ok_or("missing source")?;
        assert_eq!(source.to_string(), "disk full");
        Ok(())
    }

    #[test]
    fn test_question_mark_converts_validation_errors() -> TestResult {
        fn reject() -> Result<()> {
            Err(ValidationError::invalid_format("host", "empty"))?;
            Ok(())
        }

        match reject() {
            Err(FeedError::InvalidConfiguration(ValidationError::InvalidFormat { field, .. })) => {
                assert_eq!(field, "host");
            }
            other => return Err(format!("unexpected result: {other:?}").into()),
        }
        Ok(())
    }
}
