//! Convenience re-exports for common test utilities.

pub use crate::must::must;

#[cfg(feature = "mock")]
pub use crate::mock::{MockLink, MockTransport, TransportLog};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
