//! Prelude module for convenient error handling imports.
//!
//! ```
//! use gyrofeed_errors::prelude::*;
//!
//! fn require_host(host: &str) -> Result<&str> {
//!     if host.is_empty() {
//!         return Err(ValidationError::required("host").into());
//!     }
//!     Ok(host)
//! }
//!
//! assert!(require_host("").is_err());
//! ```

pub use crate::{
    Result,
    common::{ErrorCategory, FeedError},
    validation::ValidationError,
};
