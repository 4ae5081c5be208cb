//! Centralized error types for gyrofeed
//!
//! Both delivery channels (the streaming client and the settings file persister)
//! report failures through [`FeedError`]. Nothing in this crate logs, retries or
//! terminates; callers decide what a failure means for them.
//!
//! # Architecture
//!
//! - [`common`]: the top-level [`FeedError`] and its [`ErrorCategory`] classification
//! - [`validation`]: input validation errors raised by validated constructors
//!
//! # Example
//!
//! ```
//! use gyrofeed_errors::prelude::*;
//!
//! fn check_port(port: u16) -> Result<u16> {
//!     if port == 0 {
//!         return Err(ValidationError::out_of_range("port", port, 1, u16::MAX).into());
//!     }
//!     Ok(port)
//! }
//!
//! assert!(check_port(0).is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod prelude;
pub mod validation;

pub use common::{ErrorCategory, FeedError};
pub use validation::ValidationError;

/// A specialized `Result` type for gyrofeed operations.
pub type Result<T> = std::result::Result<T, FeedError>;
