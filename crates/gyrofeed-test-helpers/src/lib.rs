//! Shared test utilities for gyrofeed.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with good error messages and `#[track_caller]`
//! - [`mock`] - A recording in-memory transport for the streaming client
//! - [`prelude`] - Convenience re-exports
//!
//! ```rust,ignore
//! use gyrofeed_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::unwrap_used, clippy::panic)]

pub mod must;
pub mod prelude;

#[cfg(feature = "mock")]
pub mod mock;

pub use must::*;
