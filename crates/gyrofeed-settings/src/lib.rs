//! Settings file delivery channel for gyrofeed.
//!
//! ## Modules
//! - `format` - Renders the fixed shared-preferences XML document
//! - `writer` - [`SettingsFilePersister`], a full-replace writer
//! - `reader` - [`read_settings`], parses a written file back

#![deny(static_mut_refs)]

pub mod format;
pub mod reader;
pub mod writer;

pub use format::render_settings;
pub use reader::{StoredSettings, parse_settings, read_settings};
pub use writer::{PersisterOptions, SettingsFilePersister};
