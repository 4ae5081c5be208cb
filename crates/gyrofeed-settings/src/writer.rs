//! Full-replace writer for the settings file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use gyrofeed_core::{SensorRecord, ServicePort, SettingsTarget};
use gyrofeed_errors::{FeedError, Result};
use tempfile::NamedTempFile;
use tracing::{debug, trace};

use crate::format::render_settings;

/// Write discipline for [`SettingsFilePersister`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersisterOptions {
    /// Write to a uniquely named temporary file in the target's directory,
    /// then rename it over the target. The mode bits of an existing target
    /// are carried over, but its owner is not, and a symlink at the target
    /// is replaced rather than written through.
    ///
    /// When false the target itself is truncated and rewritten.
    pub atomic_writes: bool,
    /// `fsync` the written file before reporting success.
    pub sync: bool,
}

impl Default for PersisterOptions {
    fn default() -> Self {
        Self {
            atomic_writes: true,
            sync: true,
        }
    }
}

/// Serializes one record per call into the settings document. Holds no
/// per-call state, so one persister may be shared freely.
#[derive(Debug, Clone, Default)]
pub struct SettingsFilePersister {
    options: PersisterOptions,
}

impl SettingsFilePersister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: PersisterOptions) -> Self {
        Self { options }
    }

    /// Replace the file at `path` with a document holding `record` and `port`.
    ///
    /// Prior content is discarded, never merged.
    ///
    /// # Errors
    ///
    /// - `NonFiniteRecord` if a component is NaN or infinite; nothing is touched.
    /// - `PersistenceUnavailable` if the target cannot be opened for writing.
    /// - `PersistenceFault` if writing, syncing or renaming fails.
    pub fn persist(&self, path: &Path, record: &SensorRecord, port: ServicePort) -> Result<()> {
        record.ensure_finite()?;
        let payload = render_settings(record, port);

        if path.is_dir() {
            return Err(unavailable(
                path,
                io::Error::new(io::ErrorKind::IsADirectory, "target is a directory"),
            ));
        }

        if self.options.atomic_writes {
            self.write_atomic(path, payload.as_bytes())?;
        } else {
            self.write_in_place(path, payload.as_bytes())?;
        }

        debug!(path = ?path, bytes = payload.len(), port = port.get(), "settings persisted");
        Ok(())
    }

    /// [`persist`](Self::persist) using the path and port of `target`.
    ///
    /// # Errors
    ///
    /// Same as [`persist`](Self::persist).
    pub fn persist_to(&self, target: &SettingsTarget, record: &SensorRecord) -> Result<()> {
        self.persist(target.path(), record, target.port())
    }

    fn write_atomic(&self, path: &Path, payload: &[u8]) -> Result<()> {
        let dir = parent_dir(path)?;
        let mut temp = NamedTempFile::new_in(dir).map_err(|e| unavailable(path, e))?;
        trace!(path = ?temp.path(), "writing temporary settings file");

        if let Some(permissions) = target_permissions(path) {
            temp.as_file()
                .set_permissions(permissions)
                .map_err(|e| fault(path, e))?;
        }
        self.fill(temp.as_file_mut(), payload).map_err(|e| fault(path, e))?;

        // Dropping an unpersisted temp file removes it.
        temp.persist(path).map_err(|e| fault(path, e.error))?;
        Ok(())
    }

    fn write_in_place(&self, path: &Path, payload: &[u8]) -> Result<()> {
        let mut file = open_truncated(path).map_err(|e| unavailable(path, e))?;
        self.fill(&mut file, payload).map_err(|e| fault(path, e))
    }

    fn fill(&self, file: &mut File, payload: &[u8]) -> io::Result<()> {
        file.write_all(payload)?;
        file.flush()?;
        if self.options.sync {
            file.sync_all()?;
        }
        Ok(())
    }
}

fn open_truncated(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

/// Mode for the replacement file: the existing target's, or on Unix the
/// usual `0o644` for a fresh file since temporary files start at `0o600`.
fn target_permissions(path: &Path) -> Option<fs::Permissions> {
    if let Ok(existing) = fs::metadata(path) {
        return Some(existing.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(fs::Permissions::from_mode(0o644))
    }
    #[cfg(not(unix))]
    {
        None
    }
}

/// Directory the temporary file is created in; a bare file name means the
/// current directory.
fn parent_dir(path: &Path) -> Result<&Path> {
    if path.file_name().is_none() {
        return Err(unavailable(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        ));
    }
    Ok(match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    })
}

fn unavailable(path: &Path, source: io::Error) -> FeedError {
    FeedError::PersistenceUnavailable {
        path: path.to_path_buf(),
        source,
    }
}

fn fault(path: &Path, source: io::Error) -> FeedError {
    FeedError::PersistenceFault {
        path: path.to_path_buf(),
        source,
    }
}
