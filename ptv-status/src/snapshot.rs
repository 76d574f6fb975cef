//! Departures snapshot file.
//!
//! Each run overwrites the snapshot with the raw departures array from the
//! API. It is a point-in-time dump for inspection, not a log.

use std::path::Path;

/// Errors writing the snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Filesystem operation failed
    #[error("failed to write snapshot {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Value could not be serialized
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Overwrite `path` with `data` as pretty-printed JSON.
///
/// Parent directories are created as needed.
pub fn write_snapshot(path: &Path, data: &serde_json::Value) -> Result<(), SnapshotError> {
    let io_err = |source| SnapshotError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let contents = serde_json::to_string_pretty(data)?;
    std::fs::write(path, contents).map_err(io_err)?;

    tracing::debug!(path = %path.display(), "Wrote departures snapshot");
    Ok(())
}
