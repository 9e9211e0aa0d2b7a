//! Snapshot file output.

use std::path::Path;

use scout_core::Lead;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum SinkError {
    #[error("failed to serialize leads: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write snapshot {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Writes `leads` to `path` as a pretty-printed JSON array, creating parent
/// directories as needed and replacing any existing file.
///
/// # Errors
///
/// Returns [`SinkError`] if serialization, directory creation, or the write
/// fails.
pub(crate) fn write_snapshot(path: &Path, leads: &[Lead]) -> Result<(), SinkError> {
    let mut json = serde_json::to_string_pretty(leads)?;
    json.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SinkError::CreateDir {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    std::fs::write(path, json).map_err(|e| SinkError::Write {
        path: path.display().to_string(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), leads = leads.len(), "snapshot written");
    Ok(())
}
