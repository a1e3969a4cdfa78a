use std::path::{Path, PathBuf};

use crate::error::{MonitorError, Result};

/// Sibling path the document is staged at before being renamed into place.
pub fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace `path` with `contents` via a staged write and rename, so readers
/// see either the previous file or the new one. On failure the previous file
/// is left untouched.
pub async fn write_atomically(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    let staged = staging_path(path);
    let write_error = |source| MonitorError::Write {
        path: path.display().to_string(),
        source,
    };

    if let Err(e) = tokio::fs::write(&staged, contents).await {
        let _ = tokio::fs::remove_file(&staged).await;
        return Err(write_error(e));
    }

    if let Err(e) = tokio::fs::rename(&staged, path).await {
        let _ = tokio::fs::remove_file(&staged).await;
        return Err(write_error(e));
    }

    Ok(())
}
