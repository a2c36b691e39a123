//! Sitemap output writing.
//!
//! All writes go through a temp-file-then-rename sequence so a consumer
//! reading the destination never observes a partially written document.
//! The primary destination must succeed; secondary destinations (such as a
//! production build directory that may not exist in every environment) are
//! best-effort and skipped with a warning, so development workflows are
//! never blocked by production-path assumptions.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Write the rendered sitemap to the primary and secondary destinations.
///
/// Returns the destinations actually written, primary first.
///
/// # Errors
///
/// Returns [`Error::Storage`] when the primary destination cannot be
/// written. Secondary failures are logged and skipped.
pub fn write_outputs(xml: &str, primary: &Path, secondary: &[PathBuf]) -> Result<Vec<PathBuf>> {
    write_atomic(xml, primary)?;
    let mut written = vec![primary.to_path_buf()];

    for destination in secondary {
        match write_atomic(xml, destination) {
            Ok(()) => written.push(destination.clone()),
            Err(e) => {
                warn!(
                    destination = %destination.display(),
                    error = %e,
                    "Skipping secondary sitemap destination"
                );
            },
        }
    }

    Ok(written)
}

/// Write `content` to `path` via a temp file in the same directory.
fn write_atomic(content: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Storage(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }
    }

    let tmp_path = path.with_extension("xml.tmp");
    fs::write(&tmp_path, content)
        .map_err(|e| Error::Storage(format!("Failed to write {}: {e}", tmp_path.display())))?;

    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path).map_err(|e| {
            Error::Storage(format!("Failed to remove existing {}: {e}", path.display()))
        })?;
    }

    fs::rename(&tmp_path, path)
        .map_err(|e| Error::Storage(format!("Failed to commit {}: {e}", path.display())))?;

    debug!(path = %path.display(), "Wrote sitemap");
    Ok(())
}
