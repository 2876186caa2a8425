//! Filesystem utilities for atomic file replacement.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Replace `destination` with `data` via a temp file in the same directory.
///
/// The data is written to a uniquely named sibling file, synced to disk,
/// and renamed over the destination. On platforms where rename fails if the
/// target exists (notably Windows), the destination is removed and the
/// rename retried. The temp file is cleaned up on failure.
///
/// This avoids torn files on the happy path; it is not a transactional
/// guarantee against a crash between the sync and the rename.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or the rename fails
/// even after the fallback attempt.
pub fn write_atomic(destination: &Path, data: &[u8]) -> io::Result<()> {
    let temp_path = temp_sibling(destination)?;

    let mut temp = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)?;
    let written = temp.write_all(data).and_then(|_| temp.sync_all());
    drop(temp);
    if let Err(err) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    if let Err(initial_err) = fs::rename(&temp_path, destination) {
        let _ = fs::remove_file(destination);
        if let Err(retry_err) = fs::rename(&temp_path, destination) {
            let _ = fs::remove_file(&temp_path);
            return Err(io::Error::new(
                retry_err.kind(),
                format!(
                    "atomic replace failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            ));
        }
    }

    Ok(())
}

/// Unique temp path next to `destination` (same filesystem, so the rename
/// cannot cross a mount point).
fn temp_sibling(destination: &Path) -> io::Result<PathBuf> {
    let parent = destination.parent().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "destination has no parent directory",
        )
    })?;
    let filename = destination
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid destination name"))?;

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("system time error: {}", e)))?
        .as_nanos();

    Ok(parent.join(format!("{}.{}.{}.tmp", filename, std::process::id(), nanos)))
}
