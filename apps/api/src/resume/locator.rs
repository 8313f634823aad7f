//! Finds the most recently uploaded resume.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::warn;

/// Path of the most recently modified file in the upload directory, or `None`
/// when the directory is missing or holds no files.
pub fn latest_resume(upload_dir: &Path) -> Option<PathBuf> {
    let entries = match fs::read_dir(upload_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return None,
        Err(e) => {
            warn!(dir = %upload_dir.display(), error = %e, "failed to scan upload directory");
            return None;
        }
    };

    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let modified = entry
            .metadata()
            .and_then(|m| m.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        match &newest {
            Some((best, _)) if *best >= modified => {}
            _ => newest = Some((modified, path)),
        }
    }
    newest.map(|(_, path)| path)
}
