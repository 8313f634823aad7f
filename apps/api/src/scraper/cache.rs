//! Durable fallback store for the last successfully aggregated vacancy list.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

use crate::models::vacancy::NormalizedVacancy;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// One JSON file holding the most recent snapshot. Writes replace the file
/// wholesale; snapshots never expire and are served as fallback until the
/// next write.
pub struct VacancyCache {
    path: PathBuf,
}

impl VacancyCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Replaces the previous snapshot entirely. The snapshot is written to a
    /// temp file and renamed into place so a concurrent reader never observes
    /// a partially written file.
    pub fn write(&self, snapshot: &[NormalizedVacancy]) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_vec_pretty(snapshot)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// The last written snapshot. A missing, unreadable, or corrupt file all
    /// read as an empty cache; corruption is logged and never surfaced.
    pub fn read(&self) -> Vec<NormalizedVacancy> {
        let body = match fs::read(&self.path) {
            Ok(body) => body,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read vacancy cache");
                return Vec::new();
            }
        };
        match serde_json::from_slice(&body) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "vacancy cache is corrupt, treating as empty");
                Vec::new()
            }
        }
    }
}
