//! JSON-file repository: the durable single-user store.

use crate::board::domain::Task;
use crate::board::ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Stores the task list as a JSON array in a single file.
///
/// A missing file means no prior data. A payload that cannot be parsed back
/// into a task list is discarded and the file is removed, so one corrupt
/// record cannot fail every subsequent load; the recovery is logged, never
/// surfaced as an error.
#[derive(Debug, Clone)]
pub struct JsonFileBoardRepository {
    path: PathBuf,
}

impl JsonFileBoardRepository {
    /// Creates a repository backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes a corrupt record so the next load starts clean.
    fn clear_corrupt(&self) {
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != ErrorKind::NotFound {
                warn!(path = %self.path.display(), error = %err, "failed to clear corrupt board file");
            }
        }
    }
}

impl BoardRepository for JsonFileBoardRepository {
    fn load(&self) -> BoardRepositoryResult<Vec<Task>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(BoardRepositoryError::persistence(err)),
        };

        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => Ok(tasks),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "discarding corrupt board file");
                self.clear_corrupt();
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, tasks: &[Task]) -> BoardRepositoryResult<()> {
        let payload =
            serde_json::to_string_pretty(tasks).map_err(BoardRepositoryError::persistence)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(BoardRepositoryError::persistence)?;
            }
        }

        // Write-then-rename keeps the prior record intact if the write fails.
        let staging = self.path.with_extension("tmp");
        fs::write(&staging, payload).map_err(BoardRepositoryError::persistence)?;
        fs::rename(&staging, &self.path).map_err(BoardRepositoryError::persistence)?;
        Ok(())
    }
}
