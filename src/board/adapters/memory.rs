//! In-memory repository for tests and ephemeral sessions.

use crate::board::domain::Task;
use crate::board::ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult};
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory board repository.
///
/// Clones share the same underlying list, so a session and a test can
/// observe each other's saves.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardRepository {
    state: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryBoardRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-seeded with the given tasks.
    #[must_use]
    pub fn seeded(tasks: Vec<Task>) -> Self {
        Self {
            state: Arc::new(RwLock::new(tasks)),
        }
    }
}

impl BoardRepository for InMemoryBoardRepository {
    fn load(&self) -> BoardRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.clone())
    }

    fn save(&self, tasks: &[Task]) -> BoardRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        *state = tasks.to_vec();
        Ok(())
    }
}
