//! Repository port for durable task list storage.

use crate::board::domain::Task;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board repository operations.
pub type BoardRepositoryResult<T> = Result<T, BoardRepositoryError>;

/// Task list persistence contract.
///
/// Implementations store the exact list: a `save` followed by a `load` must
/// return an equivalent list with every task and comment field intact.
/// Recovering from a corrupt stored payload is the implementation's job —
/// it discards the payload, clears the stored record, and reports an empty
/// list rather than an error.
pub trait BoardRepository: Send + Sync {
    /// Loads the stored task list.
    ///
    /// Returns an empty list when no prior data exists.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::Persistence`] when the underlying
    /// store cannot be reached at all.
    fn load(&self) -> BoardRepositoryResult<Vec<Task>>;

    /// Durably records the given task list, replacing any prior record.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::Persistence`] when the write fails;
    /// a failed write leaves the prior record intact.
    fn save(&self, tasks: &[Task]) -> BoardRepositoryResult<()>;
}

/// Errors returned by board repository implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardRepositoryError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
