//! The board session: the single owner of `{tasks, filters}` state.

use crate::board::domain::{FilterState, Stage, Task, TaskDraft, TaskId, store};
use crate::board::ports::{BoardRepository, BoardRepositoryError};
use crate::board::services::view::{BoardView, derive_view};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for board session operations.
///
/// Domain mutations never fail; the only error surface is the persistence
/// adapter.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] BoardRepositoryError),
}

/// Result type for board session operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Session state and orchestration for one board.
///
/// A session is constructed once at startup from the repository's stored
/// list and then threaded explicitly through callers — it is never a
/// process-wide singleton. Every mutation runs the same linear flow:
/// apply the pure list mutation, persist the new list, derive the view.
/// A failed save leaves the in-memory list at its previous value.
#[derive(Clone)]
pub struct BoardSession<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    tasks: Vec<Task>,
    filters: FilterState,
}

impl<R, C> BoardSession<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    /// Opens a session, loading the stored task list.
    ///
    /// Filters start at their defaults (everything visible).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Repository`] when the stored list cannot be
    /// read at all; a corrupt payload is not an error and yields an empty
    /// board.
    pub fn open(repository: Arc<R>, clock: Arc<C>) -> BoardResult<Self> {
        let tasks = repository.load()?;
        debug!(task_count = tasks.len(), "board session opened");
        Ok(Self {
            repository,
            clock,
            tasks,
            filters: FilterState::default(),
        })
    }

    /// Creates a task from a raw draft and persists the new list.
    ///
    /// Never fails on draft content: malformed fields coerce to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Repository`] when persisting the new list
    /// fails.
    pub fn create_task(&mut self, draft: TaskDraft) -> BoardResult<BoardView> {
        let next = store::create(&self.tasks, draft, &*self.clock);
        self.commit(next)
    }

    /// Moves a task to another stage and persists the new list.
    ///
    /// An unknown `task_id` is a no-op that still persists (and re-derives)
    /// an unchanged list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Repository`] when persisting the new list
    /// fails.
    pub fn set_stage(&mut self, task_id: TaskId, next_stage: Stage) -> BoardResult<BoardView> {
        let next = store::set_stage(&self.tasks, task_id, next_stage, &*self.clock);
        self.commit(next)
    }

    /// Appends a comment to a task and persists the new list.
    ///
    /// Blank text and unknown `task_id` values degrade to no-ops.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Repository`] when persisting the new list
    /// fails.
    pub fn add_comment(&mut self, task_id: TaskId, text: &str) -> BoardResult<BoardView> {
        let next = store::add_comment(&self.tasks, task_id, text, &*self.clock);
        self.commit(next)
    }

    /// Replaces the active filters and re-derives the view.
    ///
    /// Filters are session-local and never persisted.
    pub fn set_filters(&mut self, filters: FilterState) -> BoardView {
        self.filters = filters;
        self.view()
    }

    /// Derives the current view without mutating anything.
    #[must_use]
    pub fn view(&self) -> BoardView {
        derive_view(&self.tasks, &self.filters)
    }

    /// Returns the canonical task list, newest-created-first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the active filter state.
    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Persists a mutated list, adopts it, and derives the next view.
    fn commit(&mut self, next: Vec<Task>) -> BoardResult<BoardView> {
        self.repository.save(&next)?;
        self.tasks = next;
        debug!(task_count = self.tasks.len(), "board persisted");
        Ok(self.view())
    }
}
