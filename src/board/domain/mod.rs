//! Domain model for the task board.
//!
//! The board domain models tasks, their workflow stages, comment threads,
//! filtering, per-stage ordering, and summary counts while keeping all
//! infrastructure concerns outside of the domain boundary. Every mutation is
//! a pure function from a current task list to a new one; nothing in this
//! module performs I/O.

mod error;
pub mod filter;
mod ids;
mod priority;
pub mod sort;
mod stage;
pub mod store;
pub mod summary;
mod task;

pub use error::{ParsePriorityError, ParseStageError};
pub use filter::{FilterState, StageFilter};
pub use ids::{CommentId, TaskId};
pub use priority::Priority;
pub use stage::Stage;
pub use summary::BoardSummary;
pub use task::{Comment, Task, TaskDraft};
