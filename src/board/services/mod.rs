//! Orchestration services for the board.

pub mod session;
pub mod view;

pub use session::{BoardError, BoardResult, BoardSession};
pub use view::{BoardStats, BoardView, StageColumn, derive_view};
