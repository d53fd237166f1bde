//! Workflow stages a task moves through.

use super::ParseStageError;
use serde::{Deserialize, Serialize};

/// One of the four fixed workflow positions a task occupies.
///
/// The set is fixed for the lifetime of the board; the declaration order is
/// the canonical left-to-right column order. The workflow is deliberately
/// unordered: any stage is reachable from any other in a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Newly created tasks land here.
    Inbox,
    /// Task is scheduled for upcoming work.
    Plan,
    /// Task is being worked on.
    InProgress,
    /// Task work has finished.
    Done,
}

impl Stage {
    /// All stages in canonical board order.
    pub const ALL: [Self; 4] = [Self::Inbox, Self::Plan, Self::InProgress, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Plan => "plan",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    /// Returns the human-readable column title.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Plan => "Plan",
            Self::InProgress => "In progress",
            Self::Done => "Done",
        }
    }
}

impl TryFrom<&str> for Stage {
    type Error = ParseStageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "inbox" => Ok(Self::Inbox),
            "plan" => Ok(Self::Plan),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseStageError(value.to_owned())),
        }
    }
}
