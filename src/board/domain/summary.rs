//! Aggregate counts over a task list.

use super::{Stage, Task};
use std::collections::BTreeMap;

/// Per-stage counts plus a total, computed over one task list.
///
/// `by_stage` always carries an entry for every fixed stage, zero when no
/// task occupies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSummary {
    total: usize,
    by_stage: BTreeMap<Stage, usize>,
}

impl BoardSummary {
    /// Returns the number of tasks counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Returns the count for one stage.
    #[must_use]
    pub fn count(&self, stage: Stage) -> usize {
        self.by_stage.get(&stage).copied().unwrap_or(0)
    }

    /// Returns the per-stage counts in canonical board order.
    #[must_use]
    pub const fn by_stage(&self) -> &BTreeMap<Stage, usize> {
        &self.by_stage
    }

    /// Renders the one-line stats footer, e.g.
    /// `Total: 4 · Inbox: 2 · Plan: 0 · In progress: 1 · Done: 1`.
    #[must_use]
    pub fn stats_line(&self) -> String {
        let mut parts = vec![format!("Total: {}", self.total)];
        for stage in Stage::ALL {
            parts.push(format!("{}: {}", stage.label(), self.count(stage)));
        }
        parts.join(" · ")
    }
}

/// Counts a task list per stage.
#[must_use]
pub fn summarize(tasks: &[Task]) -> BoardSummary {
    let mut by_stage: BTreeMap<Stage, usize> =
        Stage::ALL.iter().map(|stage| (*stage, 0)).collect();
    for task in tasks {
        *by_stage.entry(task.stage()).or_insert(0) += 1;
    }
    BoardSummary {
        total: tasks.len(),
        by_stage,
    }
}
