//! Predicate logic deriving the visible subset of tasks.

use super::{Stage, Task};

/// Stage narrowing: either every stage or exactly one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StageFilter {
    /// No stage narrowing.
    #[default]
    All,
    /// Keep only tasks in the given stage (exact match).
    Only(Stage),
}

/// The active filter selection for a board session.
///
/// `project` and `search` are matched as case-insensitive substrings;
/// `search` deliberately matches the title only, not descriptions or tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Stage narrowing, exact match.
    pub stage: StageFilter,
    /// Substring to find in the project name; empty matches everything.
    pub project: String,
    /// Substring to find in the title; empty matches everything.
    pub search: String,
}

impl FilterState {
    /// Returns whether a single task passes every active filter.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let stage_ok = match self.stage {
            StageFilter::All => true,
            StageFilter::Only(stage) => task.stage() == stage,
        };
        stage_ok
            && contains_ignore_case(task.project(), &self.project)
            && contains_ignore_case(task.title(), &self.search)
    }

    /// Renders a short description of the active filters for display.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let StageFilter::Only(stage) = self.stage {
            parts.push(format!("stage {}", stage.label()));
        }
        if !self.project.is_empty() {
            parts.push(format!("project \"{}\"", self.project));
        }
        if !self.search.is_empty() {
            parts.push(format!("title \"{}\"", self.search));
        }
        if parts.is_empty() {
            "no active filters".to_owned()
        } else {
            parts.join(", ")
        }
    }
}

/// Keeps the tasks passing every active filter, preserving input order.
///
/// The result is always a sub-sequence of `tasks`; default filters return
/// the input unchanged.
#[must_use]
pub fn apply(tasks: &[Task], filters: &FilterState) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| filters.matches(task))
        .cloned()
        .collect()
}

/// Case-insensitive substring test; an empty needle matches everything.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
