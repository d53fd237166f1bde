//! The derived view: filtered, ordered, summarised board state.
//!
//! A view is recomputed in full on every cycle — the dataset is small and a
//! full recompute keeps the pipeline trivially correct. Nothing here is
//! ever persisted.

use crate::board::domain::{BoardSummary, FilterState, Stage, Task, filter, sort, summary};

/// One board column: a stage plus its visible tasks in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageColumn {
    stage: Stage,
    tasks: Vec<Task>,
}

impl StageColumn {
    /// Copy shown by presentations in place of an empty column.
    pub const EMPTY_PLACEHOLDER: &'static str = "Nothing here yet";

    /// Returns the stage this column renders.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the column title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.stage.label()
    }

    /// Returns the visible tasks, ordered by the stage sort policy.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of visible tasks in this column.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the column has no visible tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// The dual summary: counts over the full list and over the visible subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardStats {
    all: BoardSummary,
    visible: BoardSummary,
}

impl BoardStats {
    /// Returns the summary over the full task list.
    #[must_use]
    pub const fn all(&self) -> &BoardSummary {
        &self.all
    }

    /// Returns the summary over the filtered subset.
    #[must_use]
    pub const fn visible(&self) -> &BoardSummary {
        &self.visible
    }

    /// Renders the headline totals, surfacing both counts when the filters
    /// hide anything, e.g. `Total: 7 · Visible: 3`.
    #[must_use]
    pub fn headline(&self) -> String {
        let total = self.all.total();
        let visible = self.visible.total();
        if total == visible {
            format!("Total: {total}")
        } else {
            format!("Total: {total} · Visible: {visible}")
        }
    }
}

/// Everything a presentation layer needs for one render cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    columns: Vec<StageColumn>,
    stats: BoardStats,
    filters: FilterState,
}

impl BoardView {
    /// Returns one column per fixed stage, in canonical board order.
    #[must_use]
    pub fn columns(&self) -> &[StageColumn] {
        &self.columns
    }

    /// Returns the dual all-versus-visible summary.
    #[must_use]
    pub const fn stats(&self) -> &BoardStats {
        &self.stats
    }

    /// Returns the filter state this view was derived under.
    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Renders the active-filter description for display.
    #[must_use]
    pub fn active_filters(&self) -> String {
        self.filters.summary()
    }
}

/// Derives the presentation view from the canonical list and the filters.
///
/// The pipeline is filter, then per-stage ordering, then the dual summary;
/// the canonical list is left untouched.
#[must_use]
pub fn derive_view(tasks: &[Task], filters: &FilterState) -> BoardView {
    let visible = filter::apply(tasks, filters);
    let columns = Stage::ALL
        .iter()
        .map(|stage| {
            let of_stage: Vec<Task> = visible
                .iter()
                .filter(|task| task.stage() == *stage)
                .cloned()
                .collect();
            StageColumn {
                stage: *stage,
                tasks: sort::order_within_stage(&of_stage),
            }
        })
        .collect();

    BoardView {
        columns,
        stats: BoardStats {
            all: summary::summarize(tasks),
            visible: summary::summarize(&visible),
        },
        filters: filters.clone(),
    }
}
