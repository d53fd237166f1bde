//! Task aggregate, its comment thread, and the raw create draft.

use super::{CommentId, Priority, Stage, TaskId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A free-text note attached to a task.
///
/// Comments are append-only: once created they are never edited or removed.
/// The `task_id` back-reference exists for lookup convenience; the owning
/// task holds its comments by containment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    id: CommentId,
    task_id: TaskId,
    text: String,
    created_at: DateTime<Utc>,
}

impl Comment {
    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the identifier of the owning task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the trimmed comment text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Task aggregate root, the sole persisted entity of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: String,
    stage: Stage,
    #[serde(default)]
    priority: Priority,
    #[serde(default)]
    project: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    due_date: Option<NaiveDate>,
    #[serde(default)]
    comments: Vec<Comment>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Title substituted when a draft arrives with a blank or absent title.
    pub const DEFAULT_TITLE: &'static str = "Untitled task";

    /// Builds a fully-defaulted task from a raw draft.
    ///
    /// This is the single normalisation boundary: blank titles coerce to
    /// [`Self::DEFAULT_TITLE`], unrecognised priorities to
    /// [`Priority::Medium`], the raw tag string is split on commas with
    /// empties dropped, and an unparseable due date becomes unscheduled.
    /// New tasks always start in [`Stage::Inbox`].
    pub(crate) fn from_draft(draft: TaskDraft, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let title = draft
            .title
            .map(|raw| raw.trim().to_owned())
            .filter(|trimmed| !trimmed.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_TITLE.to_owned());
        let priority = draft
            .priority
            .as_deref()
            .and_then(|raw| Priority::try_from(raw).ok())
            .unwrap_or_default();

        Self {
            id: TaskId::new(),
            title,
            description: trimmed_or_empty(draft.description),
            stage: Stage::Inbox,
            priority,
            project: trimmed_or_empty(draft.project),
            tags: draft.tags.as_deref().map(parse_tags).unwrap_or_default(),
            due_date: draft
                .due_date
                .and_then(|raw| raw.trim().parse::<NaiveDate>().ok()),
            comments: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the free-text description, possibly empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the current workflow stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the project name, possibly empty.
    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Returns the ordered tag list.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the due date, or `None` when the task is unscheduled.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the comment thread in append order.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the task to another stage and bumps `updated_at`.
    ///
    /// The workflow is unordered: every stage is reachable from every other
    /// in one step, so there is no guard to fail.
    pub fn set_stage(&mut self, next_stage: Stage, clock: &impl Clock) {
        self.stage = next_stage;
        self.touch(clock);
    }

    /// Appends a comment with the trimmed text and bumps `updated_at`.
    ///
    /// Returns `false` without mutating anything when the text is empty
    /// after trimming.
    pub fn append_comment(&mut self, text: &str, clock: &impl Clock) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.comments.push(Comment {
            id: CommentId::new(),
            task_id: self.id,
            text: trimmed.to_owned(),
            created_at: clock.utc(),
        });
        self.touch(clock);
        true
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Raw, possibly-incomplete input supplied when creating a task.
///
/// Every field is optional; normalisation happens once, inside the create
/// mutation, so callers never scatter defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    title: Option<String>,
    description: Option<String>,
    priority: Option<String>,
    project: Option<String>,
    tags: Option<String>,
    due_date: Option<String>,
}

impl TaskDraft {
    /// Creates an empty draft; every field falls back to its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the raw description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the raw priority string, e.g. `"high"`.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the raw project name.
    #[must_use]
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Sets the raw comma-delimited tag string, e.g. `"ui, backlog"`.
    #[must_use]
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    /// Sets the raw ISO due date string, e.g. `"2026-03-01"`.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }
}

/// Trims an optional raw string, defaulting to empty.
fn trimmed_or_empty(raw: Option<String>) -> String {
    raw.map(|value| value.trim().to_owned()).unwrap_or_default()
}

/// Splits a raw comma-delimited tag string, trimming each entry and
/// dropping empties. Duplicates are kept.
fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
