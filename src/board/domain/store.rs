//! Pure mutations over the canonical task list.
//!
//! Each operation maps `(current list, arguments)` to a new list and never
//! touches the input. Unknown task identifiers degrade to no-ops: the
//! returned list equals the input. Nothing here can fail.

use super::{Stage, Task, TaskDraft, TaskId};
use mockable::Clock;

/// Creates a task from a raw draft and prepends it (newest-created-first).
///
/// The draft is normalised in one step: blank title, missing priority, the
/// raw tag string, and an unparseable due date all coerce to defaults. The
/// new task starts in [`Stage::Inbox`] with `created_at == updated_at`.
#[must_use]
pub fn create(tasks: &[Task], draft: TaskDraft, clock: &impl Clock) -> Vec<Task> {
    let task = Task::from_draft(draft, clock);
    let mut next = Vec::with_capacity(tasks.len() + 1);
    next.push(task);
    next.extend(tasks.iter().cloned());
    next
}

/// Moves the matching task to `next_stage` and bumps its `updated_at`.
///
/// Any stage is reachable from any other in one step. When `task_id` does
/// not match, the returned list equals the input.
#[must_use]
pub fn set_stage(
    tasks: &[Task],
    task_id: TaskId,
    next_stage: Stage,
    clock: &impl Clock,
) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.id() == task_id {
                let mut updated = task.clone();
                updated.set_stage(next_stage, clock);
                updated
            } else {
                task.clone()
            }
        })
        .collect()
}

/// Appends a comment to the matching task and bumps its `updated_at`.
///
/// Text is trimmed first; when it comes out empty, or `task_id` does not
/// match, the returned list equals the input.
#[must_use]
pub fn add_comment(tasks: &[Task], task_id: TaskId, text: &str, clock: &impl Clock) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.id() == task_id {
                let mut updated = task.clone();
                if updated.append_comment(text, clock) {
                    updated
                } else {
                    task.clone()
                }
            } else {
                task.clone()
            }
        })
        .collect()
}
