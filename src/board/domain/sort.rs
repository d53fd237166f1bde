//! Ordering policy for tasks sharing a stage.

use super::Task;
use chrono::{DateTime, NaiveTime, Utc};

/// Orders tasks ascending by effective date: the due date (taken at
/// midnight UTC) when scheduled, the creation instant otherwise.
///
/// The sort is stable, so tasks with equal effective dates keep their
/// original insertion order.
#[must_use]
pub fn order_within_stage(tasks: &[Task]) -> Vec<Task> {
    let mut ordered = tasks.to_vec();
    ordered.sort_by_key(effective_instant);
    ordered
}

/// The instant a task sorts by within its stage.
fn effective_instant(task: &Task) -> DateTime<Utc> {
    task.due_date()
        .map_or_else(|| task.created_at(), |date| date.and_time(NaiveTime::MIN).and_utc())
}
