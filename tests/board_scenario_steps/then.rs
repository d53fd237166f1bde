//! Then steps for board behaviour scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::then;
use tabula::board::domain::{Stage, Task, filter};

#[then(r#"the task is in stage "{stage}""#)]
fn task_is_in_stage(world: &BoardWorld, stage: String) -> Result<(), eyre::Report> {
    let expected = Stage::try_from(stage.as_str())
        .map_err(|err| eyre::eyre!("invalid expected stage in scenario: {err}"))?;
    let task = world.tracked()?;

    if task.stage() != expected {
        return Err(eyre::eyre!(
            "expected stage {}, found {}",
            expected.as_str(),
            task.stage().as_str()
        ));
    }
    Ok(())
}

#[then(r#"the task has tags "{tags}""#)]
fn task_has_tags(world: &BoardWorld, tags: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = tags.split(',').map(str::trim).collect();
    let task = world.tracked()?;

    if task.tags() != expected {
        return Err(eyre::eyre!(
            "expected tags {expected:?}, found {:?}",
            task.tags()
        ));
    }
    Ok(())
}

#[then(r#"the task priority is "{priority}""#)]
fn task_priority_is(world: &BoardWorld, priority: String) -> Result<(), eyre::Report> {
    let task = world.tracked()?;
    if task.priority().as_str() != priority {
        return Err(eyre::eyre!(
            "expected priority {priority}, found {}",
            task.priority().as_str()
        ));
    }
    Ok(())
}

#[then("the task was updated after it was created")]
fn task_updated_after_created(world: &BoardWorld) -> Result<(), eyre::Report> {
    let task = world.tracked()?;
    if task.updated_at() <= task.created_at() {
        return Err(eyre::eyre!(
            "expected updated_at after created_at, found {} <= {}",
            task.updated_at(),
            task.created_at()
        ));
    }
    Ok(())
}

#[then("{count:usize} tasks are visible")]
fn tasks_are_visible(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let view = world
        .last_view
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no view derived yet"))?;

    let visible = view.stats().visible().total();
    if visible != count {
        return Err(eyre::eyre!("expected {count} visible tasks, found {visible}"));
    }
    Ok(())
}

#[then("the visible tasks keep their stored order")]
fn visible_tasks_keep_order(world: &BoardWorld) -> Result<(), eyre::Report> {
    let visible = filter::apply(world.session.tasks(), world.session.filters());

    let mut stored = world.session.tasks().iter().map(Task::id);
    for task in &visible {
        if !stored.any(|id| id == task.id()) {
            return Err(eyre::eyre!("filtered output reordered or invented tasks"));
        }
    }
    Ok(())
}
