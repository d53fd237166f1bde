//! When steps for board behaviour scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::when;
use tabula::board::domain::{FilterState, Stage, StageFilter, Task, TaskDraft};

#[when(r#"a task is created with title "{title}", project "{project}", and tags "{tags}""#)]
fn create_task(
    world: &mut BoardWorld,
    title: String,
    project: String,
    tags: String,
) -> Result<(), eyre::Report> {
    let draft = TaskDraft::new()
        .with_title(title)
        .with_project(project)
        .with_tags(tags);
    let view = world
        .session
        .create_task(draft)
        .map_err(|err| eyre::eyre!("create task: {err}"))?;

    world.tracked_task = world.session.tasks().first().map(Task::id);
    world.last_view = Some(view);
    Ok(())
}

#[when(r#"the task is moved to "{stage}""#)]
fn move_task(world: &mut BoardWorld, stage: String) -> Result<(), eyre::Report> {
    let target = Stage::try_from(stage.as_str())
        .map_err(|err| eyre::eyre!("invalid stage in scenario: {err}"))?;
    let id = world
        .tracked_task
        .ok_or_else(|| eyre::eyre!("no task tracked by the scenario"))?;

    let view = world
        .session
        .set_stage(id, target)
        .map_err(|err| eyre::eyre!("move task: {err}"))?;
    world.last_view = Some(view);
    Ok(())
}

#[when(r#"the stage filter is set to "{stage}""#)]
fn set_stage_filter(world: &mut BoardWorld, stage: String) -> Result<(), eyre::Report> {
    let target = Stage::try_from(stage.as_str())
        .map_err(|err| eyre::eyre!("invalid stage in scenario: {err}"))?;

    let view = world.session.set_filters(FilterState {
        stage: StageFilter::Only(target),
        ..FilterState::default()
    });
    world.last_view = Some(view);
    Ok(())
}
