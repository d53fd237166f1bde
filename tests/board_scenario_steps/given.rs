//! Given steps for board behaviour scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::given;
use tabula::board::domain::{Stage, Task, TaskDraft};

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    if !world.session.tasks().is_empty() {
        return Err(eyre::eyre!("expected a fresh board in the scenario world"));
    }
    Ok(())
}

#[given("a board of {total:usize} tasks where {done:usize} are done")]
fn board_with_done_tasks(
    world: &mut BoardWorld,
    total: usize,
    done: usize,
) -> Result<(), eyre::Report> {
    let mut done_ids = Vec::new();
    for index in 0..total {
        let view = world
            .session
            .create_task(TaskDraft::new().with_title(format!("task-{index}")))
            .map_err(|err| eyre::eyre!("create scenario task: {err}"))?;
        world.last_view = Some(view);
        if index < done {
            let id = world
                .session
                .tasks()
                .first()
                .map(Task::id)
                .ok_or_else(|| eyre::eyre!("created task missing"))?;
            done_ids.push(id);
        }
    }
    for id in done_ids {
        let view = world
            .session
            .set_stage(id, Stage::Done)
            .map_err(|err| eyre::eyre!("move scenario task: {err}"))?;
        world.last_view = Some(view);
    }
    Ok(())
}
