//! Given steps for board ordering BDD scenarios.

use super::world::{BoardWorld, run_async};
use chrono::Utc;
use eyre::WrapErr;
use kanban_board::board::domain::{NewTask, OwnerId};
use rstest_bdd_macros::given;

#[given(r#"a new board for owner "{name}""#)]
fn new_board(world: &mut BoardWorld, name: String) -> Result<(), eyre::Report> {
    let owner = OwnerId::new(name).wrap_err("construct scenario owner")?;
    let board = run_async(world.service.get_or_create(&owner)).wrap_err("create board")?;
    world.owner = Some(owner);
    world.board = Some(board);
    Ok(())
}

#[given(r#"task "{title}" in column "{status}""#)]
fn existing_task(
    world: &mut BoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let owner = world.owner()?;
    let board = run_async(
        world
            .service
            .add_task(&owner, NewTask::new(title, status, Utc::now())),
    )
    .wrap_err("seed task")?;
    world.board = Some(board);
    Ok(())
}
