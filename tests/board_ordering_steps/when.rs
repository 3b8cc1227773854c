//! When steps for board ordering BDD scenarios.

use super::world::{BoardWorld, run_async};
use chrono::Utc;
use kanban_board::board::domain::{NewTask, TaskPatch};
use rstest_bdd_macros::when;

#[when(r#"task "{title}" is added to column "{status}""#)]
fn add_task(world: &mut BoardWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let owner = world.owner()?;
    let result = run_async(
        world
            .service
            .add_task(&owner, NewTask::new(title, status, Utc::now())),
    );
    world.record(result);
    Ok(())
}

#[when(r#"task "{title}" is deleted"#)]
fn delete_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let owner = world.owner()?;
    let id = world.task(&title)?.id();
    let result = run_async(world.service.delete_task(&owner, id));
    world.record(result);
    Ok(())
}

#[when(r#"task "{title}" is moved to column "{status}""#)]
fn move_task(world: &mut BoardWorld, title: String, status: String) -> Result<(), eyre::Report> {
    patch_task(world, &title, TaskPatch::new().with_status(status))
}

#[when(r#"task "{title}" is moved to column "{status}" with order {order:i64}"#)]
fn move_task_with_order(
    world: &mut BoardWorld,
    title: String,
    status: String,
    order: i64,
) -> Result<(), eyre::Report> {
    patch_task(
        world,
        &title,
        TaskPatch::new().with_status(status).with_order(order),
    )
}

#[when(r#"section "{title}" is deleted"#)]
fn delete_section(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let owner = world.owner()?;
    let id = world
        .board()?
        .sections()
        .iter()
        .find(|section| section.title() == title)
        .map(|section| section.id().clone())
        .ok_or_else(|| eyre::eyre!("section {title:?} is not on the board"))?;
    let result = run_async(world.service.delete_section(&owner, &id));
    world.record(result);
    Ok(())
}

fn patch_task(world: &mut BoardWorld, title: &str, patch: TaskPatch) -> Result<(), eyre::Report> {
    let owner = world.owner()?;
    let id = world.task(title)?.id();
    let result = run_async(world.service.patch_task(&owner, id, patch));
    world.record(result);
    Ok(())
}
