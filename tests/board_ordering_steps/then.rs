//! Then steps for board ordering BDD scenarios.

use super::world::BoardWorld;
use kanban_board::board::{domain::BoardDomainError, services::BoardServiceError};
use rstest_bdd_macros::then;

#[then(r#"task "{title}" has order {order:i64}"#)]
fn task_has_order(world: &BoardWorld, title: String, order: i64) -> Result<(), eyre::Report> {
    let actual = world.task(&title)?.order();
    eyre::ensure!(
        actual == order,
        "expected task {title:?} at order {order}, found {actual}"
    );
    Ok(())
}

#[then(r#"task "{title}" is in column "{status}""#)]
fn task_in_column(world: &BoardWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let actual = world.task(&title)?.status();
    eyre::ensure!(
        actual == status,
        "expected task {title:?} in {status:?}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"task "{title}" is no longer on the board"#)]
fn task_removed(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.find_task(&title)?.is_none(),
        "expected task {title:?} to be removed"
    );
    Ok(())
}

#[then(r#"the board has no column "{status}""#)]
fn column_removed(world: &BoardWorld, status: String) -> Result<(), eyre::Report> {
    let board = world.board()?;
    eyre::ensure!(
        !board.has_status(&status),
        "expected no section for status {status:?}"
    );
    eyre::ensure!(
        board.tasks().iter().all(|task| task.status() != status),
        "expected no tasks left in {status:?}"
    );
    Ok(())
}

#[then("the request is rejected with an unknown status error")]
fn rejected_unknown_status(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.last_error.as_ref() {
        Some(BoardServiceError::Domain(BoardDomainError::UnknownStatus(_))) => Ok(()),
        Some(other) => Err(eyre::eyre!("expected unknown status error, found {other}")),
        None => Err(eyre::eyre!("expected the request to be rejected")),
    }
}
