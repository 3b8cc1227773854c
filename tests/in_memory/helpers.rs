//! Shared test helpers for in-memory repository integration tests.

use std::sync::Arc;

use chrono::Utc;
use kanban_board::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::{Board, NewTask, OwnerId, Task, ordering::column_in_display_order},
    services::BoardService,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type backed by the in-memory repository.
pub type TestService = BoardService<InMemoryBoardRepository, DefaultClock>;

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryBoardRepository {
    InMemoryBoardRepository::new()
}

/// Provides a service over a fresh in-memory repository.
#[fixture]
pub fn service() -> TestService {
    BoardService::new(
        Arc::new(InMemoryBoardRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Provides the owner used across integration tests.
///
/// # Errors
///
/// Returns an error if the identifier is rejected.
#[fixture]
pub fn owner_id() -> Result<OwnerId, eyre::Report> {
    Ok(OwnerId::new("integration-owner")?)
}

/// Creates the owner's board and adds one task per title to `status`.
///
/// # Errors
///
/// Returns an error if board creation or any insertion fails.
pub async fn seed_column(
    service: &TestService,
    owner: &OwnerId,
    status: &str,
    titles: &[&str],
) -> Result<Board, eyre::Report> {
    let mut board = service.get_or_create(owner).await?;
    for title in titles {
        board = service
            .add_task(owner, NewTask::new(*title, status, Utc::now()))
            .await?;
    }
    Ok(board)
}

/// Returns `(title, order)` pairs for `status` sorted by order.
#[must_use]
pub fn column(board: &Board, status: &str) -> Vec<(String, i64)> {
    column_in_display_order(board.tasks(), status)
        .into_iter()
        .map(|task| (task.title().to_owned(), task.order()))
        .collect()
}

/// Looks up a task by title.
///
/// # Errors
///
/// Returns an error when no task carries `title`.
pub fn task_by_title<'a>(board: &'a Board, title: &str) -> Result<&'a Task, eyre::Report> {
    board
        .tasks()
        .iter()
        .find(|task| task.title() == title)
        .ok_or_else(|| eyre::eyre!("task {title:?} not found"))
}
