//! In-memory integration tests for the board storage contract.

use super::helpers::{owner_id, repo};
use chrono::Utc;
use kanban_board::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::{Board, BoardRevision, NewTask, OwnerId},
    ports::{BoardRepository, BoardRepositoryError},
};
use mockable::DefaultClock;
use rstest::rstest;

async fn stored_board(
    repo: &InMemoryBoardRepository,
    owner: &OwnerId,
) -> Result<Board, eyre::Report> {
    repo.find_by_owner(owner)
        .await?
        .ok_or_else(|| eyre::eyre!("board missing for {owner}"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_board_is_found_by_owner(
    repo: InMemoryBoardRepository,
    owner_id: Result<OwnerId, eyre::Report>,
) -> Result<(), eyre::Report> {
    let owner = owner_id?;
    let board = Board::new(owner.clone());

    repo.create(&board).await?;
    let found = repo.find_by_owner(&owner).await?;

    eyre::ensure!(found.as_ref() == Some(&board), "stored board mismatch");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_owner_has_no_board(
    repo: InMemoryBoardRepository,
    owner_id: Result<OwnerId, eyre::Report>,
) -> Result<(), eyre::Report> {
    let found = repo.find_by_owner(&owner_id?).await?;

    eyre::ensure!(found.is_none(), "expected no board");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_create_is_duplicate(
    repo: InMemoryBoardRepository,
    owner_id: Result<OwnerId, eyre::Report>,
) -> Result<(), eyre::Report> {
    let owner = owner_id?;
    repo.create(&Board::new(owner.clone())).await?;

    let result = repo.create(&Board::new(owner.clone())).await;

    eyre::ensure!(
        matches!(result, Err(BoardRepositoryError::DuplicateBoard(ref dup)) if *dup == owner),
        "expected duplicate board error, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_replaces_board_at_expected_revision(
    repo: InMemoryBoardRepository,
    owner_id: Result<OwnerId, eyre::Report>,
) -> Result<(), eyre::Report> {
    let owner = owner_id?;
    let mut board = Board::new(owner.clone());
    repo.create(&board).await?;

    board.add_task(NewTask::new("Card", "todo", Utc::now()), &DefaultClock)?;
    let expected = board.advance_revision();
    repo.save(&board, expected).await?;

    let stored = stored_board(&repo, &owner).await?;
    eyre::ensure!(stored.revision() == BoardRevision::new(1), "revision not advanced");
    eyre::ensure!(stored.tasks().len() == 1, "task not persisted");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stale_save_is_rejected_and_keeps_first_write(
    repo: InMemoryBoardRepository,
    owner_id: Result<OwnerId, eyre::Report>,
) -> Result<(), eyre::Report> {
    let owner = owner_id?;
    repo.create(&Board::new(owner.clone())).await?;
    let mut first = stored_board(&repo, &owner).await?;
    let mut second = stored_board(&repo, &owner).await?;

    first.add_task(NewTask::new("First writer", "todo", Utc::now()), &DefaultClock)?;
    let first_expected = first.advance_revision();
    repo.save(&first, first_expected).await?;

    second.add_task(NewTask::new("Second writer", "todo", Utc::now()), &DefaultClock)?;
    let second_expected = second.advance_revision();
    let result = repo.save(&second, second_expected).await;

    eyre::ensure!(
        matches!(result, Err(BoardRepositoryError::Conflict { expected, .. })
            if expected == BoardRevision::INITIAL),
        "expected revision conflict, got {result:?}"
    );
    let stored = stored_board(&repo, &owner).await?;
    eyre::ensure!(stored == first, "first write should remain authoritative");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_without_board_is_not_found(
    repo: InMemoryBoardRepository,
    owner_id: Result<OwnerId, eyre::Report>,
) -> Result<(), eyre::Report> {
    let board = Board::new(owner_id?);

    let result = repo.save(&board, BoardRevision::INITIAL).await;

    eyre::ensure!(
        matches!(result, Err(BoardRepositoryError::NotFound(_))),
        "expected not found, got {result:?}"
    );
    Ok(())
}
