//! In-memory integration tests for ordering across service calls.

use super::helpers::{TestService, column, owner_id, seed_column, service, task_by_title};
use chrono::Utc;
use kanban_board::board::{
    domain::{NewTask, ORDER_GAP, OwnerId, SectionId, TaskPatch},
    services::AddSectionRequest,
};
use rstest::rstest;

fn gaps(count: usize) -> Vec<i64> {
    (0_i64..).map(|index| index * ORDER_GAP).take(count).collect()
}

fn orders(pairs: &[(String, i64)]) -> Vec<i64> {
    pairs.iter().map(|(_, order)| *order).collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn inserts_always_land_above_existing_orders(
    service: TestService,
    owner_id: Result<OwnerId, eyre::Report>,
) -> Result<(), eyre::Report> {
    let owner = owner_id?;
    let seeded = seed_column(&service, &owner, "todo", &["a", "b"]).await?;
    let b = task_by_title(&seeded, "b")?.id();
    service
        .patch_task(&owner, b, TaskPatch::new().with_order(50_000))
        .await?;

    let board = service
        .add_task(&owner, NewTask::new("c", "todo", Utc::now()))
        .await?;

    let c = task_by_title(&board, "c")?.order();
    eyre::ensure!(c == 51_000, "expected 51000, found {c}");
    Ok(())
}

#[rstest]
#[case::first(&["a", "b", "c", "d"], "a")]
#[case::middle(&["a", "b", "c", "d"], "c")]
#[case::last(&["a", "b", "c", "d"], "d")]
#[case::only(&["a"], "a")]
#[tokio::test(flavor = "multi_thread")]
async fn deletion_leaves_dense_gap_sequence(
    service: TestService,
    owner_id: Result<OwnerId, eyre::Report>,
    #[case] titles: &[&str],
    #[case] doomed: &str,
) -> Result<(), eyre::Report> {
    let owner = owner_id?;
    let seeded = seed_column(&service, &owner, "todo", titles).await?;
    let id = task_by_title(&seeded, doomed)?.id();

    let board = service.delete_task(&owner, id).await?;

    let remaining = column(&board, "todo");
    eyre::ensure!(
        orders(&remaining) == gaps(titles.len().saturating_sub(1)),
        "unexpected orders {remaining:?}"
    );
    eyre::ensure!(
        remaining.iter().all(|(title, _)| title != doomed),
        "deleted task still present"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deletion_preserves_relative_order(
    service: TestService,
    owner_id: Result<OwnerId, eyre::Report>,
) -> Result<(), eyre::Report> {
    let owner = owner_id?;
    let seeded = seed_column(&service, &owner, "todo", &["a", "b", "c"]).await?;
    let a = task_by_title(&seeded, "a")?.id();
    service
        .patch_task(&owner, a, TaskPatch::new().with_order(10_000))
        .await?;
    let b = task_by_title(&seeded, "b")?.id();

    let board = service.delete_task(&owner, b).await?;

    let expected = vec![("c".to_owned(), 0), ("a".to_owned(), 1000)];
    let actual = column(&board, "todo");
    eyre::ensure!(actual == expected, "unexpected column {actual:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn move_renumbers_destination_and_leaves_source(
    service: TestService,
    owner_id: Result<OwnerId, eyre::Report>,
) -> Result<(), eyre::Report> {
    let owner = owner_id?;
    seed_column(&service, &owner, "done", &["x", "y"]).await?;
    let seeded = seed_column(&service, &owner, "todo", &["a", "b"]).await?;
    let a = task_by_title(&seeded, "a")?.id();

    let board = service
        .patch_task(&owner, a, TaskPatch::new().with_status("done").with_order(1))
        .await?;

    let done = column(&board, "done");
    let todo = column(&board, "todo");
    let expected_done = vec![("x".to_owned(), 0), ("a".to_owned(), 1), ("y".to_owned(), 1000)];
    eyre::ensure!(done == expected_done, "unexpected done column {done:?}");
    eyre::ensure!(
        todo == vec![("b".to_owned(), 1999)],
        "source column should be untouched, found {todo:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn added_section_becomes_a_valid_status(
    service: TestService,
    owner_id: Result<OwnerId, eyre::Report>,
) -> Result<(), eyre::Report> {
    let owner = owner_id?;
    service.get_or_create(&owner).await?;
    service
        .add_section(&owner, AddSectionRequest::new("4", "Needs Review"))
        .await?;

    let board = service
        .add_task(&owner, NewTask::new("Card", "needsreview", Utc::now()))
        .await?;

    let section = board
        .section(&SectionId::new("4")?)
        .ok_or_else(|| eyre::eyre!("section missing"))?;
    eyre::ensure!(section.order() == 3, "unexpected section order {}", section.order());
    eyre::ensure!(
        column(&board, "needsreview") == vec![("Card".to_owned(), 999)],
        "task not appended to new column"
    );
    Ok(())
}
