//! Route handlers. Each one maps a single service call onto a response.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Serialize;
use uuid::Uuid;

use super::{ApiError, AppState, AuthenticatedOwner};
use crate::board::{
    domain::{
        Board, NewTask, PersistedBoardData, Section, SectionId, SectionPatch, Task, TaskId,
        TaskPatch,
    },
    ports::BoardRepository,
    services::AddSectionRequest,
};

type Payload<T> = Result<Json<T>, JsonRejection>;

#[derive(Debug, Serialize)]
pub(super) struct HealthBody {
    status: &'static str,
}

/// Sections and tasks of one board, without storage metadata.
#[derive(Debug, Serialize)]
pub(super) struct BoardBody {
    sections: Vec<Section>,
    tasks: Vec<Task>,
}

impl From<Board> for BoardBody {
    fn from(board: Board) -> Self {
        let PersistedBoardData { sections, tasks, .. } = board.into_persisted();
        Self { sections, tasks }
    }
}

fn task_list(board: Board) -> Vec<Task> {
    board.into_persisted().tasks
}

fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    Uuid::parse_str(raw)
        .map(TaskId::from_uuid)
        .map_err(|_| ApiError::NotFound(format!("task not found: {raw}")))
}

fn parse_section_id(raw: String) -> Result<SectionId, ApiError> {
    SectionId::new(raw).map_err(|err| ApiError::NotFound(err.to_string()))
}

pub(super) async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "OK" })
}

pub(super) async fn get_board<R>(
    State(state): State<AppState<R>>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
) -> Result<Json<BoardBody>, ApiError>
where
    R: BoardRepository + 'static,
{
    let board = state.service.get_or_create(&owner).await?;
    Ok(Json(board.into()))
}

pub(super) async fn add_section<R>(
    State(state): State<AppState<R>>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
    payload: Payload<AddSectionRequest>,
) -> Result<(StatusCode, Json<BoardBody>), ApiError>
where
    R: BoardRepository + 'static,
{
    let Json(request) = payload?;
    let board = state.service.add_section(&owner, request).await?;
    Ok((StatusCode::CREATED, Json(board.into())))
}

pub(super) async fn patch_section<R>(
    State(state): State<AppState<R>>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
    Path(id): Path<String>,
    payload: Payload<SectionPatch>,
) -> Result<Json<BoardBody>, ApiError>
where
    R: BoardRepository + 'static,
{
    let section_id = parse_section_id(id)?;
    let Json(patch) = payload?;
    let board = state
        .service
        .patch_section(&owner, &section_id, patch)
        .await?;
    Ok(Json(board.into()))
}

pub(super) async fn delete_section<R>(
    State(state): State<AppState<R>>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
    Path(id): Path<String>,
) -> Result<Json<BoardBody>, ApiError>
where
    R: BoardRepository + 'static,
{
    let section_id = parse_section_id(id)?;
    let board = state.service.delete_section(&owner, &section_id).await?;
    Ok(Json(board.into()))
}

pub(super) async fn add_task<R>(
    State(state): State<AppState<R>>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
    payload: Payload<NewTask>,
) -> Result<(StatusCode, Json<Vec<Task>>), ApiError>
where
    R: BoardRepository + 'static,
{
    let Json(draft) = payload?;
    let board = state.service.add_task(&owner, draft).await?;
    Ok((StatusCode::CREATED, Json(task_list(board))))
}

pub(super) async fn patch_task<R>(
    State(state): State<AppState<R>>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
    Path(id): Path<String>,
    payload: Payload<TaskPatch>,
) -> Result<Json<Vec<Task>>, ApiError>
where
    R: BoardRepository + 'static,
{
    let task_id = parse_task_id(&id)?;
    let Json(patch) = payload?;
    let board = state.service.patch_task(&owner, task_id, patch).await?;
    Ok(Json(task_list(board)))
}

pub(super) async fn delete_task<R>(
    State(state): State<AppState<R>>,
    AuthenticatedOwner(owner): AuthenticatedOwner,
    Path(id): Path<String>,
) -> Result<Json<Vec<Task>>, ApiError>
where
    R: BoardRepository + 'static,
{
    let task_id = parse_task_id(&id)?;
    let board = state.service.delete_task(&owner, task_id).await?;
    Ok(Json(task_list(board)))
}
