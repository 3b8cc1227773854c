//! Service layer for board retrieval and mutation.

use crate::board::{
    domain::{
        Board, BoardDomainError, NewTask, OwnerId, SectionId, SectionPatch, TaskId, TaskPatch,
    },
    ports::{BoardRepository, BoardRepositoryError},
};
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for appending a section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddSectionRequest {
    id: String,
    title: String,
}

impl AddSectionRequest {
    /// Creates a request with the caller-chosen identifier and title.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// The owner has no board to mutate.
    #[error("board not found for owner: {0}")]
    BoardNotFound(OwnerId),
    /// Domain validation or lookup failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] BoardRepositoryError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Board orchestration service.
///
/// Every operation loads the owner's board fresh, applies one mutation, and
/// saves the whole board back before returning it. Nothing is cached between
/// calls.
#[derive(Clone)]
pub struct BoardService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> BoardService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns the owner's board, creating it with the default sections when
    /// none exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when lookup or creation
    /// fails.
    pub async fn get_or_create(&self, owner: &OwnerId) -> BoardServiceResult<Board> {
        if let Some(board) = self.repository.find_by_owner(owner).await? {
            return Ok(board);
        }

        let board = Board::new(owner.clone());
        match self.repository.create(&board).await {
            Ok(()) => {
                info!(owner = %owner, "created board with default sections");
                Ok(board)
            }
            // Lost a creation race with another request; theirs wins.
            Err(BoardRepositoryError::DuplicateBoard(_)) => self.load(owner).await,
            Err(err) => Err(err.into()),
        }
    }

    /// Appends a section to the owner's board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::BoardNotFound`] when the owner has no
    /// board, [`BoardServiceError::Domain`] for an invalid or duplicate
    /// section, or [`BoardServiceError::Repository`] when saving fails.
    pub async fn add_section(
        &self,
        owner: &OwnerId,
        request: AddSectionRequest,
    ) -> BoardServiceResult<Board> {
        let AddSectionRequest { id, title } = request;
        let section_id = SectionId::new(id)?;
        self.mutate(owner, |board| {
            let section = board.add_section(section_id, title)?;
            debug!(
                owner = %owner,
                section = %section.id(),
                order = section.order(),
                "added section"
            );
            Ok(())
        })
        .await
    }

    /// Merges a patch into one section of the owner's board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::BoardNotFound`] when the owner has no
    /// board, [`BoardServiceError::Domain`] when the section is unknown or the
    /// patch is invalid, or [`BoardServiceError::Repository`] when saving
    /// fails.
    pub async fn patch_section(
        &self,
        owner: &OwnerId,
        id: &SectionId,
        patch: SectionPatch,
    ) -> BoardServiceResult<Board> {
        self.mutate(owner, |board| {
            board.patch_section(id, patch)?;
            debug!(owner = %owner, section = %id, "patched section");
            Ok(())
        })
        .await
    }

    /// Deletes a section and the tasks in its column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::BoardNotFound`] when the owner has no
    /// board, [`BoardServiceError::Domain`] when the section is unknown, or
    /// [`BoardServiceError::Repository`] when saving fails.
    pub async fn delete_section(
        &self,
        owner: &OwnerId,
        id: &SectionId,
    ) -> BoardServiceResult<Board> {
        self.mutate(owner, |board| {
            let pruned = board.delete_section(id)?;
            debug!(owner = %owner, section = %id, pruned_tasks = pruned, "deleted section");
            Ok(())
        })
        .await
    }

    /// Appends a task to the end of its status column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::BoardNotFound`] when the owner has no
    /// board, [`BoardServiceError::Domain`] for an invalid payload or unknown
    /// status, or [`BoardServiceError::Repository`] when saving fails.
    pub async fn add_task(&self, owner: &OwnerId, draft: NewTask) -> BoardServiceResult<Board> {
        self.mutate(owner, |board| {
            let task = board.add_task(draft, &*self.clock)?;
            debug!(
                owner = %owner,
                task = %task.id(),
                status = task.status(),
                order = task.order(),
                "added task"
            );
            Ok(())
        })
        .await
    }

    /// Merges a patch into a task, moving it between columns when the status
    /// changes.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::BoardNotFound`] when the owner has no
    /// board, [`BoardServiceError::Domain`] when the task is unknown or the
    /// patch is invalid, or [`BoardServiceError::Repository`] when saving
    /// fails.
    pub async fn patch_task(
        &self,
        owner: &OwnerId,
        id: TaskId,
        patch: TaskPatch,
    ) -> BoardServiceResult<Board> {
        self.mutate(owner, |board| {
            let task = board.patch_task(id, patch)?;
            debug!(
                owner = %owner,
                task = %id,
                status = task.status(),
                order = task.order(),
                "patched task"
            );
            Ok(())
        })
        .await
    }

    /// Deletes a task and closes the gap it leaves in its column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::BoardNotFound`] when the owner has no
    /// board, [`BoardServiceError::Domain`] when the task is unknown, or
    /// [`BoardServiceError::Repository`] when saving fails.
    pub async fn delete_task(&self, owner: &OwnerId, id: TaskId) -> BoardServiceResult<Board> {
        self.mutate(owner, |board| {
            let removed = board.delete_task(id)?;
            debug!(owner = %owner, task = %id, status = removed.status(), "deleted task");
            Ok(())
        })
        .await
    }

    async fn load(&self, owner: &OwnerId) -> BoardServiceResult<Board> {
        self.repository
            .find_by_owner(owner)
            .await?
            .ok_or_else(|| BoardServiceError::BoardNotFound(owner.clone()))
    }

    /// Loads the board, applies `change`, and saves it at the next revision.
    ///
    /// Nothing is written when `change` fails.
    async fn mutate<F>(&self, owner: &OwnerId, change: F) -> BoardServiceResult<Board>
    where
        F: FnOnce(&mut Board) -> Result<(), BoardDomainError> + Send,
    {
        let mut board = self.load(owner).await?;
        change(&mut board)?;
        let expected = board.advance_revision();
        self.repository.save(&board, expected).await?;
        Ok(board)
    }
}
