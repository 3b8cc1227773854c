//! Repository port for board persistence keyed by owner identity.

use crate::board::domain::{Board, BoardRevision, OwnerId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board repository operations.
pub type BoardRepositoryResult<T> = Result<T, BoardRepositoryError>;

/// Board persistence contract.
///
/// Boards are always loaded and saved whole; there are no field-level
/// updates at the storage layer.
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Finds the board owned by `owner`.
    ///
    /// Returns `None` when the owner has no board yet.
    async fn find_by_owner(&self, owner: &OwnerId) -> BoardRepositoryResult<Option<Board>>;

    /// Stores a new board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::DuplicateBoard`] when the owner already
    /// has a board.
    async fn create(&self, board: &Board) -> BoardRepositoryResult<()>;

    /// Replaces a stored board, provided it is still at `expected_revision`.
    ///
    /// On success the stored revision becomes `board.revision()`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::NotFound`] when the owner has no board,
    /// or [`BoardRepositoryError::Conflict`] when another write landed after
    /// `expected_revision` was read.
    async fn save(
        &self,
        board: &Board,
        expected_revision: BoardRevision,
    ) -> BoardRepositoryResult<()>;
}

/// Errors returned by board repository implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardRepositoryError {
    /// A board for the owner already exists.
    #[error("duplicate board for owner: {0}")]
    DuplicateBoard(OwnerId),

    /// The owner has no board.
    #[error("board not found for owner: {0}")]
    NotFound(OwnerId),

    /// The stored board moved past the revision the write was based on.
    #[error("board for owner {owner} was modified concurrently (expected revision {expected})")]
    Conflict {
        /// Owner of the contested board.
        owner: OwnerId,
        /// Revision the rejected write was based on.
        expected: BoardRevision,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
