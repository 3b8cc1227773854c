//! In-memory board repository for tests and single-process deployments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Board, BoardRevision, OwnerId},
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};

/// Thread-safe in-memory board repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardRepository {
    state: Arc<RwLock<HashMap<OwnerId, Board>>>,
}

impl InMemoryBoardRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> BoardRepositoryError {
    BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl BoardRepository for InMemoryBoardRepository {
    async fn find_by_owner(&self, owner: &OwnerId) -> BoardRepositoryResult<Option<Board>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.get(owner).cloned())
    }

    async fn create(&self, board: &Board) -> BoardRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        match state.entry(board.owner().clone()) {
            Entry::Occupied(_) => Err(BoardRepositoryError::DuplicateBoard(board.owner().clone())),
            Entry::Vacant(slot) => {
                slot.insert(board.clone());
                Ok(())
            }
        }
    }

    async fn save(
        &self,
        board: &Board,
        expected_revision: BoardRevision,
    ) -> BoardRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let stored = state
            .get_mut(board.owner())
            .ok_or_else(|| BoardRepositoryError::NotFound(board.owner().clone()))?;
        if stored.revision() != expected_revision {
            return Err(BoardRepositoryError::Conflict {
                owner: board.owner().clone(),
                expected: expected_revision,
            });
        }
        *stored = board.clone();
        Ok(())
    }
}
