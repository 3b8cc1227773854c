//! `PostgreSQL` repository implementation for board storage.

use super::{
    models::{BoardChangeset, BoardRow, NewBoardRow},
    schema::boards,
};
use crate::board::{
    domain::{Board, BoardRevision, OwnerId, PersistedBoardData},
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by board adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

/// SQL creating the board table; safe to run repeatedly.
const CREATE_BOARDS_SQL: &str =
    include_str!("../../../../migrations/2026-10-01-000000_create_boards/up.sql");

/// Builds a connection pool for `database_url`.
///
/// This blocks while the pool opens its initial connections.
///
/// # Errors
///
/// Returns [`BoardRepositoryError::Persistence`] when the pool cannot be
/// established.
pub fn build_pool(database_url: &str, max_size: u32) -> BoardRepositoryResult<BoardPgPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size)
        .build(manager)
        .map_err(BoardRepositoryError::persistence)
}

/// `PostgreSQL`-backed board repository.
#[derive(Debug, Clone)]
pub struct PostgresBoardRepository {
    pool: BoardPgPool,
}

impl PostgresBoardRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    /// Creates the board table when it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::Persistence`] when the statement fails.
    pub async fn ensure_schema(&self) -> BoardRepositoryResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(CREATE_BOARDS_SQL)
                .map_err(BoardRepositoryError::persistence)
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> BoardRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> BoardRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(BoardRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(BoardRepositoryError::persistence)?
    }
}

#[async_trait]
impl BoardRepository for PostgresBoardRepository {
    async fn find_by_owner(&self, owner: &OwnerId) -> BoardRepositoryResult<Option<Board>> {
        let lookup_owner = owner.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = boards::table
                .filter(boards::owner_id.eq(lookup_owner.as_str()))
                .select(BoardRow::as_select())
                .first::<BoardRow>(connection)
                .optional()
                .map_err(BoardRepositoryError::persistence)?;
            row.map(row_to_board).transpose()
        })
        .await
    }

    async fn create(&self, board: &Board) -> BoardRepositoryResult<()> {
        let owner = board.owner().clone();
        let new_row = to_new_row(board)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(boards::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        BoardRepositoryError::DuplicateBoard(owner.clone())
                    }
                    _ => BoardRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn save(
        &self,
        board: &Board,
        expected_revision: BoardRevision,
    ) -> BoardRepositoryResult<()> {
        let owner = board.owner().clone();
        let changeset = to_changeset(board)?;
        let expected = revision_to_column(expected_revision)?;

        self.run_blocking(move |connection| {
            let updated = diesel::update(
                boards::table
                    .filter(boards::owner_id.eq(owner.as_str()))
                    .filter(boards::revision.eq(expected)),
            )
            .set((&changeset, boards::updated_at.eq(diesel::dsl::now)))
            .execute(connection)
            .map_err(BoardRepositoryError::persistence)?;
            if updated > 0 {
                return Ok(());
            }

            // Zero rows means either no board or a stale revision; tell them
            // apart for the caller.
            let exists = diesel::select(diesel::dsl::exists(
                boards::table.filter(boards::owner_id.eq(owner.as_str())),
            ))
            .get_result::<bool>(connection)
            .map_err(BoardRepositoryError::persistence)?;
            if exists {
                Err(BoardRepositoryError::Conflict {
                    owner,
                    expected: expected_revision,
                })
            } else {
                Err(BoardRepositoryError::NotFound(owner))
            }
        })
        .await
    }
}

fn revision_to_column(revision: BoardRevision) -> BoardRepositoryResult<i64> {
    i64::try_from(revision.value()).map_err(BoardRepositoryError::persistence)
}

fn to_new_row(board: &Board) -> BoardRepositoryResult<NewBoardRow> {
    Ok(NewBoardRow {
        owner_id: board.owner().as_str().to_owned(),
        sections: serde_json::to_value(board.sections())
            .map_err(BoardRepositoryError::persistence)?,
        tasks: serde_json::to_value(board.tasks()).map_err(BoardRepositoryError::persistence)?,
        revision: revision_to_column(board.revision())?,
    })
}

fn to_changeset(board: &Board) -> BoardRepositoryResult<BoardChangeset> {
    let NewBoardRow {
        sections,
        tasks,
        revision,
        ..
    } = to_new_row(board)?;
    Ok(BoardChangeset {
        sections,
        tasks,
        revision,
    })
}

fn row_to_board(row: BoardRow) -> BoardRepositoryResult<Board> {
    let BoardRow {
        owner_id,
        sections,
        tasks,
        revision,
    } = row;

    let data = PersistedBoardData {
        owner: OwnerId::new(owner_id).map_err(BoardRepositoryError::persistence)?,
        sections: serde_json::from_value(sections).map_err(BoardRepositoryError::persistence)?,
        tasks: serde_json::from_value(tasks).map_err(BoardRepositoryError::persistence)?,
        revision: BoardRevision::new(
            u64::try_from(revision).map_err(BoardRepositoryError::persistence)?,
        ),
    };
    Ok(Board::from_persisted(data))
}
