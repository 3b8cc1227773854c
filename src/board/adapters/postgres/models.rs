//! Diesel row models for board persistence.

use super::schema::boards;
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for board records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = boards)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BoardRow {
    /// Owning identity.
    pub owner_id: String,
    /// Sections JSON array.
    pub sections: Value,
    /// Tasks JSON array.
    pub tasks: Value,
    /// Stored revision.
    pub revision: i64,
}

/// Insert model for board records. Timestamps use column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = boards)]
pub struct NewBoardRow {
    /// Owning identity.
    pub owner_id: String,
    /// Sections JSON array.
    pub sections: Value,
    /// Tasks JSON array.
    pub tasks: Value,
    /// Initial revision.
    pub revision: i64,
}

/// Full-document changeset applied on save.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = boards)]
pub struct BoardChangeset {
    /// Replacement sections JSON array.
    pub sections: Value,
    /// Replacement tasks JSON array.
    pub tasks: Value,
    /// Revision after the save.
    pub revision: i64,
}
