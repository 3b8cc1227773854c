//! Error types for board domain validation and mutation.

use super::{SectionId, TaskId};
use thiserror::Error;

/// Errors returned while constructing or mutating board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The owner identifier is blank.
    #[error("invalid owner identifier '{0}'")]
    InvalidOwner(String),

    /// The section identifier is blank.
    #[error("invalid section identifier '{0}'")]
    InvalidSectionId(String),

    /// The section title is empty after trimming.
    #[error("section title must not be empty")]
    EmptySectionTitle,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// A section with the same identifier already exists on the board.
    #[error("section '{0}' already exists")]
    DuplicateSection(SectionId),

    /// Another section already maps to the same status identifier.
    #[error("a section with status '{0}' already exists")]
    DuplicateStatus(String),

    /// The task status does not correspond to any section on the board.
    #[error("unknown task status '{0}'")]
    UnknownStatus(String),

    /// No section with the given identifier exists on the board.
    #[error("section not found: {0}")]
    SectionNotFound(SectionId),

    /// No task with the given identifier exists on the board.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
}

impl BoardDomainError {
    /// Returns `true` when the error reports a missing section or task.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::SectionNotFound(_) | Self::TaskNotFound(_))
    }
}
