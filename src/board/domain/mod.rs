//! Domain model for a Kanban board.
//!
//! The board aggregate owns its sections and tasks and applies the task
//! ordering policy on every structural change, while keeping all
//! infrastructure concerns outside of the domain boundary.

mod board;
mod error;
mod ids;
pub mod ordering;
mod section;
mod task;

pub use board::{Board, PersistedBoardData};
pub use error::BoardDomainError;
pub use ids::{BoardRevision, OwnerId, SectionId, TaskId};
pub use ordering::ORDER_GAP;
pub use section::{Section, SectionPatch, default_sections, status_key};
pub use task::{Assignee, NewTask, Task, TaskPatch};
