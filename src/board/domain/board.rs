//! Board aggregate root: one owner's sections and tasks.

use super::{
    BoardDomainError, BoardRevision, NewTask, OwnerId, Section, SectionId, SectionPatch, Task,
    TaskId, TaskPatch, default_sections, ordering, status_key,
};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Board aggregate root.
///
/// Sections are kept in insertion order and tasks in storage order; display
/// order is derived from each element's `order` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    owner: OwnerId,
    sections: Vec<Section>,
    tasks: Vec<Task>,
    revision: BoardRevision,
}

/// Parameter object for reconstructing a persisted board aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedBoardData {
    /// Owning identity.
    pub owner: OwnerId,
    /// Persisted sections in storage order.
    pub sections: Vec<Section>,
    /// Persisted tasks in storage order.
    pub tasks: Vec<Task>,
    /// Stored revision.
    pub revision: BoardRevision,
}

impl Board {
    /// Creates a board seeded with the default sections and no tasks.
    #[must_use]
    pub fn new(owner: OwnerId) -> Self {
        Self {
            owner,
            sections: default_sections(),
            tasks: Vec::new(),
            revision: BoardRevision::INITIAL,
        }
    }

    /// Reconstructs a board from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedBoardData) -> Self {
        Self {
            owner: data.owner,
            sections: data.sections,
            tasks: data.tasks,
            revision: data.revision,
        }
    }

    /// Decomposes the board into its persisted parts.
    #[must_use]
    pub fn into_persisted(self) -> PersistedBoardData {
        PersistedBoardData {
            owner: self.owner,
            sections: self.sections,
            tasks: self.tasks,
            revision: self.revision,
        }
    }

    /// Returns the owning identity.
    #[must_use]
    pub const fn owner(&self) -> &OwnerId {
        &self.owner
    }

    /// Returns the sections in storage order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the tasks in storage order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the revision this board was loaded or last saved at.
    #[must_use]
    pub const fn revision(&self) -> BoardRevision {
        self.revision
    }

    /// Moves the board to the next revision and returns the previous one.
    ///
    /// Callers pass the returned value to the repository as the revision the
    /// write is based on.
    pub const fn advance_revision(&mut self) -> BoardRevision {
        let previous = self.revision;
        self.revision = previous.next();
        previous
    }

    /// Finds a section by identifier.
    #[must_use]
    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|section| section.id() == id)
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns `true` when some section's status identifier equals `status`.
    #[must_use]
    pub fn has_status(&self, status: &str) -> bool {
        self.sections
            .iter()
            .any(|section| section.status_key() == status)
    }

    /// Appends a section after the current last display position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateSection`] when the identifier is
    /// already used on this board, [`BoardDomainError::DuplicateStatus`] when
    /// the title maps to a status another section already owns, or
    /// [`BoardDomainError::EmptySectionTitle`] for a blank title.
    pub fn add_section(
        &mut self,
        id: SectionId,
        title: impl Into<String>,
    ) -> Result<Section, BoardDomainError> {
        if self.section(&id).is_some() {
            return Err(BoardDomainError::DuplicateSection(id));
        }
        let order = ordering::next_section_order(&self.sections);
        let section = Section::new(id, title, order)?;
        let status = section.status_key();
        if self.has_status(&status) {
            return Err(BoardDomainError::DuplicateStatus(status));
        }
        self.sections.push(section.clone());
        Ok(section)
    }

    /// Merges the patch into the section with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::SectionNotFound`] for an unknown
    /// identifier, [`BoardDomainError::DuplicateStatus`] when the new title
    /// maps to a status another section owns, or
    /// [`BoardDomainError::EmptySectionTitle`] for a blank replacement title.
    pub fn patch_section(
        &mut self,
        id: &SectionId,
        patch: SectionPatch,
    ) -> Result<&Section, BoardDomainError> {
        if self.section(id).is_none() {
            return Err(BoardDomainError::SectionNotFound(id.clone()));
        }
        if let Some(title) = patch.title.as_deref() {
            let status = status_key(title.trim());
            let taken = self
                .sections
                .iter()
                .any(|other| other.id() != id && other.status_key() == status);
            if taken {
                return Err(BoardDomainError::DuplicateStatus(status));
            }
        }
        let section = self
            .sections
            .iter_mut()
            .find(|section| section.id() == id)
            .ok_or_else(|| BoardDomainError::SectionNotFound(id.clone()))?;
        section.apply(patch)?;
        Ok(section)
    }

    /// Removes a section and every task whose status matches it.
    ///
    /// Returns the number of tasks removed with the section.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::SectionNotFound`] for an unknown
    /// identifier.
    pub fn delete_section(&mut self, id: &SectionId) -> Result<usize, BoardDomainError> {
        let position = self
            .sections
            .iter()
            .position(|section| section.id() == id)
            .ok_or_else(|| BoardDomainError::SectionNotFound(id.clone()))?;
        let removed = self.sections.remove(position);
        let status = removed.status_key();

        let before = self.tasks.len();
        self.tasks.retain(|task| task.status() != status);
        Ok(before.saturating_sub(self.tasks.len()))
    }

    /// Appends a task to the end of its status column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownStatus`] when no section matches the
    /// requested status, or [`BoardDomainError::EmptyTaskTitle`] for a blank
    /// title.
    pub fn add_task(
        &mut self,
        draft: NewTask,
        clock: &impl Clock,
    ) -> Result<Task, BoardDomainError> {
        self.ensure_status(&draft.status)?;
        let order = ordering::next_task_order(&self.tasks, &draft.status);
        let task = Task::new(draft, order, clock)?;
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Merges the patch into a task, renumbering the destination column first
    /// when the status changes.
    ///
    /// The moved task itself is not renumbered: it keeps the `order` carried
    /// by the patch, or its previous value when the patch has none.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] for an unknown identifier,
    /// [`BoardDomainError::UnknownStatus`] for a destination no section
    /// matches, or [`BoardDomainError::EmptyTaskTitle`] for a blank title.
    pub fn patch_task(
        &mut self,
        id: TaskId,
        patch: TaskPatch,
    ) -> Result<&Task, BoardDomainError> {
        let current_status = self
            .task(id)
            .ok_or(BoardDomainError::TaskNotFound(id))?
            .status()
            .to_owned();
        if patch
            .title
            .as_deref()
            .is_some_and(|title| title.trim().is_empty())
        {
            return Err(BoardDomainError::EmptyTaskTitle);
        }

        if let Some(destination) = patch.status.as_deref()
            && destination != current_status
        {
            self.ensure_status(destination)?;
            ordering::renumber_column(&mut self.tasks, destination, None);
        }

        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(BoardDomainError::TaskNotFound(id))?;
        task.apply(patch)?;
        Ok(task)
    }

    /// Removes a task after closing the gap it leaves in its column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] for an unknown identifier.
    pub fn delete_task(&mut self, id: TaskId) -> Result<Task, BoardDomainError> {
        let status = self
            .task(id)
            .ok_or(BoardDomainError::TaskNotFound(id))?
            .status()
            .to_owned();
        ordering::renumber_column(&mut self.tasks, &status, Some(id));

        let position = self
            .tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or(BoardDomainError::TaskNotFound(id))?;
        Ok(self.tasks.remove(position))
    }

    fn ensure_status(&self, status: &str) -> Result<(), BoardDomainError> {
        if self.has_status(status) {
            Ok(())
        } else {
            Err(BoardDomainError::UnknownStatus(status.to_owned()))
        }
    }
}
