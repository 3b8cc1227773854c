//! Task cards and their creation and patch payloads.

use super::{BoardDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Deserializer, Serialize};

/// Person a task is assigned to.
///
/// All fields are caller-supplied; blank values are dropped during
/// normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    /// External identifier of the assignee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Assignee {
    /// Trims every field, drops blank ones, and returns `None` when nothing
    /// remains.
    #[must_use]
    pub fn normalized(self) -> Option<Self> {
        let Self { id, name, avatar } = self;
        let assignee = Self {
            id: non_blank(id),
            name: non_blank(name),
            avatar: non_blank(avatar),
        };
        let is_empty =
            assignee.id.is_none() && assignee.name.is_none() && assignee.avatar.is_none();
        (!is_empty).then_some(assignee)
    }
}

/// A card on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    status: String,
    order: i64,
    due_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    assignee: Option<Assignee>,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task from a creation payload at the given sort position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the title is blank.
    pub fn new(
        draft: NewTask,
        order: i64,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        let NewTask {
            title,
            description,
            status,
            due_date,
            assignee,
        } = draft;

        Ok(Self {
            id: TaskId::new(),
            title: validated_title(title)?,
            description: non_blank(description),
            status,
            order,
            due_date,
            assignee: assignee.and_then(Assignee::normalized),
            created_at: clock.utc(),
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the status identifier of the column holding the task.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the sort key within the status column.
    #[must_use]
    pub const fn order(&self) -> i64 {
        self.order
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<&Assignee> {
        self.assignee.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(super) const fn set_order(&mut self, order: i64) {
        self.order = order;
    }

    /// Merges every provided field into the task, `order` included.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the patch carries a
    /// blank title. The task is left untouched in that case.
    pub(super) fn apply(&mut self, patch: TaskPatch) -> Result<(), BoardDomainError> {
        let TaskPatch {
            title,
            description,
            status,
            order,
            due_date,
            assignee,
        } = patch;

        let validated = title.map(validated_title).transpose()?;
        if let Some(new_title) = validated {
            self.title = new_title;
        }
        if let Some(new_description) = description {
            self.description = non_blank(new_description);
        }
        if let Some(new_status) = status {
            self.status = new_status;
        }
        if let Some(new_order) = order {
            self.order = new_order;
        }
        if let Some(new_due_date) = due_date {
            self.due_date = new_due_date;
        }
        if let Some(new_assignee) = assignee {
            self.assignee = new_assignee.and_then(Assignee::normalized);
        }
        Ok(())
    }
}

/// Creation payload for a task.
///
/// The sort key is never taken from the caller; it is assigned on insertion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Status identifier of the destination column.
    pub status: String,
    /// Due date.
    pub due_date: DateTime<Utc>,
    /// Optional assignee.
    #[serde(default)]
    pub assignee: Option<Assignee>,
}

impl NewTask {
    /// Creates a payload with the required fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        status: impl Into<String>,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: status.into(),
            due_date,
            assignee: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: Assignee) -> Self {
        self.assignee = Some(assignee);
        self
    }
}

/// Partial update for a task. Absent fields are left unchanged.
///
/// `description` and `assignee` distinguish an absent field (`None`) from an
/// explicit JSON `null` (`Some(None)`), which clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    /// Replacement title.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description; `Some(None)` clears it.
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    /// Destination status; a different value moves the task between columns.
    #[serde(default)]
    pub status: Option<String>,
    /// Caller-chosen sort key, applied verbatim.
    #[serde(default)]
    pub order: Option<i64>,
    /// Replacement due date.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Replacement assignee; `Some(None)` clears it.
    #[serde(default, deserialize_with = "present")]
    pub assignee: Option<Option<Assignee>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Clears the description.
    #[must_use]
    pub fn without_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Sets the destination status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the sort key.
    #[must_use]
    pub const fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    /// Sets the replacement due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the replacement assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: Assignee) -> Self {
        self.assignee = Some(Some(assignee));
        self
    }

    /// Clears the assignee.
    #[must_use]
    pub fn without_assignee(mut self) -> Self {
        self.assignee = Some(None);
        self
    }
}

/// Marks a field as present, so `null` deserializes to `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn validated_title(title: String) -> Result<String, BoardDomainError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(BoardDomainError::EmptyTaskTitle);
    }
    Ok(trimmed.to_owned())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
}
