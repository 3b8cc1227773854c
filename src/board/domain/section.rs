//! Board sections (columns) and the status identifiers derived from them.

use super::{BoardDomainError, SectionId};
use serde::{Deserialize, Serialize};

/// A named column on the board.
///
/// The normalized title doubles as the status identifier that tasks in the
/// column carry; see [`status_key`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    id: SectionId,
    title: String,
    order: i64,
}

impl Section {
    /// Creates a section with a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptySectionTitle`] when the title is blank.
    pub fn new(
        id: SectionId,
        title: impl Into<String>,
        order: i64,
    ) -> Result<Self, BoardDomainError> {
        Ok(Self {
            id,
            title: validated_title(title.into())?,
            order,
        })
    }

    /// Returns the section identifier.
    #[must_use]
    pub const fn id(&self) -> &SectionId {
        &self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the display position.
    #[must_use]
    pub const fn order(&self) -> i64 {
        self.order
    }

    /// Returns the status identifier tasks in this column carry.
    #[must_use]
    pub fn status_key(&self) -> String {
        status_key(&self.title)
    }

    /// Merges the provided fields into this section.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptySectionTitle`] when the patch carries a
    /// blank title. The section is left untouched in that case.
    pub fn apply(&mut self, patch: SectionPatch) -> Result<(), BoardDomainError> {
        let SectionPatch { title, order } = patch;
        let validated = title.map(validated_title).transpose()?;
        if let Some(new_title) = validated {
            self.title = new_title;
        }
        if let Some(new_order) = order {
            self.order = new_order;
        }
        Ok(())
    }
}

/// Partial update for a section. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SectionPatch {
    /// Replacement display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement display position.
    #[serde(default)]
    pub order: Option<i64>,
}

impl SectionPatch {
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

    /// Sets the replacement order.
    #[must_use]
    pub const fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }
}

/// Derives the task status identifier for a section title.
///
/// The title is lower-cased and spaces are removed, so `"In Progress"`
/// becomes `"inprogress"`.
#[must_use]
pub fn status_key(title: &str) -> String {
    title.to_lowercase().replace(' ', "")
}

/// Sections every new board starts with.
#[must_use]
pub fn default_sections() -> Vec<Section> {
    [("1", "Todo"), ("2", "In Progress"), ("3", "Done")]
        .into_iter()
        .zip(0_i64..)
        .map(|((id, title), order)| Section {
            id: SectionId::from_trusted(id),
            title: title.to_owned(),
            order,
        })
        .collect()
}

fn validated_title(title: String) -> Result<String, BoardDomainError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(BoardDomainError::EmptySectionTitle);
    }
    Ok(trimmed.to_owned())
}
