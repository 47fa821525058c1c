//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record shared by state and view layers.
//! - Provide the two-value status lifecycle and its stable string ids.
//!
//! # Invariants
//! - `id` is assigned at creation and never changes afterwards.
//! - `status` is only ever mutated through `ProjectState::move_project`.
//! - Status string ids (`active`, `finished`) are wire- and UI-stable: list
//!   element ids and list headers are derived from them.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a project.
///
/// Generated from the creation timestamp (UUID v7), so ids created in one
/// process sort roughly by creation order. Kept as a type alias to make
/// semantic intent explicit in signatures.
pub type ProjectId = Uuid;

/// Board column a project currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Still being worked on.
    Active,
    /// Done; lives on the finished list.
    Finished,
}

impl ProjectStatus {
    /// Stable string id used for element ids, list headers and the wire shape.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => PROJECT_STATUS_ACTIVE,
            Self::Finished => PROJECT_STATUS_FINISHED,
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable string id for the active status.
pub const PROJECT_STATUS_ACTIVE: &str = "active";
/// Stable string id for the finished status.
pub const PROJECT_STATUS_FINISHED: &str = "finished";

/// Parses one project status from its stable string id.
pub fn parse_project_status(value: &str) -> Result<ProjectStatus, StatusParseError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(StatusParseError::EmptyStatus);
    }

    match normalized {
        PROJECT_STATUS_ACTIVE => Ok(ProjectStatus::Active),
        PROJECT_STATUS_FINISHED => Ok(ProjectStatus::Finished),
        other => Err(StatusParseError::UnsupportedStatus(other.to_string())),
    }
}

/// Status parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusParseError {
    EmptyStatus,
    UnsupportedStatus(String),
}

impl Display for StatusParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyStatus => write!(f, "project status value must not be empty"),
            Self::UnsupportedStatus(value) => {
                write!(f, "project status is unsupported: {value}")
            }
        }
    }
}

impl Error for StatusParseError {}

/// Canonical record for one board entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable id, also carried as the drag payload between lists.
    pub id: ProjectId,
    /// Short title shown as the item heading.
    pub title: String,
    /// Free-form description shown below the heading.
    pub description: String,
    /// Number of people assigned; drives singular/plural rendering.
    pub people: u32,
    /// Current board column.
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a new project with a generated timestamp-derived id.
    ///
    /// New projects always start on the active list.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self::with_id(Uuid::now_v7(), title, description, people)
    }

    /// Creates a project with a caller-provided id.
    ///
    /// The store does not enforce id uniqueness; callers taking this path
    /// own the consequences of colliding ids (`move_project` acts on the
    /// first match in insertion order).
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Human label for the assigned people count.
    ///
    /// Singular exactly when `people == 1`; zero uses the plural form.
    pub fn persons_label(&self) -> String {
        if self.people == 1 {
            "1 Person".to_string()
        } else {
            format!("{} People", self.people)
        }
    }
}
