use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use super::error::ValidationError;

/// Positive, store-unique project identifier.
///
/// Allocated by the project repository as `max(existing) + 1`; immutable
/// across edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(u64);

impl ProjectId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Completed,
    Ongoing,
}

/// A portfolio project entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub status: ProjectStatus,
    /// Display string, e.g. "March 2024". Not interpreted by the core.
    pub date: String,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
}

impl Project {
    /// Build a stored project from a validated draft and a fresh id.
    pub fn from_draft(id: ProjectId, draft: ProjectDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            image_url: draft.image_url,
            tags: draft.tags,
            status: draft.status,
            date: draft.date,
            github_link: draft.github_link,
            live_link: draft.live_link,
        }
    }
}

/// Unsaved form data for creating or editing a project.
///
/// `title` is the only required field; everything else may stay empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub status: ProjectStatus,
    pub date: String,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
}

impl ProjectDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(())
    }
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            image_url: String::new(),
            tags: Vec::new(),
            status: ProjectStatus::Ongoing,
            date: String::new(),
            github_link: None,
            live_link: None,
        }
    }
}

impl From<&Project> for ProjectDraft {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            image_url: project.image_url.clone(),
            tags: project.tags.clone(),
            status: project.status,
            date: project.date.clone(),
            github_link: project.github_link.clone(),
            live_link: project.live_link.clone(),
        }
    }
}
