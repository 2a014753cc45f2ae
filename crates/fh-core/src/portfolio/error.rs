use thiserror::Error;

use super::project::ProjectId;

/// A required form field was left empty. Blocks submission; never
/// reaches the project store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
}

/// Project store operation failure. `NotFound` indicates a caller/view
/// desync; the view should re-sync from `list()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProjectStoreError {
    #[error("project {0} not found")]
    NotFound(ProjectId),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
