use serde::{Deserialize, Serialize};

use super::project::{Project, ProjectId};

/// What the shared create/edit form is being used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    Add,
    Edit,
}

/// Modal mutation state machine
///
/// This is a pure type state machine with only state definitions and
/// transition validation logic. Repository side effects are executed by
/// the application layer.
///
/// State transitions:
/// ```text
///   Idle
///    ├── OpenAdd ───────────► FormOpen(Add, none)
///    ├── OpenEdit(project) ─► FormOpen(Edit, project)
///    └── RequestDelete(id) ─► DeleteRequested(id)
///
///   FormOpen        + Submit / Cancel ──────────► Idle
///   DeleteRequested + Confirm / CancelDelete ───► Idle
/// ```
///
/// `FormOpen` and `DeleteRequested` are mutually exclusive by
/// construction: both are only reachable from `Idle`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum MutationState {
    /// No modal is active.
    #[default]
    Idle,

    /// The create/edit form is open. `target` is the project being
    /// edited, or `None` when adding.
    FormOpen {
        mode: FormMode,
        target: Option<Project>,
    },

    /// A delete was requested and awaits explicit confirmation.
    DeleteRequested { target: ProjectId },
}

impl MutationState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_form_open(&self) -> bool {
        matches!(self, Self::FormOpen { .. })
    }

    pub fn is_delete_requested(&self) -> bool {
        matches!(self, Self::DeleteRequested { .. })
    }

    /// The project the open edit form was seeded from, if any.
    pub fn form_target(&self) -> Option<&Project> {
        match self {
            Self::FormOpen { target, .. } => target.as_ref(),
            _ => None,
        }
    }

    /// The id awaiting delete confirmation, if any.
    pub fn pending_delete(&self) -> Option<ProjectId> {
        match self {
            Self::DeleteRequested { target } => Some(*target),
            _ => None,
        }
    }

    /// Open the form in add mode. Only valid from `Idle`.
    pub fn on_open_add(self) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::FormOpen {
                mode: FormMode::Add,
                target: None,
            }),
            _ => None,
        }
    }

    /// Open the form pre-seeded with an existing project. Only valid
    /// from `Idle`.
    pub fn on_open_edit(self, project: Project) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::FormOpen {
                mode: FormMode::Edit,
                target: Some(project),
            }),
            _ => None,
        }
    }

    /// Request deletion of `target`. Only valid from `Idle`; direct
    /// deletion without this intermediate state is a contract violation.
    pub fn on_request_delete(self, target: ProjectId) -> Option<Self> {
        match self {
            Self::Idle => Some(Self::DeleteRequested { target }),
            _ => None,
        }
    }

    /// Close whatever modal is active (submit finished, cancel, confirm
    /// executed, delete cancelled). Valid from any state.
    pub fn on_close(self) -> Self {
        Self::Idle
    }
}
