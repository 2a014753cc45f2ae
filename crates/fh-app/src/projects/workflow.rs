use std::sync::{Arc, Mutex};

use thiserror::Error;

use fh_core::{
    FormMode, MutationState, Project, ProjectDraft, ProjectId, ProjectStoreError, ValidationError,
};

use crate::editing::EditModeHandle;
use crate::projects::ProjectRepository;

/// Modal workflow failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Store(#[from] ProjectStoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another modal (form or delete confirmation) is already active.
    #[error("another mutation is already in progress")]
    AlreadyActive,

    #[error("no form is open")]
    NoFormOpen,

    #[error("no delete is pending confirmation")]
    NoDeletePending,

    /// The layout is in view mode; mutations are disabled.
    #[error("edit mode is disabled")]
    EditDisabled,
}

/// Drives the modal [`MutationState`] machine against the project
/// repository.
///
/// One instance per mounted layout. The form and the delete
/// confirmation are mutually exclusive, deletion always passes through
/// the request → confirm handshake, and every entry point re-checks the
/// layout's edit mode so a view-mode layout cannot mutate the store even
/// if an affordance slipped through the rendering layer.
pub struct MutationWorkflow {
    state: Mutex<MutationState>,
    repo: Arc<ProjectRepository>,
    edit_mode: EditModeHandle,
}

impl MutationWorkflow {
    pub fn new(repo: Arc<ProjectRepository>, edit_mode: EditModeHandle) -> Self {
        Self {
            state: Mutex::new(MutationState::Idle),
            repo,
            edit_mode,
        }
    }

    /// Snapshot of the current modal state.
    pub fn state(&self) -> MutationState {
        self.state.lock().unwrap().clone()
    }

    /// The draft the form should start from: prefilled from the target
    /// when editing, empty when adding, `None` when no form is open.
    pub fn form_template(&self) -> Option<ProjectDraft> {
        match &*self.state.lock().unwrap() {
            MutationState::FormOpen { target, .. } => Some(
                target
                    .as_ref()
                    .map(ProjectDraft::from)
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    /// Open the form in add mode. No-op while the layout is read-only.
    pub fn open_add(&self) -> Result<(), WorkflowError> {
        if self.read_only("open_add") {
            return Ok(());
        }
        let mut state = self.state.lock().unwrap();
        *state = state
            .clone()
            .on_open_add()
            .ok_or(WorkflowError::AlreadyActive)?;
        Ok(())
    }

    /// Open the form pre-populated from the canonical entry for `id`.
    /// No-op while the layout is read-only.
    pub fn open_edit(&self, id: ProjectId) -> Result<(), WorkflowError> {
        if self.read_only("open_edit") {
            return Ok(());
        }
        let target = self
            .repo
            .get(id)
            .ok_or(ProjectStoreError::NotFound(id))?;
        let mut state = self.state.lock().unwrap();
        *state = state
            .clone()
            .on_open_edit(target)
            .ok_or(WorkflowError::AlreadyActive)?;
        Ok(())
    }

    /// Commit the open form. Validation failures block submission and
    /// leave the form open; repository outcomes (including a `NotFound`
    /// desync on edit) close it.
    pub fn submit(&self, draft: ProjectDraft) -> Result<Project, WorkflowError> {
        if self.edit_mode_off() {
            tracing::warn!("submit ignored: edit mode is disabled");
            return Err(WorkflowError::EditDisabled);
        }

        let mut state = self.state.lock().unwrap();
        let (mode, target_id) = match &*state {
            MutationState::FormOpen { mode, target } => (*mode, target.as_ref().map(|p| p.id)),
            _ => return Err(WorkflowError::NoFormOpen),
        };

        // Never reaches the repository; the form stays open for correction.
        draft.validate()?;

        let result = match mode {
            FormMode::Add => self.repo.add(draft),
            FormMode::Edit => {
                // The machine only builds Edit states with a target.
                let id = target_id.ok_or(WorkflowError::NoFormOpen)?;
                self.repo.update(id, draft)
            }
        };

        *state = state.clone().on_close();
        Ok(result?)
    }

    /// Discard unsaved form data. Always available; never writes to the
    /// repository.
    pub fn cancel(&self) {
        let mut state = self.state.lock().unwrap();
        if state.is_form_open() {
            *state = state.clone().on_close();
        }
    }

    /// First step of the two-step delete. Direct deletion without this
    /// handshake is a contract violation. No-op while read-only.
    pub fn request_delete(&self, id: ProjectId) -> Result<(), WorkflowError> {
        if self.read_only("request_delete") {
            return Ok(());
        }
        let mut state = self.state.lock().unwrap();
        *state = state
            .clone()
            .on_request_delete(id)
            .ok_or(WorkflowError::AlreadyActive)?;
        Ok(())
    }

    /// Execute the pending delete. A stale target surfaces the store's
    /// `NotFound`; either way the workflow returns to idle.
    pub fn confirm_delete(&self) -> Result<(), WorkflowError> {
        if self.edit_mode_off() {
            tracing::warn!("confirm_delete ignored: edit mode is disabled");
            return Err(WorkflowError::EditDisabled);
        }

        let mut state = self.state.lock().unwrap();
        let target = state.pending_delete().ok_or(WorkflowError::NoDeletePending)?;
        *state = state.clone().on_close();

        self.repo.remove(target).map_err(|err| {
            tracing::warn!(id = %target, "confirmed delete hit a stale target");
            WorkflowError::from(err)
        })
    }

    /// Abandon the pending delete without touching the repository.
    pub fn cancel_delete(&self) {
        let mut state = self.state.lock().unwrap();
        if state.is_delete_requested() {
            *state = state.clone().on_close();
        }
    }

    fn edit_mode_off(&self) -> bool {
        !self.edit_mode.is_enabled()
    }

    fn read_only(&self, operation: &str) -> bool {
        if self.edit_mode_off() {
            tracing::warn!(operation, "mutation ignored: edit mode is disabled");
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::EditModeController;
    use fh_core::ProjectFilter;

    fn draft(title: &str) -> ProjectDraft {
        ProjectDraft {
            title: title.into(),
            ..Default::default()
        }
    }

    struct Fixture {
        controller: EditModeController,
        repo: Arc<ProjectRepository>,
        workflow: MutationWorkflow,
    }

    fn fixture() -> Fixture {
        let controller = EditModeController::new();
        controller.toggle(); // editing on
        let repo = Arc::new(ProjectRepository::new());
        let workflow = MutationWorkflow::new(repo.clone(), controller.handle());
        Fixture {
            controller,
            repo,
            workflow,
        }
    }

    fn fixture_with(titles: &[&str]) -> Fixture {
        let f = fixture();
        for title in titles {
            f.repo.add(draft(title)).unwrap();
        }
        f
    }

    #[test]
    fn test_add_flow() {
        let f = fixture();
        f.workflow.open_add().unwrap();
        assert_eq!(f.workflow.form_template(), Some(ProjectDraft::default()));

        let stored = f.workflow.submit(draft("Finix")).unwrap();
        assert!(f.workflow.state().is_idle());
        assert_eq!(f.repo.list(), vec![stored]);
    }

    #[test]
    fn test_edit_flow_prepopulates_and_updates_in_place() {
        let f = fixture_with(&["a", "b"]);
        let b = f.repo.list()[0].clone();

        f.workflow.open_edit(b.id).unwrap();
        assert_eq!(f.workflow.form_template(), Some(ProjectDraft::from(&b)));

        let updated = f.workflow.submit(draft("b-renamed")).unwrap();
        assert_eq!(updated.id, b.id);
        assert_eq!(f.repo.list()[0].title, "b-renamed");
    }

    #[test]
    fn test_submit_without_form_fails() {
        let f = fixture();
        assert_eq!(
            f.workflow.submit(draft("x")).unwrap_err(),
            WorkflowError::NoFormOpen
        );
    }

    #[test]
    fn test_validation_blocks_submission_and_keeps_form_open() {
        let f = fixture();
        f.workflow.open_add().unwrap();

        let err = f.workflow.submit(draft("  ")).unwrap_err();
        assert_eq!(err, WorkflowError::Validation(ValidationError::EmptyTitle));
        assert!(f.workflow.state().is_form_open());
        assert!(f.repo.is_empty());
    }

    #[test]
    fn test_cancel_discards_unsaved_data() {
        let f = fixture();
        f.workflow.open_add().unwrap();
        f.workflow.cancel();

        assert!(f.workflow.state().is_idle());
        assert!(f.repo.is_empty());
        assert_eq!(
            f.workflow.submit(draft("late")).unwrap_err(),
            WorkflowError::NoFormOpen
        );
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let f = fixture_with(&["a"]);
        let id = f.repo.list()[0].id;

        f.workflow.request_delete(id).unwrap();
        assert_eq!(f.workflow.state().pending_delete(), Some(id));
        // Still present until confirmed.
        assert_eq!(f.repo.len(), 1);

        f.workflow.confirm_delete().unwrap();
        assert!(f.workflow.state().is_idle());
        assert!(f.repo.is_empty());
    }

    #[test]
    fn test_cancel_delete_leaves_store_unchanged() {
        let f = fixture_with(&["a"]);
        let before = f.repo.list();
        let id = before[0].id;

        f.workflow.request_delete(id).unwrap();
        f.workflow.cancel_delete();

        assert!(f.workflow.state().is_idle());
        assert_eq!(f.repo.list(), before);
    }

    #[test]
    fn test_confirm_without_request_fails() {
        let f = fixture_with(&["a"]);
        assert_eq!(
            f.workflow.confirm_delete().unwrap_err(),
            WorkflowError::NoDeletePending
        );
        assert_eq!(f.repo.len(), 1);
    }

    #[test]
    fn test_stale_confirm_surfaces_not_found_and_goes_idle() {
        let f = fixture_with(&["a"]);
        let id = f.repo.list()[0].id;

        f.workflow.request_delete(id).unwrap();
        // The view desynced: something else already removed the target.
        f.repo.remove(id).unwrap();

        let err = f.workflow.confirm_delete().unwrap_err();
        assert_eq!(err, WorkflowError::Store(ProjectStoreError::NotFound(id)));
        assert!(f.workflow.state().is_idle());
    }

    #[test]
    fn test_modals_are_mutually_exclusive() {
        let f = fixture_with(&["a"]);
        let id = f.repo.list()[0].id;

        f.workflow.open_add().unwrap();
        assert_eq!(
            f.workflow.request_delete(id).unwrap_err(),
            WorkflowError::AlreadyActive
        );
        f.workflow.cancel();

        f.workflow.request_delete(id).unwrap();
        assert_eq!(
            f.workflow.open_add().unwrap_err(),
            WorkflowError::AlreadyActive
        );
        assert_eq!(
            f.workflow.open_edit(id).unwrap_err(),
            WorkflowError::AlreadyActive
        );
    }

    #[test]
    fn test_open_edit_missing_target_is_not_found() {
        let f = fixture();
        let err = f.workflow.open_edit(ProjectId::new(7)).unwrap_err();
        assert_eq!(
            err,
            WorkflowError::Store(ProjectStoreError::NotFound(ProjectId::new(7)))
        );
        assert!(f.workflow.state().is_idle());
    }

    #[test]
    fn test_view_mode_entry_points_are_no_ops() {
        let f = fixture_with(&["a"]);
        let id = f.repo.list()[0].id;
        f.controller.toggle(); // back to view mode

        f.workflow.open_add().unwrap();
        f.workflow.open_edit(id).unwrap();
        f.workflow.request_delete(id).unwrap();

        assert!(f.workflow.state().is_idle());
        assert_eq!(f.repo.len(), 1);
    }

    #[test]
    fn test_view_mode_blocks_destructive_calls_mid_flight() {
        let f = fixture_with(&["a"]);
        let id = f.repo.list()[0].id;

        f.workflow.request_delete(id).unwrap();
        f.controller.toggle(); // toggled off with a delete pending

        assert_eq!(
            f.workflow.confirm_delete().unwrap_err(),
            WorkflowError::EditDisabled
        );
        assert_eq!(f.repo.len(), 1);

        // Cancelling stays available as the escape hatch.
        f.workflow.cancel_delete();
        assert!(f.workflow.state().is_idle());
    }

    #[test]
    fn test_filtered_view_follows_workflow_mutations() {
        let f = fixture();
        f.workflow.open_add().unwrap();
        let mut tagged = draft("Finix");
        tagged.tags = vec!["Java".into(), "Android SDK".into()];
        f.workflow.submit(tagged).unwrap();

        let criteria = ProjectFilter {
            search_text: "java".into(),
            ..Default::default()
        };
        assert_eq!(f.repo.filter(&criteria).len(), 1);
    }
}
