//! Username-scoped layout wiring
//!
//! One [`PortfolioLayout`] is mounted per `/{username}/...` view tree.
//! It owns the layout-scoped state (edit mode, project store, profile,
//! mutation workflow) and hands descendants a [`LayoutContext`] through
//! a single hand-off point; nothing here is global, so sibling layouts
//! never share edit state and a remount starts over in view mode.

use std::sync::Arc;

use fh_core::PortfolioSeed;

use crate::editing::{EditModeController, EditModeHandle};
use crate::profile::ProfileStore;
use crate::projects::{MutationWorkflow, ProjectRepository};

/// The explicit context descendants receive instead of an ambient,
/// framework-inherited value. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct LayoutContext {
    pub username: String,
    pub edit_mode: EditModeHandle,
}

/// One mounted `/{username}` view tree.
pub struct PortfolioLayout {
    username: String,
    edit_mode: EditModeController,
    projects: Arc<ProjectRepository>,
    profile: ProfileStore,
    workflow: MutationWorkflow,
}

impl PortfolioLayout {
    /// Mount the layout for `username`. Edit mode always starts
    /// disabled; it is never persisted across mounts.
    pub fn mount(username: impl Into<String>, seed: PortfolioSeed) -> Self {
        let username = username.into();
        let edit_mode = EditModeController::new();
        let projects = Arc::new(ProjectRepository::with_projects(seed.projects));
        let profile = ProfileStore::new(seed.profile, edit_mode.handle());
        let workflow = MutationWorkflow::new(projects.clone(), edit_mode.handle());

        tracing::debug!(%username, "portfolio layout mounted");
        Self {
            username,
            edit_mode,
            projects,
            profile,
            workflow,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn edit_mode(&self) -> &EditModeController {
        &self.edit_mode
    }

    pub fn projects(&self) -> &ProjectRepository {
        &self.projects
    }

    pub fn profile(&self) -> &ProfileStore {
        &self.profile
    }

    pub fn workflow(&self) -> &MutationWorkflow {
        &self.workflow
    }

    /// The single layout → children hand-off.
    pub fn context(&self) -> LayoutContext {
        LayoutContext {
            username: self.username.clone(),
            edit_mode: self.edit_mode.handle(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fh_core::{Profile, Project, ProjectDraft, ProjectId};

    fn seed() -> PortfolioSeed {
        PortfolioSeed {
            profile: Profile {
                display_name: "Ada".into(),
                ..Default::default()
            },
            projects: vec![Project::from_draft(
                ProjectId::new(1),
                ProjectDraft {
                    title: "Finix".into(),
                    ..Default::default()
                },
            )],
        }
    }

    #[test]
    fn test_mount_starts_in_view_mode_with_seed_data() {
        let layout = PortfolioLayout::mount("ada", seed());

        assert_eq!(layout.username(), "ada");
        assert!(!layout.edit_mode().is_enabled());
        assert_eq!(layout.projects().len(), 1);
        assert_eq!(layout.profile().profile().display_name, "Ada");
    }

    #[test]
    fn test_sibling_layouts_do_not_share_edit_state() {
        let first = PortfolioLayout::mount("ada", seed());
        let second = PortfolioLayout::mount("ada", seed());

        first.edit_mode().toggle();
        assert!(first.edit_mode().is_enabled());
        assert!(!second.edit_mode().is_enabled());
        assert!(!second.context().edit_mode.is_enabled());
    }

    #[test]
    fn test_remount_resets_edit_mode() {
        let layout = PortfolioLayout::mount("ada", seed());
        layout.edit_mode().toggle();
        drop(layout);

        let remounted = PortfolioLayout::mount("ada", seed());
        assert!(!remounted.edit_mode().is_enabled());
    }

    #[test]
    fn test_context_handle_tracks_the_layout_toggle() {
        let layout = PortfolioLayout::mount("ada", seed());
        let context = layout.context();

        layout.edit_mode().toggle();
        assert!(context.edit_mode.is_enabled());
    }

    #[test]
    fn test_workflow_is_wired_to_the_layout_store() {
        let layout = PortfolioLayout::mount("ada", seed());
        layout.edit_mode().toggle();

        layout.workflow().open_add().unwrap();
        layout
            .workflow()
            .submit(ProjectDraft {
                title: "Weatherly".into(),
                ..Default::default()
            })
            .unwrap();

        let titles: Vec<_> = layout
            .projects()
            .list()
            .iter()
            .map(|p| p.title.clone())
            .collect();
        assert_eq!(titles, vec!["Weatherly", "Finix"]);
    }
}
