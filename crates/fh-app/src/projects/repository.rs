use std::sync::Mutex;

use fh_core::portfolio::filter::filter_projects;
use fh_core::{Project, ProjectDraft, ProjectFilter, ProjectId, ProjectStoreError};

/// In-memory store of the canonical project sequence.
///
/// The repository exclusively owns the sequence; every mutation goes
/// through `add`/`update`/`remove`, and `list`/`filter` hand out
/// snapshots the caller may not write back. Order is insertion order
/// with new entries prepended (most-recent-first).
pub struct ProjectRepository {
    projects: Mutex<Vec<Project>>,
}

impl ProjectRepository {
    pub fn new() -> Self {
        Self::with_projects(Vec::new())
    }

    /// Start from an existing sequence (seed data), first entry most
    /// recent.
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: Mutex::new(projects),
        }
    }

    /// Snapshot of the canonical sequence.
    pub fn list(&self) -> Vec<Project> {
        self.projects.lock().unwrap().clone()
    }

    pub fn get(&self, id: ProjectId) -> Option<Project> {
        self.projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// Validate the draft, allocate the next id and prepend the new
    /// project. Returns the stored entry.
    pub fn add(&self, draft: ProjectDraft) -> Result<Project, ProjectStoreError> {
        draft.validate()?;

        let mut projects = self.projects.lock().unwrap();
        let next_id = ProjectId::new(
            projects
                .iter()
                .map(|p| p.id.value())
                .max()
                .unwrap_or(0)
                + 1,
        );
        let project = Project::from_draft(next_id, draft);
        projects.insert(0, project.clone());

        tracing::debug!(id = %project.id, title = %project.title, "project added");
        Ok(project)
    }

    /// Replace the entry matching `id` in place, preserving its
    /// position. The id is immutable across edits.
    pub fn update(&self, id: ProjectId, draft: ProjectDraft) -> Result<Project, ProjectStoreError> {
        draft.validate()?;

        let mut projects = self.projects.lock().unwrap();
        let slot = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProjectStoreError::NotFound(id))?;
        *slot = Project::from_draft(id, draft);

        tracing::debug!(id = %id, "project updated");
        Ok(slot.clone())
    }

    /// Remove the entry matching `id`. A second remove of the same id is
    /// an explicit `NotFound`, not a silent success, so callers must not
    /// double-fire deletes.
    pub fn remove(&self, id: ProjectId) -> Result<(), ProjectStoreError> {
        let mut projects = self.projects.lock().unwrap();
        let index = projects
            .iter()
            .position(|p| p.id == id)
            .ok_or(ProjectStoreError::NotFound(id))?;
        projects.remove(index);

        tracing::debug!(id = %id, "project removed");
        Ok(())
    }

    /// The derived view: pure function of the canonical sequence and the
    /// criteria, recomputed on every call.
    pub fn filter(&self, criteria: &ProjectFilter) -> Vec<Project> {
        filter_projects(&self.projects.lock().unwrap(), criteria)
    }

    pub fn len(&self) -> usize {
        self.projects.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.lock().unwrap().is_empty()
    }
}

impl Default for ProjectRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fh_core::{ProjectStatus, StatusFilter, ValidationError};
    use std::collections::HashSet;

    fn draft(title: &str) -> ProjectDraft {
        ProjectDraft {
            title: title.into(),
            ..Default::default()
        }
    }

    fn stored(id: u64, title: &str) -> Project {
        Project::from_draft(ProjectId::new(id), draft(title))
    }

    #[test]
    fn test_add_prepends_most_recent_first() {
        let repo = ProjectRepository::new();
        repo.add(draft("first")).unwrap();
        repo.add(draft("second")).unwrap();

        let titles: Vec<_> = repo.list().iter().map(|p| p.title.clone()).collect();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[test]
    fn test_id_allocation_is_max_plus_one() {
        let repo = ProjectRepository::with_projects(vec![
            stored(5, "e"),
            stored(2, "b"),
            stored(1, "a"),
        ]);
        let added = repo.add(draft("f")).unwrap();
        assert_eq!(added.id, ProjectId::new(6));
    }

    #[test]
    fn test_ids_stay_unique_across_mixed_operations() {
        let repo = ProjectRepository::new();
        let a = repo.add(draft("a")).unwrap();
        let b = repo.add(draft("b")).unwrap();
        repo.remove(a.id).unwrap();
        repo.add(draft("c")).unwrap();
        repo.update(b.id, draft("b2")).unwrap();
        repo.add(draft("d")).unwrap();

        let ids: Vec<u64> = repo.list().iter().map(|p| p.id.value()).collect();
        let unique: HashSet<u64> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.iter().all(|&id| id >= 1));
    }

    #[test]
    fn test_add_requires_title() {
        let repo = ProjectRepository::new();
        let err = repo.add(draft("")).unwrap_err();
        assert_eq!(
            err,
            ProjectStoreError::Validation(ValidationError::EmptyTitle)
        );
        assert!(repo.is_empty());
    }

    #[test]
    fn test_update_preserves_position_and_id() {
        let repo = ProjectRepository::new();
        repo.add(draft("a")).unwrap();
        let b = repo.add(draft("b")).unwrap();
        repo.add(draft("c")).unwrap();

        let updated = repo.update(b.id, draft("b-renamed")).unwrap();
        assert_eq!(updated.id, b.id);

        let titles: Vec<_> = repo.list().iter().map(|p| p.title.clone()).collect();
        assert_eq!(titles, vec!["c", "b-renamed", "a"]);
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let repo = ProjectRepository::new();
        let err = repo.update(ProjectId::new(42), draft("x")).unwrap_err();
        assert_eq!(err, ProjectStoreError::NotFound(ProjectId::new(42)));
    }

    #[test]
    fn test_remove_missing_id_leaves_list_unchanged() {
        let repo = ProjectRepository::with_projects(vec![stored(1, "a")]);
        let before = repo.list();

        let err = repo.remove(ProjectId::new(9)).unwrap_err();
        assert_eq!(err, ProjectStoreError::NotFound(ProjectId::new(9)));
        assert_eq!(repo.list(), before);
    }

    #[test]
    fn test_second_remove_is_an_explicit_error() {
        let repo = ProjectRepository::new();
        let a = repo.add(draft("a")).unwrap();

        repo.remove(a.id).unwrap();
        assert_eq!(
            repo.remove(a.id).unwrap_err(),
            ProjectStoreError::NotFound(a.id)
        );
    }

    #[test]
    fn test_list_returns_a_snapshot() {
        let repo = ProjectRepository::new();
        repo.add(draft("a")).unwrap();

        let mut snapshot = repo.list();
        snapshot.clear();
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_filter_recomputes_from_current_state() {
        let repo = ProjectRepository::new();
        let mut done = draft("Finix");
        done.tags = vec!["Java".into(), "Android SDK".into()];
        done.status = ProjectStatus::Completed;
        repo.add(done).unwrap();

        let criteria = ProjectFilter {
            search_text: "java".into(),
            status: StatusFilter::All,
        };
        assert_eq!(repo.filter(&criteria).len(), 1);

        let ongoing_only = ProjectFilter {
            search_text: String::new(),
            status: StatusFilter::Ongoing,
        };
        assert!(repo.filter(&ongoing_only).is_empty());

        repo.add(draft("new thing")).unwrap();
        assert_eq!(repo.filter(&ongoing_only).len(), 1);
    }
}
