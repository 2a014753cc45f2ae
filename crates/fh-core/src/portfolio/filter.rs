use serde::{Deserialize, Serialize};

use super::project::{Project, ProjectStatus};

/// Status facet of the derived project view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Ongoing,
}

impl StatusFilter {
    pub fn accepts(self, status: ProjectStatus) -> bool {
        match self {
            Self::All => true,
            Self::Completed => status == ProjectStatus::Completed,
            Self::Ongoing => status == ProjectStatus::Ongoing,
        }
    }
}

/// Criteria for the derived, recomputed-on-demand project view.
///
/// A project matches when its title OR any tag contains `search_text`
/// (case-insensitive) AND its status passes the facet. An empty search
/// text matches every project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProjectFilter {
    pub search_text: String,
    pub status: StatusFilter,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        self.status.accepts(project.status) && self.matches_text(project)
    }

    fn matches_text(&self, project: &Project) -> bool {
        let needle = self.search_text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        project.title.to_lowercase().contains(&needle)
            || project
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}

/// Project the filter criteria over a canonical sequence, preserving its
/// relative order.
pub fn filter_projects(projects: &[Project], criteria: &ProjectFilter) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect()
}
