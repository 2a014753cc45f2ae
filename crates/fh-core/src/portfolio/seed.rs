use serde::{Deserialize, Serialize};

use super::profile::Profile;
use super::project::Project;

/// Initial content for a freshly mounted portfolio namespace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioSeed {
    pub profile: Profile,
    pub projects: Vec<Project>,
}
