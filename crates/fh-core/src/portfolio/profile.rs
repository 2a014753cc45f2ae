use serde::{Deserialize, Serialize};

/// Profile-card content for one portfolio namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Profile {
    pub display_name: String,
    pub headline: String,
    pub about: String,
    pub skills: Vec<String>,
}
