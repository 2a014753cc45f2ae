use std::sync::Mutex;

use fh_core::Profile;

use crate::editing::EditModeHandle;

/// Owns the profile-card content of one portfolio namespace.
///
/// Every mutator checks the layout's edit mode itself and no-ops in
/// view mode; hiding the affordance in the rendering layer is not the
/// guard, this is.
pub struct ProfileStore {
    profile: Mutex<Profile>,
    edit_mode: EditModeHandle,
}

impl ProfileStore {
    pub fn new(profile: Profile, edit_mode: EditModeHandle) -> Self {
        Self {
            profile: Mutex::new(profile),
            edit_mode,
        }
    }

    /// Snapshot of the current profile.
    pub fn profile(&self) -> Profile {
        self.profile.lock().unwrap().clone()
    }

    pub fn set_headline(&self, headline: impl Into<String>) {
        if self.read_only("set_headline") {
            return;
        }
        self.profile.lock().unwrap().headline = headline.into();
    }

    pub fn set_about(&self, about: impl Into<String>) {
        if self.read_only("set_about") {
            return;
        }
        self.profile.lock().unwrap().about = about.into();
    }

    /// Append a skill. Blank entries and duplicates (case-insensitive)
    /// are skipped.
    pub fn add_skill(&self, skill: impl Into<String>) {
        if self.read_only("add_skill") {
            return;
        }
        let skill = skill.into();
        let skill = skill.trim();
        if skill.is_empty() {
            return;
        }

        let mut profile = self.profile.lock().unwrap();
        let exists = profile
            .skills
            .iter()
            .any(|s| s.eq_ignore_ascii_case(skill));
        if !exists {
            profile.skills.push(skill.to_string());
        }
    }

    /// Remove a skill by name. Removing an unknown skill is a no-op.
    pub fn remove_skill(&self, skill: &str) {
        if self.read_only("remove_skill") {
            return;
        }
        self.profile
            .lock()
            .unwrap()
            .skills
            .retain(|s| !s.eq_ignore_ascii_case(skill));
    }

    fn read_only(&self, operation: &str) -> bool {
        if !self.edit_mode.is_enabled() {
            tracing::warn!(operation, "profile mutation ignored: edit mode is disabled");
            return true;
        }
        false
    }
}
