use crate::identity::ProviderKind;

use super::model::*;

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            general: GeneralSettings::default(),
            auth: AuthSettings::default(),
        }
    }
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            language: None,
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            enabled_providers: vec![
                ProviderKind::Google,
                ProviderKind::GitHub,
                ProviderKind::Twitter,
            ],
            allow_password_signup: true,
        }
    }
}
