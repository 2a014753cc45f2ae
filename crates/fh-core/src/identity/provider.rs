use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Identity provider a sign-in was performed with.
///
/// Resolved once when a [`super::UserIdentity`] is constructed; nothing
/// downstream matches on raw provider-id strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    Google,
    GitHub,
    Twitter,
    /// Email + password account managed by the gateway itself.
    Password,
}

impl ProviderKind {
    /// The wire-level provider id the gateway reports (e.g. `"google.com"`).
    pub fn provider_id(self) -> &'static str {
        match self {
            Self::Google => "google.com",
            Self::GitHub => "github.com",
            Self::Twitter => "twitter.com",
            Self::Password => "password",
        }
    }

    /// Parse a wire-level provider id. Unknown ids map to `None`.
    pub fn from_provider_id(id: &str) -> Option<Self> {
        match id {
            "google.com" => Some(Self::Google),
            "github.com" => Some(Self::GitHub),
            "twitter.com" => Some(Self::Twitter),
            "password" => Some(Self::Password),
            _ => None,
        }
    }

    /// Popup-based OAuth providers (everything except password accounts).
    pub fn is_popup(self) -> bool {
        !matches!(self, Self::Password)
    }
}

impl Display for ProviderKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.provider_id())
    }
}
