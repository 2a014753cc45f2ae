use serde::{Deserialize, Serialize};

use super::provider::ProviderKind;

/// Canonical snapshot of an authenticated user.
///
/// Created by the identity gateway on successful authentication; at most
/// one identity is "current" at any time (held by the session store).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Opaque gateway-assigned id.
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    /// Providers this account has signed in with.
    pub providers: Vec<ProviderKind>,
}

impl UserIdentity {
    pub fn has_provider(&self, kind: ProviderKind) -> bool {
        self.providers.contains(&kind)
    }

    /// The string shown as the on-screen identity (header, profile card).
    ///
    /// Twitter does not reliably expose an email address, so accounts
    /// carrying the Twitter provider prefer the display name; everyone
    /// else prefers the email. Falls back across the other field, then
    /// the uid.
    pub fn display_identity(&self) -> &str {
        let (first, second) = if self.has_provider(ProviderKind::Twitter) {
            (&self.display_name, &self.email)
        } else {
            (&self.email, &self.display_name)
        };

        first
            .as_deref()
            .or(second.as_deref())
            .unwrap_or(&self.uid)
    }
}
