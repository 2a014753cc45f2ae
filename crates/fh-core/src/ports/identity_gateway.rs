//! Identity gateway port
//!
//! Contract of the external authentication backend: popup sign-in for
//! the OAuth providers, email/password sign-up and login, password
//! reset, sign-out, and an identity-change subscription.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::identity::{CredentialError, ProviderAuthError, ProviderKind, UserIdentity};

/// One identity-change notification: the new current identity, or
/// `None` after sign-out / session expiry.
pub type IdentityChange = Option<UserIdentity>;

#[async_trait]
pub trait IdentityGatewayPort: Send + Sync {
    /// Run the popup sign-in flow for `provider`. May suspend for an
    /// externally-bounded duration (human interaction); a dismissed
    /// popup resolves as `PopupDismissed`, never stays pending.
    async fn sign_in_with_popup(
        &self,
        provider: ProviderKind,
    ) -> Result<UserIdentity, ProviderAuthError>;

    /// Create an email/password account and sign in as it.
    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserIdentity, CredentialError>;

    /// Sign in with existing email/password credentials.
    async fn sign_in(&self, email: &str, password: &str)
        -> Result<UserIdentity, CredentialError>;

    /// Dispatch a password-reset email. The side effect is external and
    /// not observable through this port.
    async fn send_password_reset(&self, email: &str) -> Result<(), CredentialError>;

    /// Sign the current identity out.
    async fn sign_out(&self) -> Result<(), ProviderAuthError>;

    /// Subscribe to identity changes. Dropping the receiver is the
    /// unsubscribe.
    fn identity_changes(&self) -> mpsc::Receiver<IdentityChange>;
}
